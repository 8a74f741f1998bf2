// Query Result Implementation
//
// This module defines the error and result types of statement execution and
// renders them as the `-- `-prefixed lines printed to the user.

use std::fmt;

use log::debug;
use thiserror::Error;

use crate::catalog::{CatalogError, Column};
use crate::common::types::{ERROR_PREFIX, OUTPUT_PREFIX, ROW_SEPARATOR};
use crate::query::parser::ParseError;
use crate::storage::StorageError;

/// One record: a positional list of field values
pub type Record = Vec<String>;

/// The kind of statement that failed, used to phrase error messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Create,
    Drop,
    Use,
    Alter,
    Query,
    Insert,
}

impl Action {
    /// Verb used when a schema change is refused
    fn change_verb(&self) -> &'static str {
        match self {
            Action::Alter => "modify",
            other => other.verb(),
        }
    }

    fn verb(&self) -> &'static str {
        match self {
            Action::Create => "create",
            Action::Drop => "drop",
            Action::Use => "use",
            Action::Alter => "alter",
            Action::Query => "query",
            Action::Insert => "insert into",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.verb())
    }
}

/// Represents a statement execution error
#[derive(Error, Debug)]
pub enum QueryError {
    /// Create or alter named the same column twice
    #[error("Failed to {} table {table} because there are multiple {column} variables.", .action.change_verb())]
    DuplicateColumnName {
        action: Action,
        table: String,
        column: String,
    },
    /// Select named a column the table does not have
    #[error("Failed to query table {table} because attribute {column} does not exist.")]
    AttributeNotFound { table: String, column: String },
    /// The table's backing file is not there
    #[error("Failed to {action} table {table} because it does not exist.")]
    TableFileMissing { action: Action, table: String },
    /// Create targeted a table that already exists
    #[error("Failed to create table {0} because it already exists.")]
    TableAlreadyExists(String),
    #[error("Failed to create database {0} because it already exists.")]
    DatabaseAlreadyExists(String),
    #[error("Failed to {action} database {database} because it does not exist.")]
    DatabaseNotFound { action: Action, database: String },
    #[error("Failed to {action} table {table} because no database is in use.")]
    NoDatabaseSelected { action: Action, table: String },
    /// Unparsable command, column list, predicate or value list
    #[error("Failed to complete command.\nIncorrect instruction: {input} ({reason})")]
    MalformedCommand { input: String, reason: String },
    /// An operator was driven out of order
    #[error("Execution error: {0}")]
    ExecutionError(String),
    /// Error from the storage layer
    #[error("Storage error: {0}")]
    StorageError(#[from] StorageError),
}

impl QueryError {
    /// Build a `MalformedCommand` from a parse failure
    pub fn malformed(input: &str, err: ParseError) -> Self {
        debug!("Rejecting '{}': {}", input, err);
        QueryError::MalformedCommand {
            input: input.trim().to_string(),
            reason: err.to_string(),
        }
    }

    /// Attach statement context to a storage failure
    pub fn from_storage(action: Action, table: &str, err: StorageError) -> Self {
        match err {
            StorageError::TableFileMissing(_) => QueryError::TableFileMissing {
                action,
                table: table.to_string(),
            },
            StorageError::TableFileExists(_) => QueryError::TableAlreadyExists(table.to_string()),
            other => QueryError::StorageError(other),
        }
    }

    /// Attach statement context to a schema failure
    pub fn from_catalog(action: Action, table: &str, err: CatalogError) -> Self {
        match err {
            CatalogError::DuplicateColumn(column) => QueryError::DuplicateColumnName {
                action,
                table: table.to_string(),
                column,
            },
            CatalogError::ColumnNotFound(column) => QueryError::AttributeNotFound {
                table: table.to_string(),
                column,
            },
        }
    }

    /// Render as `-- !`-prefixed lines
    pub fn to_lines(&self) -> Vec<String> {
        self.to_string()
            .lines()
            .map(|line| format!("{}{}", ERROR_PREFIX, line))
            .collect()
    }
}

/// Result type for query operations
pub type QueryResult<T> = Result<T, QueryError>;

/// Rows produced by a select, with the columns they were projected onto
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryResultSet {
    /// Projected columns, in output order
    columns: Vec<Column>,
    /// Display values, quotes already stripped
    rows: Vec<Record>,
}

impl QueryResultSet {
    /// Create a new empty result set with the given header
    pub fn new(columns: Vec<Column>) -> Self {
        QueryResultSet {
            columns,
            rows: Vec::new(),
        }
    }

    /// Add a row to the result set
    pub fn add_row(&mut self, row: Record) {
        self.rows.push(row);
    }

    /// Get the header columns
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Get the rows
    pub fn rows(&self) -> &[Record] {
        &self.rows
    }

    /// Get the number of rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Header row: `name type` per column, separated by `|`
    pub fn header_line(&self) -> String {
        let header: Vec<String> = self.columns.iter().map(|col| col.to_string()).collect();
        header.join(ROW_SEPARATOR)
    }

    /// Data rows, fields separated by `|` with no trailing separator
    pub fn row_lines(&self) -> Vec<String> {
        self.rows.iter().map(|row| row.join(ROW_SEPARATOR)).collect()
    }
}

/// Successful outcome of one statement
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryOutput {
    /// A one-line status report
    Message(String),
    /// Records appended by an insert
    Inserted(usize),
    /// Rows returned by a select
    ResultSet(QueryResultSet),
    /// The session should end
    Exit,
}

impl QueryOutput {
    /// Render as `-- `-prefixed lines
    pub fn to_lines(&self) -> Vec<String> {
        match self {
            QueryOutput::Message(message) => vec![format!("{}{}", OUTPUT_PREFIX, message)],
            QueryOutput::Inserted(1) => vec![format!("{}1 new record inserted.", OUTPUT_PREFIX)],
            QueryOutput::Inserted(count) => vec![format!("{}{} new records inserted.", OUTPUT_PREFIX, count)],
            QueryOutput::ResultSet(result) => std::iter::once(result.header_line())
                .chain(result.row_lines())
                .map(|line| format!("{}{}", OUTPUT_PREFIX, line))
                .collect(),
            QueryOutput::Exit => Vec::new(),
        }
    }
}
