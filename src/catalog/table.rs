//! Table Schema Module
//!
//! This module defines the Table type: the ordered column list stored on the
//! first line of a table file.

use std::collections::HashMap;

use super::column::Column;
use super::error::{CatalogError, CatalogResult};

/// Represents the schema of one table
#[derive(Debug, Clone)]
pub struct Table {
    /// Table name
    name: String,
    /// Columns in declaration order
    columns: Vec<Column>,
    /// Column name to index lookup; a later column with the same name replaces an earlier one
    column_map: HashMap<String, usize>,
}

impl Table {
    /// Create a new table, rejecting repeated column names
    pub fn new(name: impl Into<String>, columns: Vec<Column>) -> CatalogResult<Self> {
        let mut table = Table {
            name: name.into(),
            columns: Vec::with_capacity(columns.len()),
            column_map: HashMap::new(),
        };
        table.add_columns(columns)?;
        Ok(table)
    }

    /// Build a table from a schema read back from disk.
    ///
    /// No uniqueness check is made here: a legacy file may repeat a name, in
    /// which case lookups resolve to the most recently declared column.
    pub fn from_stored(name: impl Into<String>, columns: Vec<Column>) -> Self {
        let column_map = columns
            .iter()
            .enumerate()
            .map(|(idx, col)| (col.name().to_string(), idx))
            .collect();

        Table {
            name: name.into(),
            columns,
            column_map,
        }
    }

    /// Get the table name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get all columns
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Number of columns every record must carry
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// Check if the table has a column with the given name
    pub fn has_column(&self, name: &str) -> bool {
        self.column_map.contains_key(name)
    }

    /// Get the column index for a column name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.column_map.get(name).copied()
    }

    /// Get the column index for a column name, failing if it is unknown
    pub fn resolve(&self, name: &str) -> CatalogResult<usize> {
        self.column_index(name)
            .ok_or_else(|| CatalogError::ColumnNotFound(name.to_string()))
    }

    /// Append columns at the end of the schema.
    ///
    /// All names are checked against the existing columns and each other
    /// before anything is appended, so a failure leaves the table untouched.
    pub fn add_columns(&mut self, columns: Vec<Column>) -> CatalogResult<()> {
        let mut seen: Vec<&str> = Vec::with_capacity(columns.len());
        for col in &columns {
            if self.has_column(col.name()) || seen.contains(&col.name()) {
                return Err(CatalogError::DuplicateColumn(col.name().to_string()));
            }
            seen.push(col.name());
        }

        for col in columns {
            self.column_map.insert(col.name().to_string(), self.columns.len());
            self.columns.push(col);
        }
        Ok(())
    }
}
