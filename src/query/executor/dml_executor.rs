// Data Manipulation Language Executor
//
// This module handles execution of INSERT: one value list becomes one record
// line appended to the table file.

use log::{debug, info};

use crate::query::executor::result::{Action, QueryError, QueryOutput, QueryResult};
use crate::query::parser::components::parse_value_list;
use crate::storage::TableFile;

/// Handles execution of DML operations
#[derive(Debug, Default)]
pub struct DmlExecutor;

impl DmlExecutor {
    pub fn new() -> Self {
        DmlExecutor
    }

    /// Append one record built from a comma-separated value list.
    ///
    /// Values are stored as written (trimmed, quotes kept). The value count is
    /// not checked against the schema and no keys are enforced.
    pub fn insert_record(&self, table: &TableFile, values: &str) -> QueryResult<QueryOutput> {
        let values = parse_value_list(values).map_err(|e| QueryError::malformed(values, e))?;

        table
            .append_record(&values)
            .map_err(|e| QueryError::from_storage(Action::Insert, table.name(), e))?;

        debug!("Inserted {:?} into {}", values, table.name());
        info!("Inserted 1 record into table {}", table.name());
        Ok(QueryOutput::Inserted(1))
    }
}
