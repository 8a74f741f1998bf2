// Table Scan Operator
//
// This module implements the table scan operator: it loads a table file into
// memory on init and yields its records in file order.

use log::debug;

use crate::catalog::Column;
use crate::query::executor::operators::Operator;
use crate::query::executor::result::{Action, QueryError, QueryResult, Record};
use crate::storage::{TableContents, TableFile};

/// A table scan operator that scans all records of a table
pub struct TableScanOperator {
    /// Table file to scan
    table: TableFile,
    /// Contents loaded during the first init
    contents: Option<TableContents>,
    /// Index of the next record to yield
    position: usize,
    /// Initialization status
    initialized: bool,
}

impl TableScanOperator {
    /// Create a new table scan operator
    pub fn new(table: TableFile) -> Self {
        TableScanOperator {
            table,
            contents: None,
            position: 0,
            initialized: false,
        }
    }

    /// Schema of the scanned table, available once the operator is initialized
    pub fn schema(&self) -> Option<&[Column]> {
        self.contents.as_ref().map(|contents| contents.schema.as_slice())
    }
}

impl Operator for TableScanOperator {
    /// Load the table; re-initializing rewinds without reading the file again
    fn init(&mut self) -> QueryResult<()> {
        if self.contents.is_none() {
            let contents = self
                .table
                .read()
                .map_err(|e| QueryError::from_storage(Action::Query, self.table.name(), e))?;
            debug!("Scan of {} loaded {} records", self.table.name(), contents.records.len());
            self.contents = Some(contents);
        }
        self.position = 0;
        self.initialized = true;
        Ok(())
    }

    fn next(&mut self) -> QueryResult<Option<Record>> {
        if !self.initialized {
            return Err(QueryError::ExecutionError("Operator not initialized".to_string()));
        }
        let record = self
            .contents
            .as_ref()
            .and_then(|contents| contents.records.get(self.position))
            .cloned();
        if record.is_some() {
            self.position += 1;
        }
        Ok(record)
    }

    fn close(&mut self) -> QueryResult<()> {
        self.initialized = false;
        self.contents = None;
        Ok(())
    }
}
