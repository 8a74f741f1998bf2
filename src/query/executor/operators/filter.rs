// Filter Operator Implementation
//
// This module implements the filter operator for keeping records that satisfy
// a single column comparison.

use log::trace;

use crate::query::executor::operators::Operator;
use crate::query::executor::result::{QueryError, QueryResult, Record};
use crate::query::parser::ast::Predicate;

/// Filter operator that filters records based on a predicate
pub struct FilterOperator {
    /// The input operator
    input: Box<dyn Operator>,
    /// The predicate to evaluate
    predicate: Predicate,
    /// Position of the predicate column within a record
    column_index: usize,
    /// Whether the operator is initialized
    initialized: bool,
}

impl FilterOperator {
    /// Create a new filter operator
    pub fn new(input: Box<dyn Operator>, predicate: Predicate, column_index: usize) -> Self {
        FilterOperator {
            input,
            predicate,
            column_index,
            initialized: false,
        }
    }

    /// A record too short to hold the column never matches
    fn evaluate_predicate(&self, record: &Record) -> bool {
        record
            .get(self.column_index)
            .is_some_and(|value| self.predicate.matches(value))
    }
}

impl Operator for FilterOperator {
    fn init(&mut self) -> QueryResult<()> {
        self.input.init()?;
        self.initialized = true;
        Ok(())
    }

    /// Get the next record that satisfies the predicate
    fn next(&mut self) -> QueryResult<Option<Record>> {
        if !self.initialized {
            return Err(QueryError::ExecutionError("Operator not initialized".to_string()));
        }

        while let Some(record) = self.input.next()? {
            if self.evaluate_predicate(&record) {
                return Ok(Some(record));
            }
            trace!("Record {:?} rejected by {}", record, self.predicate);
        }
        Ok(None)
    }

    fn close(&mut self) -> QueryResult<()> {
        self.initialized = false;
        self.input.close()
    }
}
