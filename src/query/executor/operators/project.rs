// Projection Operator Implementation
//
// This module implements the projection operator for selecting specific columns
// and turning stored fields into display values.

use crate::query::executor::operators::Operator;
use crate::query::executor::result::{QueryError, QueryResult, Record};
use crate::storage::codec::strip_quotes;

/// Projection operator that selects specific columns from input records
pub struct ProjectionOperator {
    /// The input operator
    input: Box<dyn Operator>,
    /// Field positions to emit, in output order; `None` emits every field
    indices: Option<Vec<usize>>,
    /// Whether the operator is initialized
    initialized: bool,
}

impl ProjectionOperator {
    /// Create a new projection operator
    pub fn new(input: Box<dyn Operator>, indices: Vec<usize>) -> Self {
        ProjectionOperator {
            input,
            indices: Some(indices),
            initialized: false,
        }
    }

    /// Create a projection that passes every stored field through, however
    /// many the record has
    pub fn all(input: Box<dyn Operator>) -> Self {
        ProjectionOperator {
            input,
            indices: None,
            initialized: false,
        }
    }

    /// Pick the projected fields, quote-stripped; a field past the end of a
    /// short record comes out empty
    fn project_record(&self, record: &Record) -> Record {
        match &self.indices {
            Some(indices) => indices
                .iter()
                .map(|&index| record.get(index).map(|v| strip_quotes(v)).unwrap_or_default().to_string())
                .collect(),
            None => record.iter().map(|v| strip_quotes(v).to_string()).collect(),
        }
    }
}

impl Operator for ProjectionOperator {
    fn init(&mut self) -> QueryResult<()> {
        self.input.init()?;
        self.initialized = true;
        Ok(())
    }

    /// Get the next record with projected columns
    fn next(&mut self) -> QueryResult<Option<Record>> {
        if !self.initialized {
            return Err(QueryError::ExecutionError("Operator not initialized".to_string()));
        }
        Ok(self.input.next()?.map(|record| self.project_record(&record)))
    }

    fn close(&mut self) -> QueryResult<()> {
        self.initialized = false;
        self.input.close()
    }
}
