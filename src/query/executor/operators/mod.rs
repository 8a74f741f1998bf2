// Query Operators Module
//
// This module defines the operators used by select in the iterator-based
// execution model: a table scan feeding an optional filter feeding a projection.

pub mod scan;
pub mod filter;
pub mod project;

use crate::query::executor::result::{QueryResult, Record};
use crate::query::parser::ast::Predicate;
use crate::storage::TableFile;

/// The Operator trait defines the interface for all query execution operators
/// in the iterator-based execution model. Each operator pulls records from its
/// input and passes them on to the operator above it.
pub trait Operator {
    /// Initialize the operator before execution
    fn init(&mut self) -> QueryResult<()>;

    /// Get the next record from this operator
    fn next(&mut self) -> QueryResult<Option<Record>>;

    /// Close the operator and release any resources
    fn close(&mut self) -> QueryResult<()>;
}

// Factory functions for creating operators
pub fn create_table_scan(table: TableFile) -> Box<scan::TableScanOperator> {
    Box::new(scan::TableScanOperator::new(table))
}

pub fn create_filter(input: Box<dyn Operator>, predicate: Predicate, column_index: usize) -> Box<dyn Operator> {
    Box::new(filter::FilterOperator::new(input, predicate, column_index))
}

pub fn create_projection(input: Box<dyn Operator>, indices: Vec<usize>) -> Box<dyn Operator> {
    Box::new(project::ProjectionOperator::new(input, indices))
}

pub fn create_full_projection(input: Box<dyn Operator>) -> Box<dyn Operator> {
    Box::new(project::ProjectionOperator::all(input))
}
