// Query Executor Module
//
// This module is responsible for executing parsed statements and producing
// results. SELECT runs through the iterator-based operator pipeline.

pub mod ddl_executor;
pub mod dml_executor;
pub mod engine;
pub mod operators;
pub mod result;
pub mod select;

// Export key types
pub use self::engine::ExecutionEngine;
pub use self::operators::Operator;
pub use self::result::{Action, QueryError, QueryOutput, QueryResult, QueryResultSet, Record};
