// FlatDB Query Processing Module
//
// This module contains components for statement reading, parsing and execution.

pub mod executor;
pub mod parser;
pub mod script;

// Export key public interfaces
pub use executor::engine::ExecutionEngine;
pub use executor::result::{QueryError, QueryOutput, QueryResult};
pub use parser::Parser;
pub use script::StatementReader;
