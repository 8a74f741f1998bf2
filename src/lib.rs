// FlatDB Database Engine

pub mod catalog;
pub mod common;
pub mod query;
pub mod session;
pub mod storage;

// Re-export key items for convenient access
pub use catalog::Catalog;
pub use common::EngineConfig;
pub use query::executor::engine::ExecutionEngine;
pub use query::executor::result::{QueryError, QueryOutput, QueryResult};
pub use query::parser::Parser;
pub use session::Session;
pub use storage::TableFile;
