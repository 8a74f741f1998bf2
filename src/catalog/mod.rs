//! Catalog Management Module
//!
//! This module manages metadata: the databases under the root directory, the
//! tables in each, and the column schema of a table.

pub mod catalog;
pub mod column;
pub mod database;
pub mod error;
pub mod table;

// Re-export key types
pub use self::catalog::Catalog;
pub use self::column::Column;
pub use self::database::Database;
pub use self::error::{CatalogError, CatalogResult};
pub use self::table::Table;
