use thiserror::Error;

/// Errors raised while building or resolving a table schema
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Duplicate column: {0}")]
    DuplicateColumn(String),
    #[error("Column not found: {0}")]
    ColumnNotFound(String),
}

/// Result type for schema operations
pub type CatalogResult<T> = Result<T, CatalogError>;
