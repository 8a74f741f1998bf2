// Column Management Module
//
// This module defines the Column type that represents one declared table attribute.

use std::fmt;

/// Represents a column in a table schema
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// Column name
    name: String,
    /// Declared type, kept as free text and never enforced
    data_type: String,
}

impl Column {
    /// Create a new column
    pub fn new(name: impl Into<String>, data_type: impl Into<String>) -> Self {
        Column {
            name: name.into(),
            data_type: data_type.into(),
        }
    }

    /// Get the column name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the declared type text
    pub fn data_type(&self) -> &str {
        &self.data_type
    }
}

/// Renders as `name type`, the form used in schema lines and header rows
impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.data_type)
    }
}
