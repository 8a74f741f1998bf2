// Database Module
//
// This module defines the Database type: one directory under the root holding
// one file per table.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::storage::error::{StorageError, StorageResult};
use crate::storage::TableFile;

/// Represents one database directory and the tables found in it
#[derive(Debug, Clone)]
pub struct Database {
    /// Database name
    name: String,
    /// Directory holding the table files
    dir: PathBuf,
    /// Known table names, sorted
    tables: BTreeSet<String>,
}

impl Database {
    /// Create a handle for a database with no known tables
    pub fn new(name: impl Into<String>, dir: impl Into<PathBuf>) -> Self {
        Database {
            name: name.into(),
            dir: dir.into(),
            tables: BTreeSet::new(),
        }
    }

    /// Load a database from its directory; hidden files are not tables
    pub fn load(name: impl Into<String>, dir: impl Into<PathBuf>) -> StorageResult<Self> {
        let mut database = Database::new(name, dir);
        let entries = fs::read_dir(&database.dir).map_err(|e| StorageError::dir_io(&database.dir, e))?;
        for entry in entries {
            let entry = entry.map_err(|e| StorageError::dir_io(&database.dir, e))?;
            let file_type = entry.file_type().map_err(|e| StorageError::dir_io(&entry.path(), e))?;
            match entry.file_name().into_string() {
                Ok(table) if file_type.is_file() && !table.starts_with('.') => {
                    database.tables.insert(table);
                }
                _ => continue,
            }
        }
        debug!("Loaded database {} with {} tables", database.name, database.tables.len());
        Ok(database)
    }

    /// Get the database name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the database directory
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Check if a table is known
    pub fn has_table(&self, table_name: &str) -> bool {
        self.tables.contains(table_name)
    }

    /// Known table names in sorted order
    pub fn table_names(&self) -> impl Iterator<Item = &str> {
        self.tables.iter().map(String::as_str)
    }

    /// Record a table; returns false if it was already known
    pub fn add_table(&mut self, table_name: impl Into<String>) -> bool {
        self.tables.insert(table_name.into())
    }

    /// Forget a table; returns false if it was not known
    pub fn drop_table(&mut self, table_name: &str) -> bool {
        self.tables.remove(table_name)
    }

    /// File handle for a table in this database
    pub fn table_file(&self, table_name: &str) -> TableFile {
        TableFile::new(&self.dir, table_name)
    }
}
