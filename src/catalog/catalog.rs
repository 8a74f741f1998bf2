// Catalog
//
// The catalog is the process's view of the databases under the root directory
// and of the database currently in use. It is an ordinary value owned by the
// caller and passed to the execution engine.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};

use super::database::Database;
use crate::query::executor::result::{Action, QueryError, QueryResult};
use crate::storage::error::StorageError;
use crate::storage::TableFile;

/// The Catalog is the central repository of databases and their tables
#[derive(Debug)]
pub struct Catalog {
    /// Directory holding one sub-directory per database
    root: PathBuf,
    /// Databases by name
    databases: HashMap<String, Database>,
    /// Database selected by USE
    current: Option<String>,
}

impl Catalog {
    /// Open the catalog rooted at `root`, creating the directory if needed
    /// and loading every database found in it
    pub fn open(root: impl Into<PathBuf>) -> QueryResult<Self> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|e| StorageError::dir_io(&root, e))?;

        let mut databases = HashMap::new();
        let entries = fs::read_dir(&root).map_err(|e| StorageError::dir_io(&root, e))?;
        for entry in entries {
            let entry = entry.map_err(|e| StorageError::dir_io(&root, e))?;
            let file_type = entry.file_type().map_err(|e| StorageError::dir_io(&entry.path(), e))?;
            match entry.file_name().into_string() {
                Ok(name) if file_type.is_dir() && !name.starts_with('.') => {
                    let database = Database::load(name.clone(), entry.path())?;
                    databases.insert(name, database);
                }
                _ => continue,
            }
        }

        info!("Opened catalog at {} with {} databases", root.display(), databases.len());
        Ok(Catalog {
            root,
            databases,
            current: None,
        })
    }

    /// Get the root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Name of the database in use, if any
    pub fn current_database(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Check if a database exists
    pub fn database_exists(&self, name: &str) -> bool {
        self.databases.contains_key(name)
    }

    /// All database names, sorted
    pub fn database_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.databases.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Create a database directory
    pub fn create_database(&mut self, name: &str) -> QueryResult<()> {
        check_name(name)?;
        let dir = self.root.join(name);
        if self.databases.contains_key(name) || dir.exists() {
            return Err(QueryError::DatabaseAlreadyExists(name.to_string()));
        }

        fs::create_dir(&dir).map_err(|e| StorageError::dir_io(&dir, e))?;
        self.databases.insert(name.to_string(), Database::new(name, dir));
        info!("Created database {}", name);
        Ok(())
    }

    /// Delete a database directory and every table in it
    pub fn drop_database(&mut self, name: &str) -> QueryResult<()> {
        let database = self.databases.get(name).ok_or_else(|| QueryError::DatabaseNotFound {
            action: Action::Drop,
            database: name.to_string(),
        })?;

        let dir = database.dir().to_path_buf();
        fs::remove_dir_all(&dir).map_err(|e| StorageError::dir_io(&dir, e))?;
        self.databases.remove(name);
        if self.current.as_deref() == Some(name) {
            debug!("Database {} was in use; no database selected now", name);
            self.current = None;
        }
        info!("Dropped database {}", name);
        Ok(())
    }

    /// Select the database later table statements run against
    pub fn use_database(&mut self, name: &str) -> QueryResult<()> {
        if !self.databases.contains_key(name) {
            return Err(QueryError::DatabaseNotFound {
                action: Action::Use,
                database: name.to_string(),
            });
        }
        self.current = Some(name.to_string());
        debug!("Using database {}", name);
        Ok(())
    }

    /// Check if a table is known in the database in use
    pub fn table_exists(&self, table_name: &str) -> bool {
        self.current_db().is_some_and(|db| db.has_table(table_name))
    }

    /// Table names of the database in use, sorted
    pub fn table_names(&self) -> Vec<&str> {
        self.current_db().map(|db| db.table_names().collect()).unwrap_or_default()
    }

    /// Record a newly created table in the database in use
    pub fn register_table(&mut self, table_name: &str) {
        if let Some(db) = self.current_db_mut() {
            db.add_table(table_name);
        }
    }

    /// Forget a dropped table in the database in use
    pub fn unregister_table(&mut self, table_name: &str) {
        if let Some(db) = self.current_db_mut() {
            db.drop_table(table_name);
        }
    }

    /// File handle for a table in the database in use
    pub fn table_file(&self, action: Action, table_name: &str) -> QueryResult<TableFile> {
        check_name(table_name)?;
        let db = self.current_db().ok_or_else(|| QueryError::NoDatabaseSelected {
            action,
            table: table_name.to_string(),
        })?;
        Ok(db.table_file(table_name))
    }

    fn current_db(&self) -> Option<&Database> {
        self.current.as_ref().and_then(|name| self.databases.get(name))
    }

    fn current_db_mut(&mut self) -> Option<&mut Database> {
        let name = self.current.as_ref()?;
        self.databases.get_mut(name)
    }
}

/// Names become path components, so they may not navigate or hide
fn check_name(name: &str) -> QueryResult<()> {
    if name.is_empty() || name.starts_with('.') || name.contains(['/', '\\']) {
        return Err(QueryError::MalformedCommand {
            input: name.to_string(),
            reason: "invalid name".to_string(),
        });
    }
    Ok(())
}
