use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error on {path}: {source}")]
    IoError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Table file not found: {0}")]
    TableFileMissing(PathBuf),
    #[error("Table file already exists: {0}")]
    TableFileExists(PathBuf),
    #[error("Table file has no schema line: {0}")]
    MissingSchema(PathBuf),
    #[error("Malformed schema field: '{0}'")]
    MalformedSchema(String),
}

impl StorageError {
    /// Wrap an I/O error with the path it happened on, turning a missing file
    /// into `TableFileMissing`
    pub(crate) fn from_io(path: &Path, source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::NotFound => StorageError::TableFileMissing(path.to_path_buf()),
            _ => StorageError::IoError {
                path: path.to_path_buf(),
                source,
            },
        }
    }
}

impl StorageError {
    /// Wrap an I/O error on a directory; a missing directory is never a
    /// missing table file
    pub(crate) fn dir_io(path: &Path, source: io::Error) -> Self {
        StorageError::IoError {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;
