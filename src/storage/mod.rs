// Storage Module
//
// Flat-file table storage: the record codec and the per-table file handle.

pub mod codec;
pub mod error;
pub mod table_file;

pub use self::error::{StorageError, StorageResult};
pub use self::table_file::{TableContents, TableFile};
