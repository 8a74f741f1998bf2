use std::path::PathBuf;

/// Separates fields within a schema or record line
pub const FIELD_DELIMITER: char = '\t';

/// Separates items in a command's column or value list
pub const STATEMENT_DELIMITER: char = ',';

/// Literal written into fields backfilled by `ALTER TABLE ... ADD`
pub const NULL_SENTINEL: &str = "NULL";

/// Marks a scalar value as a string literal
pub const QUOTE: char = '\'';

/// Separates fields in a rendered result row
pub const ROW_SEPARATOR: &str = "|";

/// Prefix of every line the engine prints
pub const OUTPUT_PREFIX: &str = "-- ";

/// Prefix of every error line the engine prints
pub const ERROR_PREFIX: &str = "-- !";

/// Directory created under the working directory when no root is given
pub const DEFAULT_ROOT_DIR: &str = "DatabaseSystem";

/// Projection wildcard
pub const WILDCARD: &str = "*";

/// Engine-wide settings
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Directory holding one sub-directory per database
    pub root_dir: PathBuf,
    /// Value written into rows backfilled by an alter
    pub null_sentinel: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            root_dir: PathBuf::from(DEFAULT_ROOT_DIR),
            null_sentinel: NULL_SENTINEL.to_string(),
        }
    }
}

impl EngineConfig {
    /// Create a config rooted at the given directory
    pub fn with_root(root_dir: impl Into<PathBuf>) -> Self {
        Self {
            root_dir: root_dir.into(),
            ..Self::default()
        }
    }
}
