// Common Definitions
//
// Constants and configuration shared by the storage, catalog and query layers.

pub mod types;

pub use self::types::EngineConfig;
