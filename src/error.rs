//! Error types for Memobook
//!
//! Covers every failure that can reach the caller. Load problems are not
//! listed here: the store recovers from them and reports a `LoadOutcome`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Memobook operations
pub type Result<T> = std::result::Result<T, MemoError>;

/// Error type for Memobook operations
#[derive(Error, Debug)]
pub enum MemoError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Configuration failed validation
    #[error("Invalid configuration: {0}")]
    Validation(String),

    /// Edit target outside the current collection
    #[error("Memo index {index} is out of range (collection has {len} memos)")]
    IndexOutOfRange { index: usize, len: usize },

    /// Selection was taken against an older version of the collection
    #[error("Selection is stale (taken at version {expected}, collection is at version {actual})")]
    StaleSelection { expected: u64, actual: u64 },

    /// Writing the memo file failed; in-memory state has diverged from disk
    #[error("Failed to save memos to {path}: {source}")]
    Persistence {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Other errors
    #[error("{0}")]
    Other(String),
}

impl MemoError {
    /// Whether the error means the last change may not survive a restart
    pub fn is_persistence(&self) -> bool {
        matches!(self, MemoError::Persistence { .. })
    }
}
