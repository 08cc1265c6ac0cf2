//! Error types for the storage layer.

use thiserror::Error;
use threadline_model::ModelError;

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Errors that can occur in storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Database error from SQLite.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// A stored row failed rehydration (missing required fields, bad id).
    /// The row is corrupt, not merely old; migration gaps never surface
    /// here.
    #[error("corrupt row: {0}")]
    Corrupt(#[from] ModelError),

    /// Thread not found.
    #[error("thread not found: {0}")]
    ThreadNotFound(String),
}
