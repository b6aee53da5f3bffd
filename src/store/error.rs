//! Content Library Errors

use thiserror::Error;

/// Errors from the content library
#[derive(Error, Debug)]
pub enum StoreError {
    /// No item with the given id exists for the caller
    #[error("Content item not found: {0}")]
    NotFound(String),

    /// Underlying SQLite error
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Payload could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error (data directory creation)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for content library operations
pub type StoreResult<T> = Result<T, StoreError>;
