//! Core error types for the Stockscope application.
//!
//! This module defines storage-agnostic error types. Backend-specific errors
//! (from rusqlite, HTTP, etc.) are converted to these types at the boundary.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the application core.
///
/// Derivations never return errors: malformed input is normalized to zero and
/// empty input has a defined result. Errors appear only on the storage and
/// query-service boundaries.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Storage operation failed: {0}")]
    Storage(#[from] StorageError),

    #[error("Query service request failed: {0}")]
    Query(String),

    #[error("Input validation failed: {0}")]
    Validation(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Backend-agnostic error type for durable store operations.
///
/// This enum uses `String` for all error details, allowing the storage layer
/// to convert backend-specific errors (rusqlite, etc.) into this format.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Failed to open or connect to the durable store.
    #[error("Failed to connect to store: {0}")]
    ConnectionFailed(String),

    /// A read or write against the store failed.
    #[error("Store query failed: {0}")]
    QueryFailed(String),

    /// The requested entry was not found.
    #[error("Entry not found: {0}")]
    NotFound(String),

    /// A stored value could not be serialized or deserialized.
    #[error("Failed to serialize stored value: {0}")]
    Serialization(String),
}

// === From implementations for common error types ===

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        StorageError::Serialization(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Storage(StorageError::from(err))
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Query(err.to_string())
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
