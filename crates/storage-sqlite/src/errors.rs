//! Conversion of rusqlite errors into the core's storage-agnostic types.

use stockscope_core::errors::{Error, StorageError};

pub(crate) fn connection_err(err: rusqlite::Error) -> Error {
    Error::Storage(StorageError::ConnectionFailed(err.to_string()))
}

pub(crate) fn query_err(err: rusqlite::Error) -> Error {
    Error::Storage(StorageError::QueryFailed(err.to_string()))
}
