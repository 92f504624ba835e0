//! # Error Handling
//!
//! This module defines the centralized error type for `user-store`. It uses
//! the `thiserror` library to describe every failure mode of a single
//! invocation with a clear message.
//!
//! ## Key Components
//!
//! - **`Error`**: The enum of all failure kinds. Validation, decode, encode
//!   and I/O failures are terminal. `Conflict` and `NotFound` are produced by
//!   the collection operations; the dispatcher turns them into soft results
//!   written to the output sink.
//!
//! - **`Result<T>`**: A type alias for `std::result::Result<T, Error>`.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for user-store operations
#[derive(Error, Debug)]
pub enum Error {
    /// A flag is missing or holds an unsupported value.
    #[error("{message}")]
    Validation { message: String },

    /// JSON input could not be decoded, either the stored collection or an
    /// incoming item.
    #[error("Error decoding {context}: {source}")]
    Decode {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The in-memory collection could not be serialized.
    #[error("Error encoding records: {source}")]
    Encode {
        #[source]
        source: serde_json::Error,
    },

    /// A record with the same id is already stored.
    #[error("Item with id {id} already exists")]
    Conflict { id: String },

    /// No record carries the requested id.
    #[error("Item with id {id} not found")]
    NotFound { id: String },

    /// A filesystem operation on the backing file failed.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing to the output sink failed.
    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),
}

impl Error {
    /// Build a validation error from any message.
    pub fn validation(message: impl Into<String>) -> Self {
        Error::Validation {
            message: message.into(),
        }
    }

    /// Wrap an I/O error with the path it concerns.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    /// True for the kinds the dispatcher reports without failing.
    pub fn is_soft(&self) -> bool {
        matches!(self, Error::Conflict { .. } | Error::NotFound { .. })
    }
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
