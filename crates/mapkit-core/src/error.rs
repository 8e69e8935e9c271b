//! Error handling for the map model
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

use crate::map_object::ObjectId;

/// Map model error type
#[derive(Error, Debug)]
pub enum Error {
    /// No object with the given id exists on the map
    #[error("Map object {id} not found")]
    ObjectNotFound {
        /// The id that was looked up.
        id: ObjectId,
    },

    /// A field value was rejected
    #[error("Invalid value for '{field}': {reason}")]
    InvalidValue {
        /// The field that was being set.
        field: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a missing-object error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::ObjectNotFound { .. })
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
