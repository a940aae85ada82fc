//! Error types for Starfire
//!
//! Every failure a caller can observe is an [`Error`] value. Nothing is raised
//! asynchronously, so callers branch on `Result` only.
//!
//! The wire contract is flat: each variant reports code 400 and a message,
//! see [`ErrorBody`].

use crate::key::KeyError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for Starfire operations
pub type Result<T> = std::result::Result<T, Error>;

/// The only status code produced on the wire
pub const ERROR_CODE: u16 = 400;

/// Error types for the Starfire facade
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Key failed validation before any store access
    #[error("{0}")]
    Validation(#[from] KeyError),

    /// The document store reported a failure
    #[error("{0}")]
    Store(String),

    /// Facade could not be constructed from the given settings
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl Error {
    /// Wire status code
    pub fn code(&self) -> u16 {
        ERROR_CODE
    }

    /// Whether this is a key validation failure
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation(_))
    }

    /// Convert into the serializable `{code, message}` shape
    pub fn to_body(&self) -> ErrorBody {
        ErrorBody {
            code: self.code(),
            message: self.to_string(),
        }
    }
}

/// Wire-level error shape: `{ "code": 400, "message": "..." }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Always 400
    pub code: u16,
    /// Human readable detail, the only distinguishing field
    pub message: String,
}

impl From<&Error> for ErrorBody {
    fn from(err: &Error) -> Self {
        err.to_body()
    }
}

impl From<Error> for ErrorBody {
    fn from(err: Error) -> Self {
        err.to_body()
    }
}
