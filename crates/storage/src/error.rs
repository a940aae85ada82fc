//! Errors reported by a document store

use thiserror::Error;

/// Result type alias for store operations
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Failures of the external document store
///
/// The facade flattens all of these to a single code, so the message is what
/// callers end up seeing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Backend could not be reached
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// Backend refused a request for one document
    #[error("request rejected: {0}")]
    Rejected(String),
}
