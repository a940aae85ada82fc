//! Core types for Starfire
//!
//! This crate defines the types shared by every layer:
//! - KeyCodec: escaping between logical keys and storage identifiers
//! - Record / ListItem: values returned by reads and listings
//! - Query: range listing parameters
//! - Event: notifications emitted after mutations
//! - Timestamp: millisecond wall-clock time
//! - Error: flat error taxonomy with the `{code, message}` wire shape

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod event;
pub mod key;
pub mod query;
pub mod record;
pub mod timestamp;

pub use error::{Error, ErrorBody, Result, ERROR_CODE};
pub use event::{Event, EventKind, ItemFailure};
pub use key::{KeyCodec, KeyError, DEFAULT_DELIMITER, DEFAULT_SEPARATOR};
pub use query::Query;
pub use record::{is_falsy, read_value, ListItem, Record};
pub use timestamp::Timestamp;
