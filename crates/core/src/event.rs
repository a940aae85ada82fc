//! Mutation events
//!
//! Each mutating facade call produces one [`Event`]. The JSON shape is the
//! public contract:
//!
//! ```text
//! {"event":"write","key":"a/b","timestamp":1700000000000}
//! {"event":"delete","keys":["a","b"],"timestamp":...}
//! {"event":"importDB","keys":["a","b"],"timestamp":...}
//! {"event":"deleteDB","timestamp":...}
//! ```
//!
//! `delete` and `importDB` list every input key whether or not the
//! corresponding store call succeeded. The `failed` list carries per-key
//! failures for callers that need them and is omitted from JSON when empty.

use crate::timestamp::Timestamp;
use serde::{Deserialize, Serialize};

/// Discriminant of an [`Event`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// Single-key put
    Write,
    /// One or more keys deleted
    Delete,
    /// Bulk import finished
    ImportDb,
    /// Delete-all finished
    DeleteDb,
}

impl EventKind {
    /// Name used in the `event` field
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Write => "write",
            EventKind::Delete => "delete",
            EventKind::ImportDb => "importDB",
            EventKind::DeleteDb => "deleteDB",
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A key whose sub-operation failed inside a bulk call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemFailure {
    /// Logical key
    pub key: String,
    /// Store or validation message
    pub message: String,
}

/// Notification emitted after a mutating operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event")]
pub enum Event {
    /// A record was written
    #[serde(rename = "write")]
    Write {
        /// Logical key as given by the caller
        key: String,
        /// Dispatch time
        timestamp: Timestamp,
    },

    /// Records were deleted
    #[serde(rename = "delete")]
    Delete {
        /// Every requested key, in input order
        keys: Vec<String>,
        /// Keys whose delete failed
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        failed: Vec<ItemFailure>,
        /// Dispatch time
        timestamp: Timestamp,
    },

    /// A bulk import settled
    #[serde(rename = "importDB")]
    ImportDb {
        /// Every imported key, in input order
        keys: Vec<String>,
        /// Keys whose write failed
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        failed: Vec<ItemFailure>,
        /// Dispatch time
        timestamp: Timestamp,
    },

    /// The collection was cleared
    #[serde(rename = "deleteDB")]
    DeleteDb {
        /// Dispatch time
        timestamp: Timestamp,
    },
}

impl Event {
    /// Write event stamped now
    pub fn write(key: impl Into<String>) -> Self {
        Event::Write {
            key: key.into(),
            timestamp: Timestamp::now(),
        }
    }

    /// Delete event stamped now
    pub fn delete(keys: Vec<String>, failed: Vec<ItemFailure>) -> Self {
        Event::Delete {
            keys,
            failed,
            timestamp: Timestamp::now(),
        }
    }

    /// Import event stamped now
    pub fn import_db(keys: Vec<String>, failed: Vec<ItemFailure>) -> Self {
        Event::ImportDb {
            keys,
            failed,
            timestamp: Timestamp::now(),
        }
    }

    /// Delete-all event stamped now
    pub fn delete_db() -> Self {
        Event::DeleteDb {
            timestamp: Timestamp::now(),
        }
    }

    /// Event discriminant
    pub fn kind(&self) -> EventKind {
        match self {
            Event::Write { .. } => EventKind::Write,
            Event::Delete { .. } => EventKind::Delete,
            Event::ImportDb { .. } => EventKind::ImportDb,
            Event::DeleteDb { .. } => EventKind::DeleteDb,
        }
    }

    /// Dispatch time
    pub fn timestamp(&self) -> Timestamp {
        match self {
            Event::Write { timestamp, .. }
            | Event::Delete { timestamp, .. }
            | Event::ImportDb { timestamp, .. }
            | Event::DeleteDb { timestamp } => *timestamp,
        }
    }

    /// Keys named by the event (empty for `deleteDB`)
    pub fn keys(&self) -> Vec<&str> {
        match self {
            Event::Write { key, .. } => vec![key.as_str()],
            Event::Delete { keys, .. } | Event::ImportDb { keys, .. } => {
                keys.iter().map(String::as_str).collect()
            }
            Event::DeleteDb { .. } => Vec::new(),
        }
    }

    /// Per-key failures carried by bulk events
    pub fn failures(&self) -> &[ItemFailure] {
        match self {
            Event::Delete { failed, .. } | Event::ImportDb { failed, .. } => failed,
            Event::Write { .. } | Event::DeleteDb { .. } => &[],
        }
    }
}
