//! Schemaless documents

use serde_json::{Map, Value};

/// A schemaless document: a JSON object
pub type Document = Map<String, Value>;

/// A document as returned by a query, with its identifier
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentSnapshot {
    /// Document identifier within its collection
    pub id: String,
    /// Document body
    pub data: Document,
}

impl DocumentSnapshot {
    /// Create a snapshot
    pub fn new(id: impl Into<String>, data: Document) -> Self {
        DocumentSnapshot {
            id: id.into(),
            data,
        }
    }

    /// Top-level field lookup
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.data.get(field)
    }
}
