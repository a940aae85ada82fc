//! Records and listing results

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A logical key with its value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Logical (unescaped) key
    pub key: String,
    /// Stored value, `null` when missing
    #[serde(default)]
    pub value: Value,
}

impl Record {
    /// Create a record
    pub fn new(key: impl Into<String>, value: Value) -> Self {
        Record {
            key: key.into(),
            value,
        }
    }

    /// Record with a `null` value
    pub fn empty(key: impl Into<String>) -> Self {
        Record::new(key, Value::Null)
    }
}

/// One entry of a listing: a bare key, or a key with its value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ListItem {
    /// Returned when values were not requested
    Key(String),
    /// Returned when values were requested
    Record(Record),
}

impl ListItem {
    /// The logical key of this entry
    pub fn key(&self) -> &str {
        match self {
            ListItem::Key(key) => key,
            ListItem::Record(record) => &record.key,
        }
    }

    /// The value, if this entry carries one
    pub fn value(&self) -> Option<&Value> {
        match self {
            ListItem::Key(_) => None,
            ListItem::Record(record) => Some(&record.value),
        }
    }

    /// Drop the value and keep the key
    pub fn into_key(self) -> String {
        match self {
            ListItem::Key(key) => key,
            ListItem::Record(record) => record.key,
        }
    }

    /// Convert into a record, bare keys get a `null` value
    pub fn into_record(self) -> Record {
        match self {
            ListItem::Key(key) => Record::empty(key),
            ListItem::Record(record) => record,
        }
    }
}

/// Whether a stored value reads back as `null`
///
/// `null`, `false`, zero and the empty string are treated as empty.
/// Arrays and objects never are, even when empty.
pub fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64().map_or(false, |f| f == 0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

/// Collapse absent and falsy values to `null`
pub fn read_value(value: Option<Value>) -> Value {
    match value {
        Some(v) if !is_falsy(&v) => v,
        _ => Value::Null,
    }
}
