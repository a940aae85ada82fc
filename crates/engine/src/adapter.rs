//! StoreAdapter: single-key CRUD over one collection
//!
//! ## Document layout
//!
//! A record `{key: "a/b", value: 42}` is stored as document id `a:b` with body
//! `{"key": "a:b", "value": 42}`. The escaped key is kept in the body so range
//! queries can filter and order on a field; the id and the field always match.
//!
//! ## Failure behavior
//!
//! - `put` validates the key before touching the store
//! - `get` and `put` turn store failures into `Error::Store`
//! - `del` never fails: every key is attempted, failures are logged and
//!   collected into the event's `failed` list, `keys` lists every input key

use futures::future::join_all;
use serde_json::Value;
use starfire_core::{read_value, Error, Event, ItemFailure, KeyCodec, Record, Result};
use starfire_storage::{Collection, Document, StoreError};
use tracing::warn;

/// Document field holding the escaped key
pub const KEY_FIELD: &str = "key";

/// Document field holding the value
pub const VALUE_FIELD: &str = "value";

fn to_document(id: &str, value: Value) -> Document {
    let mut document = Document::new();
    document.insert(KEY_FIELD.to_string(), Value::String(id.to_string()));
    document.insert(VALUE_FIELD.to_string(), value);
    document
}

pub(crate) fn store_error(e: StoreError) -> Error {
    Error::Store(e.to_string())
}

/// One key or many, as accepted by `del`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeySet(Vec<String>);

impl KeySet {
    /// Keys in input order
    pub fn into_vec(self) -> Vec<String> {
        self.0
    }

    /// Number of keys
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no keys
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for KeySet {
    fn from(key: &str) -> Self {
        KeySet(vec![key.to_string()])
    }
}

impl From<String> for KeySet {
    fn from(key: String) -> Self {
        KeySet(vec![key])
    }
}

impl From<Vec<String>> for KeySet {
    fn from(keys: Vec<String>) -> Self {
        KeySet(keys)
    }
}

impl From<Vec<&str>> for KeySet {
    fn from(keys: Vec<&str>) -> Self {
        KeySet(keys.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for KeySet {
    fn from(keys: &[&str]) -> Self {
        KeySet(keys.iter().map(|k| k.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for KeySet {
    fn from(keys: [&str; N]) -> Self {
        KeySet(keys.iter().map(|k| k.to_string()).collect())
    }
}

/// Single-key operations against a collection
#[derive(Debug, Clone)]
pub struct StoreAdapter {
    collection: Collection,
    codec: KeyCodec,
}

impl StoreAdapter {
    /// Adapter over `collection` using `codec`
    pub fn new(collection: Collection, codec: KeyCodec) -> Self {
        StoreAdapter { collection, codec }
    }

    /// Bound collection
    pub fn collection(&self) -> &Collection {
        &self.collection
    }

    /// Key codec
    pub fn codec(&self) -> &KeyCodec {
        &self.codec
    }

    /// Create or overwrite `key`
    ///
    /// Returns the `write` event on success. Keys containing the reserved
    /// delimiter fail with `Error::Validation` and no store call is made.
    pub async fn put(&self, key: &str, value: Value) -> Result<Event> {
        self.codec.validate(key)?;

        let id = self.codec.encode(key);
        let document = to_document(&id, value);

        self.collection
            .write(&id, document)
            .await
            .map_err(store_error)?;
        Ok(Event::write(key))
    }

    /// Read `key`
    ///
    /// A missing document and a document with an empty value both come back
    /// as `{key, value: null}`.
    pub async fn get(&self, key: &str) -> Result<Record> {
        let id = self.codec.encode(key);
        let document = self.collection.read(&id).await.map_err(store_error)?;
        let value = read_value(document.and_then(|mut doc| doc.remove(VALUE_FIELD)));
        Ok(Record::new(key, value))
    }

    /// Delete every key concurrently and wait for all of them to settle
    pub async fn del(&self, keys: impl Into<KeySet>) -> Event {
        let keys = keys.into().into_vec();

        let outcomes = join_all(keys.iter().map(|key| {
            let id = self.codec.encode(key);
            async move { self.collection.delete(&id).await }
        }))
        .await;

        let failed: Vec<ItemFailure> = keys
            .iter()
            .zip(outcomes)
            .filter_map(|(key, outcome)| {
                outcome.err().map(|e| {
                    warn!(target: "starfire::kv", key = %key, error = %e, "delete failed");
                    ItemFailure {
                        key: key.clone(),
                        message: e.to_string(),
                    }
                })
            })
            .collect();

        Event::delete(keys, failed)
    }
}
