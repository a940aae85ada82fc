//! KVFacade: the public ordered key-value surface
//!
//! | Call | Returns | Event |
//! |------|---------|-------|
//! | `put(key, value)` | `Result<Event>` | `write` on success |
//! | `get(key)` | `Result<Record>` | - |
//! | `del(keys)` | `Event` | `delete`, always |
//! | `list(query)` | `Result<Vec<ListItem>>` | - |
//! | `export_db()` | `Result<Vec<Record>>` | - |
//! | `import_db(items)` | `Result<Event>` | `write` per item, then `importDB` |
//! | `delete_db()` | `Result<Event>` | `delete`, then `deleteDB` |
//!
//! The facade keeps no copy of the data. Concurrent `put` calls to the same
//! key race at the store with last-writer-wins.

use crate::adapter::{KeySet, StoreAdapter};
use crate::config::{validate_collection, StarfireConfig};
use crate::events::EventBus;
use crate::range::RangeQueryBuilder;
use serde_json::Value;
use starfire_core::{Event, KeyCodec, ListItem, Query, Record, Result};
use starfire_storage::{Collection, SharedStore};
use tracing::info;

/// Ordered key-value facade over one document collection
///
/// # Example
///
/// ```ignore
/// let store = Arc::new(InMemoryStore::new());
/// let kv = KVFacade::new(store, "kv")?;
///
/// kv.on_event(|e| println!("{:?}", e));
/// kv.put("users/1", json!({"name": "Ada"})).await?;
/// let record = kv.get("users/1").await?;
/// let keys = kv.list(&Query::new().greater_than("users/")).await?;
/// ```
#[derive(Debug)]
pub struct KVFacade {
    adapter: StoreAdapter,
    events: EventBus,
}

impl KVFacade {
    /// Facade over `collection` with the default key codec
    ///
    /// Fails with `Error::Config` when the collection path is blank.
    pub fn new(store: SharedStore, collection: impl Into<String>) -> Result<Self> {
        Self::with_codec(store, collection, KeyCodec::default())
    }

    /// Facade with a custom key codec
    pub fn with_codec(
        store: SharedStore,
        collection: impl Into<String>,
        codec: KeyCodec,
    ) -> Result<Self> {
        let collection = collection.into();
        validate_collection(&collection)?;
        info!(
            target: "starfire::kv",
            collection = %collection,
            separator = %codec.separator(),
            delimiter = %codec.delimiter(),
            "facade opened"
        );
        Ok(KVFacade {
            adapter: StoreAdapter::new(Collection::new(store, collection), codec),
            events: EventBus::new(),
        })
    }

    /// Facade from a validated config
    pub fn from_config(store: SharedStore, config: &StarfireConfig) -> Result<Self> {
        let codec = config.validate()?;
        Self::with_codec(store, config.collection.clone(), codec)
    }

    /// Collection path
    pub fn collection(&self) -> &str {
        self.adapter.collection().path()
    }

    /// Key codec
    pub fn codec(&self) -> &KeyCodec {
        self.adapter.codec()
    }

    /// Event bus, for unsubscribing or inspection
    pub fn events(&self) -> &EventBus {
        &self.events
    }

    /// Register the sole event subscriber, replacing any previous one
    pub fn on_event<F>(&self, callback: F) -> bool
    where
        F: Fn(&Event) + Send + Sync + 'static,
    {
        self.events.subscribe(callback)
    }

    pub(crate) fn emit(&self, event: Event) -> Event {
        self.events.dispatch(&event);
        event
    }

    /// Create or overwrite `key`
    pub async fn put(&self, key: &str, value: Value) -> Result<Event> {
        let event = self.adapter.put(key, value).await?;
        Ok(self.emit(event))
    }

    /// Read `key`, `{key, value: null}` when missing
    pub async fn get(&self, key: &str) -> Result<Record> {
        self.adapter.get(key).await
    }

    /// Delete one key or many
    ///
    /// The event lists every input key. Per-key failures appear only in its
    /// `failed` list and in the log.
    pub async fn del(&self, keys: impl Into<KeySet>) -> Event {
        let event = self.adapter.del(keys).await;
        self.emit(event)
    }

    /// Ordered, bounded listing
    pub async fn list(&self, query: &Query) -> Result<Vec<ListItem>> {
        RangeQueryBuilder::new(self.adapter.collection(), self.adapter.codec())
            .list(query)
            .await
    }
}
