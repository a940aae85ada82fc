//! Test utilities for the KV facade suite
//!
//! Provides facade construction, seeding, an event recorder and a store
//! wrapper that writes behind the facade's back.

#![allow(dead_code)]

use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::json;
pub use starfire::*;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Once};

pub const COLLECTION: &str = "kv";

static TRACING: Once = Once::new();

/// Install a test-writer subscriber once per process
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_max_level(tracing::Level::DEBUG)
            .try_init();
    });
}

/// Fresh in-memory store and a facade over it
pub fn create_test_kv() -> (Arc<InMemoryStore>, KVFacade) {
    init_tracing();
    let store = Arc::new(InMemoryStore::new());
    let kv = KVFacade::new(store.clone(), COLLECTION).expect("Failed to create facade");
    (store, kv)
}

/// Put `value = index + 1` for every key
pub async fn seed(kv: &KVFacade, keys: &[&str]) {
    for (i, key) in keys.iter().enumerate() {
        kv.put(key, json!(i as i64 + 1)).await.expect("seed put failed");
    }
}

/// Keys of a listing
pub fn keys_of(items: &[ListItem]) -> Vec<String> {
    items.iter().map(|item| item.key().to_string()).collect()
}

/// Subscribe a recorder and return its buffer
pub fn record_events(kv: &KVFacade) -> Arc<Mutex<Vec<Event>>> {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    kv.on_event(move |e: &Event| sink.lock().push(e.clone()));
    seen
}

/// Store wrapper that writes one extra document right after the first query
/// returns, before the caller can act on the results.
pub struct WriteAfterListStore {
    inner: Arc<InMemoryStore>,
    late_id: String,
    fired: AtomicBool,
}

impl WriteAfterListStore {
    pub fn new(inner: Arc<InMemoryStore>, late_id: &str) -> Self {
        WriteAfterListStore {
            inner,
            late_id: late_id.to_string(),
            fired: AtomicBool::new(false),
        }
    }
}

#[async_trait]
impl DocumentStore for WriteAfterListStore {
    async fn write(&self, collection: &str, id: &str, document: Document) -> StoreResult<()> {
        self.inner.write(collection, id, document).await
    }

    async fn read(&self, collection: &str, id: &str) -> StoreResult<Option<Document>> {
        self.inner.read(collection, id).await
    }

    async fn delete(&self, collection: &str, id: &str) -> StoreResult<()> {
        self.inner.delete(collection, id).await
    }

    async fn fetch(&self, query: &CollectionQuery) -> StoreResult<Vec<DocumentSnapshot>> {
        let results = self.inner.fetch(query).await?;
        if !self.fired.swap(true, Ordering::SeqCst) {
            let mut doc = Document::new();
            doc.insert("key".into(), json!(self.late_id));
            doc.insert("value".into(), json!("late"));
            self.inner.write(&query.collection, &self.late_id, doc).await?;
        }
        Ok(results)
    }
}
