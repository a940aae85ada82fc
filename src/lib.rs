//! Starfire - ordered key-value facade over a document collection
//!
//! Starfire projects a flat, schemaless document collection into an ordered
//! key-value store. Hierarchical keys (`users/42/profile`) are escaped into
//! flat document ids, listings translate into ordered range queries, and every
//! mutation is announced through a single-subscriber event hook.
//!
//! # Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use starfire::{InMemoryStore, KVFacade, Query};
//! use serde_json::json;
//!
//! let kv = KVFacade::new(Arc::new(InMemoryStore::new()), "kv")?;
//! kv.on_event(|e| println!("{}", e.kind()));
//!
//! kv.put("users/1", json!({"name": "Ada"})).await?;
//! let record = kv.get("users/1").await?;
//! let keys = kv.list(&Query::new().greater_than("users/").with_limit(10)).await?;
//! let backup = kv.export_db().await?;
//! ```
//!
//! # Architecture
//!
//! - `starfire-core`: key codec, records, queries, events, errors
//! - `starfire-storage`: document store contract and in-memory backend
//! - `starfire-engine`: adapter, range builder, bulk operations, event bus,
//!   facade and configuration

pub use starfire_core::{
    is_falsy, read_value, Error, ErrorBody, Event, EventKind, ItemFailure, KeyCodec, KeyError,
    ListItem, Query, Record, Result, Timestamp, DEFAULT_DELIMITER, DEFAULT_SEPARATOR, ERROR_CODE,
};
pub use starfire_engine::{
    EventBus, KVFacade, KeySet, RangeQueryBuilder, StarfireConfig, StoreAdapter, Subscriber,
    CONFIG_FILE_NAME,
};
pub use starfire_storage::{
    Collection, CollectionQuery, Direction, Document, DocumentSnapshot, DocumentStore,
    FailureInjector, FilterOp, InMemoryStore, SharedStore, StoreError, StoreResult, StoreStats,
};
