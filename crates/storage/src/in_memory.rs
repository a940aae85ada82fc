//! In-memory document store
//!
//! Reference implementation of [`DocumentStore`]. Each collection is a
//! `BTreeMap` from document id to document, guarded by one `RwLock`.
//! No lock is held across an await point.
//!
//! Query semantics follow the rules in [`crate::query`]; ties in the ordered
//! field are broken by document id in the same direction.

use crate::document::{Document, DocumentSnapshot};
use crate::error::StoreResult;
use crate::failure::{FailureInjector, StoreOp};
use crate::query::{compare_values, CollectionQuery, Direction};
use crate::traits::DocumentStore;
use async_trait::async_trait;
use parking_lot::RwLock;
use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};

/// Counts of calls that reached the store (including injected failures)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoreStats {
    /// `write` calls
    pub writes: u64,
    /// `read` calls
    pub reads: u64,
    /// `delete` calls
    pub deletes: u64,
    /// `fetch` calls
    pub queries: u64,
}

#[derive(Debug, Default)]
struct Counters {
    writes: AtomicU64,
    reads: AtomicU64,
    deletes: AtomicU64,
    queries: AtomicU64,
}

/// In-memory implementation of the document store contract
#[derive(Debug, Default)]
pub struct InMemoryStore {
    collections: RwLock<HashMap<String, BTreeMap<String, Document>>>,
    failures: FailureInjector,
    counters: Counters,
}

impl InMemoryStore {
    /// Empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Failure injection controls
    pub fn failures(&self) -> &FailureInjector {
        &self.failures
    }

    /// Call counts so far
    pub fn stats(&self) -> StoreStats {
        StoreStats {
            writes: self.counters.writes.load(AtomicOrdering::SeqCst),
            reads: self.counters.reads.load(AtomicOrdering::SeqCst),
            deletes: self.counters.deletes.load(AtomicOrdering::SeqCst),
            queries: self.counters.queries.load(AtomicOrdering::SeqCst),
        }
    }

    /// Number of documents in `collection`
    pub fn len(&self, collection: &str) -> usize {
        self.collections
            .read()
            .get(collection)
            .map_or(0, BTreeMap::len)
    }

    /// Whether `collection` holds no documents
    pub fn is_empty(&self, collection: &str) -> bool {
        self.len(collection) == 0
    }

    /// Document ids in `collection`, sorted
    pub fn ids(&self, collection: &str) -> Vec<String> {
        self.collections
            .read()
            .get(collection)
            .map(|docs| docs.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// Direct read that bypasses counters and failure injection
    pub fn peek(&self, collection: &str, id: &str) -> Option<Document> {
        self.collections
            .read()
            .get(collection)
            .and_then(|docs| docs.get(id).cloned())
    }

    fn run_query(&self, query: &CollectionQuery) -> Vec<DocumentSnapshot> {
        let collections = self.collections.read();
        let Some(docs) = collections.get(&query.collection) else {
            return Vec::new();
        };

        let mut matched: Vec<DocumentSnapshot> = docs
            .iter()
            .filter(|(_, doc)| query.filters.iter().all(|f| f.matches(doc.get(&f.field))))
            .filter(|(_, doc)| {
                query
                    .order_by
                    .as_ref()
                    .map_or(true, |order| doc.contains_key(&order.field))
            })
            .map(|(id, doc)| DocumentSnapshot::new(id.clone(), doc.clone()))
            .collect();
        drop(collections);

        if let Some(order) = &query.order_by {
            matched.sort_by(|a, b| {
                let by_field = match (a.get(&order.field), b.get(&order.field)) {
                    (Some(x), Some(y)) => compare_values(x, y).unwrap_or(Ordering::Equal),
                    _ => Ordering::Equal,
                };
                let ord = by_field.then_with(|| a.id.cmp(&b.id));
                match order.direction {
                    Direction::Ascending => ord,
                    Direction::Descending => ord.reverse(),
                }
            });
        }

        if let Some(limit) = query.limit {
            matched.truncate(limit);
        }
        matched
    }
}

#[async_trait]
impl DocumentStore for InMemoryStore {
    async fn write(&self, collection: &str, id: &str, document: Document) -> StoreResult<()> {
        self.counters.writes.fetch_add(1, AtomicOrdering::SeqCst);
        self.failures.check(StoreOp::Write, Some(id))?;
        self.collections
            .write()
            .entry(collection.to_string())
            .or_default()
            .insert(id.to_string(), document);
        Ok(())
    }

    async fn read(&self, collection: &str, id: &str) -> StoreResult<Option<Document>> {
        self.counters.reads.fetch_add(1, AtomicOrdering::SeqCst);
        self.failures.check(StoreOp::Read, Some(id))?;
        Ok(self.peek(collection, id))
    }

    async fn delete(&self, collection: &str, id: &str) -> StoreResult<()> {
        self.counters.deletes.fetch_add(1, AtomicOrdering::SeqCst);
        self.failures.check(StoreOp::Delete, Some(id))?;
        if let Some(docs) = self.collections.write().get_mut(collection) {
            docs.remove(id);
        }
        Ok(())
    }

    async fn fetch(&self, query: &CollectionQuery) -> StoreResult<Vec<DocumentSnapshot>> {
        self.counters.queries.fetch_add(1, AtomicOrdering::SeqCst);
        self.failures.check(StoreOp::Query, None)?;
        Ok(self.run_query(query))
    }
}
