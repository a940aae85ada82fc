//! Collection handle
//!
//! Binds a store to one collection path and exposes the fluent query chain:
//!
//! ```ignore
//! let docs = collection
//!     .query()
//!     .filter("key", FilterOp::Gt, json!("a"))
//!     .order_by("key", Direction::Ascending)
//!     .limit(10)
//!     .fetch()
//!     .await?;
//! ```

use crate::document::{Document, DocumentSnapshot};
use crate::error::StoreResult;
use crate::query::{CollectionQuery, Direction, FilterOp};
use crate::traits::SharedStore;
use serde_json::Value;
use tracing::debug;

/// A store bound to a collection path
#[derive(Clone)]
pub struct Collection {
    store: SharedStore,
    path: String,
}

impl std::fmt::Debug for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Collection").field("path", &self.path).finish()
    }
}

impl Collection {
    /// Bind `store` to `path`
    pub fn new(store: SharedStore, path: impl Into<String>) -> Self {
        Collection {
            store,
            path: path.into(),
        }
    }

    /// Collection path
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Create or overwrite document `id`
    pub async fn write(&self, id: &str, document: Document) -> StoreResult<()> {
        debug!(target: "starfire::store", collection = %self.path, id, "write");
        self.store.write(&self.path, id, document).await
    }

    /// Read document `id`
    pub async fn read(&self, id: &str) -> StoreResult<Option<Document>> {
        debug!(target: "starfire::store", collection = %self.path, id, "read");
        self.store.read(&self.path, id).await
    }

    /// Delete document `id`
    pub async fn delete(&self, id: &str) -> StoreResult<()> {
        debug!(target: "starfire::store", collection = %self.path, id, "delete");
        self.store.delete(&self.path, id).await
    }

    /// Start a query over this collection
    pub fn query(&self) -> QueryBuilder<'_> {
        QueryBuilder {
            collection: self,
            query: CollectionQuery::new(self.path.clone()),
        }
    }
}

/// Fluent query under construction
#[derive(Debug)]
pub struct QueryBuilder<'a> {
    collection: &'a Collection,
    query: CollectionQuery,
}

impl<'a> QueryBuilder<'a> {
    /// `where(field, op, value)`
    pub fn filter(mut self, field: &str, op: FilterOp, value: Value) -> Self {
        self.query = self.query.filter(field, op, value);
        self
    }

    /// `orderBy(field, direction)`
    pub fn order_by(mut self, field: &str, direction: Direction) -> Self {
        self.query = self.query.order_by(field, direction);
        self
    }

    /// `limit(n)`
    pub fn limit(mut self, n: usize) -> Self {
        self.query = self.query.limit(n);
        self
    }

    /// The query as built so far
    pub fn as_query(&self) -> &CollectionQuery {
        &self.query
    }

    /// Execute
    pub async fn fetch(self) -> StoreResult<Vec<DocumentSnapshot>> {
        debug!(
            target: "starfire::query",
            collection = %self.query.collection,
            filters = self.query.filters.len(),
            limit = ?self.query.limit,
            "fetch"
        );
        self.collection.store.fetch(&self.query).await
    }
}
