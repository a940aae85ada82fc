//! Document store contract
//!
//! The store is an external collaborator. Its transport, authentication,
//! consistency and durability are its own business; Starfire only relies on:
//!
//! - single-document writes are atomic and last-writer-wins
//! - `read` of a missing id is `Ok(None)`, not an error
//! - `delete` of a missing id succeeds
//! - `fetch` honors filters, ordering and limit of the query

use crate::document::{Document, DocumentSnapshot};
use crate::error::StoreResult;
use crate::query::CollectionQuery;
use async_trait::async_trait;
use std::sync::Arc;

/// Per-document CRUD plus ordered queries over named collections
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Create or overwrite a document
    async fn write(&self, collection: &str, id: &str, document: Document) -> StoreResult<()>;

    /// Read a document, `None` when it does not exist
    async fn read(&self, collection: &str, id: &str) -> StoreResult<Option<Document>>;

    /// Remove a document
    async fn delete(&self, collection: &str, id: &str) -> StoreResult<()>;

    /// Run an ordered, filtered, limited query
    async fn fetch(&self, query: &CollectionQuery) -> StoreResult<Vec<DocumentSnapshot>>;
}

/// Shared store reference
pub type SharedStore = Arc<dyn DocumentStore>;
