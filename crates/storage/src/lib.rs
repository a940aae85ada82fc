//! Document store layer for Starfire
//!
//! This crate defines the boundary to the external document database:
//! - DocumentStore: async trait for per-document CRUD and ordered queries
//! - Collection: a store bound to a collection path, with the fluent
//!   `filter / order_by / limit / fetch` query chain
//! - InMemoryStore: BTreeMap-backed reference backend with failure injection

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod collection;
pub mod document;
pub mod error;
pub mod failure;
pub mod in_memory;
pub mod query;
pub mod traits;

pub use collection::{Collection, QueryBuilder};
pub use document::{Document, DocumentSnapshot};
pub use error::{StoreError, StoreResult};
pub use failure::{FailureInjector, StoreOp};
pub use in_memory::{InMemoryStore, StoreStats};
pub use query::{compare_values, CollectionQuery, Direction, Filter, FilterOp, OrderBy};
pub use traits::{DocumentStore, SharedStore};
