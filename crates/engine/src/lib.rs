//! Engine for Starfire
//!
//! Composes the key codec and a document collection into an ordered
//! key-value facade:
//! - **StoreAdapter**: single-key put/get/del
//! - **RangeQueryBuilder**: bounded, ordered listings
//! - **Bulk orchestration**: export, import, delete-all
//! - **EventBus**: single-subscriber mutation notifications
//! - **KVFacade**: the public surface tying them together
//!
//! ## Concurrency
//!
//! Every operation is an async task suspended only at store calls. Fan-out
//! in `del`, `import_db` and `delete_db` runs all sub-operations concurrently
//! and waits for every one to settle. Nothing is retried, timed out or rolled
//! back here; those are the store client's concern.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapter;
pub mod bulk;
pub mod config;
pub mod events;
pub mod facade;
pub mod range;

pub use adapter::{KeySet, StoreAdapter, KEY_FIELD, VALUE_FIELD};
pub use config::{StarfireConfig, CONFIG_FILE_NAME};
pub use events::{EventBus, Subscriber};
pub use facade::KVFacade;
pub use range::RangeQueryBuilder;
