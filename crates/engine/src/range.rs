//! RangeQueryBuilder: translates a [`Query`] into an ordered collection query
//!
//! | Query | Collection query |
//! |-------|------------------|
//! | `gt: k` | `where("key", ">", encode(k))` |
//! | `lt: k` | `where("key", "<", encode(k))` |
//! | `gt: ""` / `lt: ""` | no filter |
//! | `reverse` | `orderBy("key", "desc")`, else `"asc"` |
//! | `limit: n > 0` | `limit(n)` |
//! | `limit: 0` | no limit |
//!
//! Bounds are strict: neither bound's own record is returned. Results come
//! back in store order, keys decoded from document ids.

use crate::adapter::{store_error, KEY_FIELD, VALUE_FIELD};
use serde_json::Value;
use starfire_core::{read_value, KeyCodec, ListItem, Query, Record, Result};
use starfire_storage::{Collection, Direction, DocumentSnapshot, FilterOp, QueryBuilder};
use tracing::debug;

/// Builds and runs range listings over a collection
#[derive(Debug, Clone, Copy)]
pub struct RangeQueryBuilder<'a> {
    collection: &'a Collection,
    codec: &'a KeyCodec,
}

impl<'a> RangeQueryBuilder<'a> {
    /// Builder over `collection` using `codec` for bounds and results
    pub fn new(collection: &'a Collection, codec: &'a KeyCodec) -> Self {
        RangeQueryBuilder { collection, codec }
    }

    /// Translate `query` into the store's query chain
    pub fn build(&self, query: &Query) -> QueryBuilder<'a> {
        let mut builder = self.collection.query();

        if let Some(gt) = query.lower_bound() {
            builder = builder.filter(KEY_FIELD, FilterOp::Gt, Value::String(self.codec.encode(gt)));
        }
        if let Some(lt) = query.upper_bound() {
            builder = builder.filter(KEY_FIELD, FilterOp::Lt, Value::String(self.codec.encode(lt)));
        }

        let direction = if query.reverse {
            Direction::Descending
        } else {
            Direction::Ascending
        };
        builder = builder.order_by(KEY_FIELD, direction);

        if query.limit > 0 {
            builder = builder.limit(query.limit);
        }
        builder
    }

    /// Run `query` and shape the results
    pub async fn list(&self, query: &Query) -> Result<Vec<ListItem>> {
        let docs = self.build(query).fetch().await.map_err(store_error)?;
        debug!(
            target: "starfire::query",
            collection = %self.collection.path(),
            results = docs.len(),
            "range listed"
        );
        Ok(docs
            .into_iter()
            .map(|doc| self.to_item(doc, query.values))
            .collect())
    }

    fn to_item(&self, mut doc: DocumentSnapshot, values: bool) -> ListItem {
        let key = self.codec.decode(&doc.id);
        if values {
            let value = read_value(doc.data.remove(VALUE_FIELD));
            ListItem::Record(Record::new(key, value))
        } else {
            ListItem::Key(key)
        }
    }
}
