//! Bulk orchestration: export, import, delete-all
//!
//! All three are compositions of single-key calls with no transaction around
//! them.
//!
//! - `export_db` is `list({values: true})`.
//! - `import_db` puts every item concurrently and waits for all of them.
//!   Store failures are logged and listed in the event's `failed` field, the
//!   `keys` field lists every input key. An item with an invalid key makes the
//!   whole call return `Error::Validation` after the other puts settle; those
//!   writes stay in place and no `importDB` event is emitted.
//! - `delete_db` lists every key, then deletes that set. Records written
//!   between the two phases survive. A failing list phase deletes nothing.

use crate::facade::KVFacade;
use futures::future::join_all;
use starfire_core::{Error, Event, ItemFailure, ListItem, Query, Record, Result};
use tracing::{info, warn};

impl KVFacade {
    /// Every record in ascending key order
    pub async fn export_db(&self) -> Result<Vec<Record>> {
        let items = self.list(&Query::new().with_values()).await?;
        Ok(items.into_iter().map(ListItem::into_record).collect())
    }

    /// Write every record concurrently
    pub async fn import_db<I>(&self, items: I) -> Result<Event>
    where
        I: IntoIterator<Item = Record>,
    {
        let items: Vec<Record> = items.into_iter().collect();
        let outcomes = join_all(
            items
                .iter()
                .map(|record| self.put(&record.key, record.value.clone())),
        )
        .await;

        let mut rejected: Option<Error> = None;
        let mut failed = Vec::new();
        for (record, outcome) in items.iter().zip(outcomes) {
            let Err(e) = outcome else { continue };
            warn!(target: "starfire::bulk", key = %record.key, error = %e, "import item failed");
            failed.push(ItemFailure {
                key: record.key.clone(),
                message: e.to_string(),
            });
            if e.is_validation() && rejected.is_none() {
                rejected = Some(e);
            }
        }

        if let Some(e) = rejected {
            return Err(e);
        }

        info!(
            target: "starfire::bulk",
            collection = %self.collection(),
            items = items.len(),
            failed = failed.len(),
            "import settled"
        );
        let keys = items.into_iter().map(|record| record.key).collect();
        Ok(self.emit(Event::import_db(keys, failed)))
    }

    /// Delete every record that exists when the listing runs
    pub async fn delete_db(&self) -> Result<Event> {
        let keys: Vec<String> = self
            .list(&Query::new())
            .await?
            .into_iter()
            .map(ListItem::into_key)
            .collect();
        let count = keys.len();

        let deleted = self.del(keys).await;
        info!(
            target: "starfire::bulk",
            collection = %self.collection(),
            keys = count,
            failed = deleted.failures().len(),
            "delete-all settled"
        );
        Ok(self.emit(Event::delete_db()))
    }
}
