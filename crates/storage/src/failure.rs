//! Failure injection for the in-memory store
//!
//! Lets tests make the next N calls of a given kind fail with
//! `StoreError::Unavailable`, or make every call touching a specific document
//! id fail with `StoreError::Rejected` until cleared.

use crate::error::{StoreError, StoreResult};
use parking_lot::Mutex;
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Store operation kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreOp {
    /// `write`
    Write,
    /// `read`
    Read,
    /// `delete`
    Delete,
    /// `fetch`
    Query,
}

impl StoreOp {
    fn as_str(&self) -> &'static str {
        match self {
            StoreOp::Write => "write",
            StoreOp::Read => "read",
            StoreOp::Delete => "delete",
            StoreOp::Query => "query",
        }
    }
}

/// Controls injected failures
#[derive(Debug, Default)]
pub struct FailureInjector {
    writes: AtomicUsize,
    reads: AtomicUsize,
    deletes: AtomicUsize,
    queries: AtomicUsize,
    ids: Mutex<HashSet<String>>,
}

impl FailureInjector {
    /// No failures scheduled
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail the next `n` writes
    pub fn fail_writes(&self, n: usize) {
        self.writes.store(n, Ordering::SeqCst);
    }

    /// Fail the next `n` reads
    pub fn fail_reads(&self, n: usize) {
        self.reads.store(n, Ordering::SeqCst);
    }

    /// Fail the next `n` deletes
    pub fn fail_deletes(&self, n: usize) {
        self.deletes.store(n, Ordering::SeqCst);
    }

    /// Fail the next `n` queries
    pub fn fail_queries(&self, n: usize) {
        self.queries.store(n, Ordering::SeqCst);
    }

    /// Fail every write, read or delete of document `id`
    pub fn fail_id(&self, id: impl Into<String>) {
        self.ids.lock().insert(id.into());
    }

    /// Cancel everything scheduled
    pub fn clear(&self) {
        self.writes.store(0, Ordering::SeqCst);
        self.reads.store(0, Ordering::SeqCst);
        self.deletes.store(0, Ordering::SeqCst);
        self.queries.store(0, Ordering::SeqCst);
        self.ids.lock().clear();
    }

    /// Consume one scheduled failure for `op`, if any
    pub(crate) fn check(&self, op: StoreOp, id: Option<&str>) -> StoreResult<()> {
        if let Some(id) = id {
            if self.ids.lock().contains(id) {
                return Err(StoreError::Rejected(format!(
                    "injected {} failure for {}",
                    op.as_str(),
                    id
                )));
            }
        }

        let counter = match op {
            StoreOp::Write => &self.writes,
            StoreOp::Read => &self.reads,
            StoreOp::Delete => &self.deletes,
            StoreOp::Query => &self.queries,
        };
        let consumed = counter
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        if consumed {
            return Err(StoreError::Unavailable(format!(
                "injected {} failure",
                op.as_str()
            )));
        }
        Ok(())
    }
}
