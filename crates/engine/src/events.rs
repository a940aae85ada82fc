//! Single-subscriber event bus
//!
//! Holds at most one callback. Registering a new one replaces the old one.
//! Delivery is synchronous on the dispatching task and fire-and-forget; with
//! nobody subscribed the event is dropped.
//!
//! The slot lock is released before the callback runs, so a callback may
//! itself subscribe or unsubscribe.

use parking_lot::RwLock;
use starfire_core::Event;
use std::sync::Arc;
use tracing::trace;

/// Event callback
pub type Subscriber = Arc<dyn Fn(&Event) + Send + Sync>;

/// Replaceable single-slot notification sink
#[derive(Default)]
pub struct EventBus {
    slot: RwLock<Option<Subscriber>>,
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("subscribed", &self.is_subscribed())
            .finish()
    }
}

impl EventBus {
    /// Bus with no subscriber
    pub fn new() -> Self {
        Self::default()
    }

    /// Install `callback`, returning whether a previous one was replaced
    pub fn subscribe<F>(&self, callback: F) -> bool
    where
        F: Fn(&Event) + Send + Sync + 'static,
    {
        self.slot.write().replace(Arc::new(callback)).is_some()
    }

    /// Remove the subscriber, returning whether there was one
    pub fn unsubscribe(&self) -> bool {
        self.slot.write().take().is_some()
    }

    /// Whether a subscriber is installed
    pub fn is_subscribed(&self) -> bool {
        self.slot.read().is_some()
    }

    /// Deliver `event` to the current subscriber, if any
    pub fn dispatch(&self, event: &Event) {
        let subscriber = self.slot.read().clone();
        match subscriber {
            Some(callback) => callback(event),
            None => trace!(target: "starfire::events", kind = %event.kind(), "no subscriber, event dropped"),
        }
    }
}
