//! # Subscribers
//!
//! Fan-out of view models and notifications to the presentation layer.
//!
//! ## Delivery
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    After every command                                  │
//! │                                                                         │
//! │  lock state ──► mutate ──► persist ──► render() ──► unlock              │
//! │                                                          │              │
//! │                                  ┌───────────────────────┴──────┐       │
//! │                                  ▼                              ▼       │
//! │                          RenderSink::render(view)   NotificationSink    │
//! │                                                     ::notify(event)     │
//! │                                                                         │
//! │  Sinks run on the caller's thread with no lock held, so a sink may      │
//! │  call back into the storefront or unsubscribe itself.                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Subscribers registered after an event never see it; nothing is replayed.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use folio_core::{Notification, StorefrontView};

/// Receives user-facing notifications (toasts).
pub trait NotificationSink: Send + Sync {
    fn notify(&self, notification: &Notification);
}

impl<F> NotificationSink for F
where
    F: Fn(&Notification) + Send + Sync,
{
    fn notify(&self, notification: &Notification) {
        self(notification)
    }
}

/// Receives a fresh view model after every state change.
pub trait RenderSink: Send + Sync {
    fn render(&self, view: &StorefrontView);
}

impl<F> RenderSink for F
where
    F: Fn(&StorefrontView) + Send + Sync,
{
    fn render(&self, view: &StorefrontView) {
        self(view)
    }
}

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

static NEXT_SUBSCRIPTION: AtomicU64 = AtomicU64::new(1);

impl SubscriptionId {
    fn next() -> Self {
        SubscriptionId(NEXT_SUBSCRIPTION.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sub-{}", self.0)
    }
}

/// An ordered list of sinks of one kind.
pub struct Subscribers<S: ?Sized> {
    sinks: Mutex<Vec<(SubscriptionId, Arc<S>)>>,
}

impl<S: ?Sized> Default for Subscribers<S> {
    fn default() -> Self {
        Subscribers {
            sinks: Mutex::new(Vec::new()),
        }
    }
}

impl<S: ?Sized> fmt::Debug for Subscribers<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscribers")
            .field("count", &self.len())
            .finish()
    }
}

impl<S: ?Sized> Subscribers<S> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, sink: Arc<S>) -> SubscriptionId {
        let id = SubscriptionId::next();
        self.sinks
            .lock()
            .expect("Subscribers mutex poisoned")
            .push((id, sink));
        id
    }

    /// Returns `false` if `id` was not subscribed here.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut sinks = self.sinks.lock().expect("Subscribers mutex poisoned");
        let before = sinks.len();
        sinks.retain(|(sid, _)| *sid != id);
        sinks.len() != before
    }

    pub fn len(&self) -> usize {
        self.sinks.lock().expect("Subscribers mutex poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Calls `deliver` for each sink in subscription order.
    ///
    /// The sink list is copied first; the registry lock is not held while
    /// sinks run.
    pub fn for_each(&self, mut deliver: impl FnMut(&S)) {
        let sinks: Vec<Arc<S>> = self
            .sinks
            .lock()
            .expect("Subscribers mutex poisoned")
            .iter()
            .map(|(_, sink)| Arc::clone(sink))
            .collect();

        for sink in &sinks {
            deliver(&**sink);
        }
    }
}

impl Subscribers<dyn NotificationSink> {
    pub fn publish(&self, notification: &Notification) {
        tracing::debug!(event = notification.name(), "Publishing notification");
        self.for_each(|sink| sink.notify(notification));
    }
}

impl Subscribers<dyn RenderSink> {
    pub fn publish(&self, view: &StorefrontView) {
        self.for_each(|sink| sink.render(view));
    }
}
