//! # Storefront
//!
//! The handle the presentation layer holds. Commands live in
//! [`crate::commands`]; this module wires storage, state and subscribers.
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Storefront Startup                                │
//! │                                                                         │
//! │  1. Pick Backend ─────────────────────────────────────────────────────► │
//! │     • file:   FileStorage in config.data_dir()                          │
//! │     • memory: MemoryStorage                                             │
//! │                                                                         │
//! │  2. Load Stores ──────────────────────────────────────────────────────► │
//! │     • catalog (seed on first run), cart, theme                          │
//! │     • corrupt blobs are logged and start empty                          │
//! │                                                                         │
//! │  3. Ready ────────────────────────────────────────────────────────────► │
//! │     • subscribe sinks, call view() for the first paint                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use folio_core::{Notification, StorefrontView};
use folio_store::{FileStorage, KeyValueStorage, MemoryStorage, ShelfStorage};

use crate::config::{StorageBackend, StorefrontConfig};
use crate::error::ApiResult;
use crate::notify::{NotificationSink, RenderSink, Subscribers, SubscriptionId};
use crate::state::{SharedState, StorefrontState};

/// The storefront: shared state plus its subscribers.
///
/// Cheap to clone; clones drive the same storefront.
///
/// ## Usage
/// ```rust
/// use folio_storefront::{Storefront, StorefrontConfig};
///
/// let storefront = Storefront::open(&StorefrontConfig::in_memory()).unwrap();
/// storefront.on_notification(|n: &folio_core::Notification| println!("{}", n.message()));
///
/// let view = storefront.view();
/// assert!(view.show_empty_message);
/// ```
#[derive(Debug, Clone)]
pub struct Storefront {
    pub(crate) state: SharedState,
    renders: Arc<Subscribers<dyn RenderSink>>,
    notifications: Arc<Subscribers<dyn NotificationSink>>,
    pub(crate) checkout_delay: Duration,
}

impl Storefront {
    /// Opens the storefront on the backend named in `config`.
    pub fn open(config: &StorefrontConfig) -> ApiResult<Self> {
        let backend: Arc<dyn KeyValueStorage> = match config.storage.backend {
            StorageBackend::Memory => Arc::new(MemoryStorage::new()),
            StorageBackend::File => {
                let dir = config.data_dir()?;
                info!(?dir, "Using file storage");
                Arc::new(FileStorage::open(dir)?)
            }
        };

        Self::with_storage(backend, config)
    }

    /// Opens the storefront on an existing backend.
    pub fn with_storage(
        backend: Arc<dyn KeyValueStorage>,
        config: &StorefrontConfig,
    ) -> ApiResult<Self> {
        let state = StorefrontState::load(ShelfStorage::new(backend), config.seed_on_first_run())?;

        info!(
            books = state.catalog.len(),
            backend = %config.storage.backend,
            "Storefront ready"
        );

        Ok(Storefront {
            state: SharedState::new(state),
            renders: Arc::new(Subscribers::new()),
            notifications: Arc::new(Subscribers::new()),
            checkout_delay: config.checkout_delay(),
        })
    }

    // =========================================================================
    // Subscriptions
    // =========================================================================

    /// Registers a sink that receives every re-rendered view.
    pub fn on_render(&self, sink: impl RenderSink + 'static) -> SubscriptionId {
        self.renders.subscribe(Arc::new(sink))
    }

    /// Registers a sink that receives notifications.
    pub fn on_notification(&self, sink: impl NotificationSink + 'static) -> SubscriptionId {
        self.notifications.subscribe(Arc::new(sink))
    }

    /// Removes a render or notification subscription.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.renders.unsubscribe(id) || self.notifications.unsubscribe(id)
    }

    /// Delivers a view and an optional notification. Call with no lock held.
    pub(crate) fn publish(&self, view: &StorefrontView, notification: Option<Notification>) {
        self.renders.publish(view);
        if let Some(notification) = notification {
            self.announce(&notification);
        }
    }

    /// Delivers a notification without a re-render.
    pub(crate) fn announce(&self, notification: &Notification) {
        self.notifications.publish(notification);
    }
}
