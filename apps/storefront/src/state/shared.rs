use std::sync::{Arc, Mutex};

use tracing::debug;

use folio_core::{render, CategoryFilter, RenderInput, StorefrontView};
use folio_store::{CartStore, CatalogStore, PreferenceStore, ShelfStorage, StoreResult};

use crate::schedule::ScheduledTask;

/// A checkout waiting for its delay to elapse.
#[derive(Debug)]
pub struct PendingCheckout {
    /// Identifies this checkout so a stale completion can be ignored.
    pub seq: u64,
    pub task: ScheduledTask,
}

/// The storefront's complete state.
#[derive(Debug)]
pub struct StorefrontState {
    pub catalog: CatalogStore,
    pub cart: CartStore,
    pub preferences: PreferenceStore,
    pub search_term: String,
    pub category: CategoryFilter,
    pub checkout: Option<PendingCheckout>,
    checkout_seq: u64,
}

impl StorefrontState {
    /// Loads the persisted stores; search and category start cleared.
    pub fn load(storage: ShelfStorage, seed_catalog: bool) -> StoreResult<Self> {
        let catalog = CatalogStore::initialize(storage.clone(), seed_catalog)?;
        let cart = CartStore::load(storage.clone())?;
        let preferences = PreferenceStore::load(storage)?;

        debug!(
            books = catalog.len(),
            cart_entries = cart.len(),
            theme = ?preferences.theme(),
            "Storefront state loaded"
        );

        Ok(StorefrontState {
            catalog,
            cart,
            preferences,
            search_term: String::new(),
            category: CategoryFilter::All,
            checkout: None,
            checkout_seq: 0,
        })
    }

    /// Renders the current state.
    pub fn view(&self) -> StorefrontView {
        render(RenderInput {
            catalog: self.catalog.list(),
            cart: self.cart.cart(),
            search_term: &self.search_term,
            category: &self.category,
            theme: self.preferences.theme(),
            checkout_pending: self.is_checkout_pending(),
        })
    }

    pub fn is_checkout_pending(&self) -> bool {
        self.checkout.is_some()
    }

    pub fn next_checkout_seq(&mut self) -> u64 {
        self.checkout_seq += 1;
        self.checkout_seq
    }
}

/// Shared, lock-protected storefront state.
///
/// ## Thread Safety
/// Uses `Arc<Mutex<StorefrontState>>`: commands from the UI thread and the
/// checkout timer task touch the same state, one at a time.
#[derive(Debug, Clone)]
pub struct SharedState {
    inner: Arc<Mutex<StorefrontState>>,
}

impl SharedState {
    pub fn new(state: StorefrontState) -> Self {
        SharedState {
            inner: Arc::new(Mutex::new(state)),
        }
    }

    /// Executes a function with read access to the state.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let view = state.with_state(|s| s.view());
    /// ```
    pub fn with_state<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&StorefrontState) -> R,
    {
        let state = self.inner.lock().expect("Storefront mutex poisoned");
        f(&state)
    }

    /// Executes a function with write access to the state.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let book = state.with_state_mut(|s| s.catalog.add(&draft))?;
    /// ```
    pub fn with_state_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut StorefrontState) -> R,
    {
        let mut state = self.inner.lock().expect("Storefront mutex poisoned");
        f(&mut state)
    }
}
