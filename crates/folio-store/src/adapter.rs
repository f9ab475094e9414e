//! # Storage Adapter
//!
//! Typed load/save of the storefront's blobs. No business logic.
//!
//! ## Storage Layout
//! ```text
//! ┌──────────────┬──────────────────────────────┬───────────────────────────┐
//! │ key          │ value                        │ absent / malformed        │
//! ├──────────────┼──────────────────────────────┼───────────────────────────┤
//! │ "books"      │ JSON array of Book           │ absent ⇒ [], bad ⇒ Corrupt│
//! │ "cart"       │ JSON array of CartEntry      │ absent ⇒ [], bad ⇒ Corrupt│
//! │ "darkMode"   │ "true" | "false"             │ dark                      │
//! └──────────────┴──────────────────────────────┴───────────────────────────┘
//! ```

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use folio_core::{Book, CartEntry, Theme};

use crate::error::{StoreError, StoreResult};
use crate::storage::KeyValueStorage;

/// Storage key of the catalog blob.
pub const BOOKS_KEY: &str = "books";

/// Storage key of the cart blob.
pub const CART_KEY: &str = "cart";

/// Storage key of the theme flag.
pub const DARK_MODE_KEY: &str = "darkMode";

/// Typed access to the storefront's storage keys.
///
/// Cheap to clone; all clones share one backend.
#[derive(Debug, Clone)]
pub struct ShelfStorage {
    backend: Arc<dyn KeyValueStorage>,
}

impl ShelfStorage {
    /// Wraps a storage backend.
    pub fn new(backend: Arc<dyn KeyValueStorage>) -> Self {
        ShelfStorage { backend }
    }

    /// The underlying backend.
    pub fn backend(&self) -> &Arc<dyn KeyValueStorage> {
        &self.backend
    }

    pub fn load_books(&self) -> StoreResult<Vec<Book>> {
        self.load_list(BOOKS_KEY)
    }

    pub fn save_books(&self, books: &[Book]) -> StoreResult<()> {
        self.save_list(BOOKS_KEY, books)
    }

    pub fn load_cart(&self) -> StoreResult<Vec<CartEntry>> {
        self.load_list(CART_KEY)
    }

    pub fn save_cart(&self, entries: &[CartEntry]) -> StoreResult<()> {
        self.save_list(CART_KEY, entries)
    }

    /// Reads the theme; absent or malformed values mean dark.
    pub fn load_theme(&self) -> StoreResult<Theme> {
        let flag = self.backend.get(DARK_MODE_KEY)?;
        Ok(Theme::from_dark_mode_flag(flag.as_deref()))
    }

    pub fn save_theme(&self, theme: Theme) -> StoreResult<()> {
        self.backend.set(DARK_MODE_KEY, theme.dark_mode_flag())
    }

    fn load_list<T: DeserializeOwned>(&self, key: &str) -> StoreResult<Vec<T>> {
        let Some(raw) = self.backend.get(key)? else {
            debug!(key, "No stored value, starting empty");
            return Ok(Vec::new());
        };

        // localStorage.getItem of a cleared key round-trips as "null"
        if raw.trim().is_empty() || raw.trim() == "null" {
            return Ok(Vec::new());
        }

        let items: Vec<T> =
            serde_json::from_str(&raw).map_err(|e| StoreError::corrupt(key, e))?;
        debug!(key, count = items.len(), "Loaded stored list");
        Ok(items)
    }

    fn save_list<T: Serialize>(&self, key: &str, items: &[T]) -> StoreResult<()> {
        let json = serde_json::to_string(items)?;
        self.backend.set(key, &json)?;
        debug!(key, count = items.len(), "Saved list");
        Ok(())
    }
}
