//! # Cart Store
//!
//! Persisted wrapper around [`folio_core::Cart`], mirrored to the `"cart"` key.
//!
//! Entries are value snapshots taken when the book was added. Deleting the
//! book from the catalog later leaves them in place.

use tracing::{debug, warn};

use folio_core::{Book, Cart, CartEntry, Money};

use crate::adapter::ShelfStorage;
use crate::error::{StoreError, StoreResult};

/// The shopping cart and its storage.
#[derive(Debug)]
pub struct CartStore {
    storage: ShelfStorage,
    cart: Cart,
}

impl CartStore {
    /// Loads the persisted cart; a corrupt blob is logged and treated as empty.
    pub fn load(storage: ShelfStorage) -> StoreResult<Self> {
        let entries = match storage.load_cart() {
            Ok(entries) => entries,
            Err(StoreError::Corrupt { key, reason }) => {
                warn!(key = %key, reason = %reason, "Stored cart is corrupt, starting empty");
                Vec::new()
            }
            Err(e) => return Err(e),
        };

        debug!(count = entries.len(), "Cart loaded");
        Ok(CartStore {
            storage,
            cart: Cart::from_entries(entries),
        })
    }

    /// Appends a snapshot of `book` and persists. Returns the new entry's index.
    ///
    /// Adding the same book twice yields two entries.
    pub fn add(&mut self, book: &Book) -> StoreResult<usize> {
        let index = self.cart.add(book);
        if let Err(e) = self.persist() {
            self.cart.pop();
            return Err(e);
        }

        debug!(index, book_id = %book.id, "Cart entry added");
        Ok(index)
    }

    /// Removes the entry at `index` and persists.
    ///
    /// ## Errors
    /// - `IndexOutOfRange` when `index >= len`
    /// - Storage errors; the entry is put back
    pub fn remove_at(&mut self, index: usize) -> StoreResult<CartEntry> {
        let entry = self.cart.remove_at(index)?;
        if let Err(e) = self.persist() {
            self.cart.restore_at(index, entry);
            return Err(e);
        }

        debug!(index, book_id = %entry.book_id(), "Cart entry removed");
        Ok(entry)
    }

    /// Empties the cart and persists. Returns the removed entries.
    pub fn clear(&mut self) -> StoreResult<Vec<CartEntry>> {
        let removed = self.cart.clear();
        if let Err(e) = self.persist() {
            self.cart = Cart::from_entries(removed);
            return Err(e);
        }

        debug!(count = removed.len(), "Cart cleared");
        Ok(removed)
    }

    pub fn total(&self) -> Money {
        self.cart.total()
    }

    pub fn entries(&self) -> &[CartEntry] {
        self.cart.entries()
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn len(&self) -> usize {
        self.cart.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cart.is_empty()
    }

    fn persist(&self) -> StoreResult<()> {
        self.storage.save_cart(self.cart.entries())
    }
}
