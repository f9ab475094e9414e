//! # Cart
//!
//! The pure shopping-cart value. Persistence lives in `folio-store`.
//!
//! ## Cart Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Action                  Method               Effect                    │
//! │  ──────                  ──────               ──────                    │
//! │  "Add to Cart" ────────► add(&book) ────────► entries.push(snapshot)    │
//! │  "Remove" (row i) ─────► remove_at(i) ──────► entries.remove(i)         │
//! │  Checkout completes ───► clear() ───────────► entries.clear()           │
//! │  Sidebar total ────────► total() ───────────► Σ entry prices            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - No quantity aggregation: adding the same book twice yields two entries
//! - Entries keep their relative order across removals
//! - Empty cart ⇒ total is zero

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{Book, CartEntry};

/// An ordered list of book snapshots.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    entries: Vec<CartEntry>,
}

impl Cart {
    /// Creates an empty cart.
    pub fn new() -> Self {
        Cart::default()
    }

    /// Rebuilds a cart from loaded entries.
    pub fn from_entries(entries: Vec<CartEntry>) -> Self {
        Cart { entries }
    }

    /// Appends a snapshot of the book and returns its index.
    pub fn add(&mut self, book: &Book) -> usize {
        self.entries.push(CartEntry::snapshot(book));
        self.entries.len() - 1
    }

    /// Removes the entry at `index`.
    ///
    /// ## Errors
    /// `CartIndexOutOfRange` when `index >= len`.
    pub fn remove_at(&mut self, index: usize) -> CoreResult<CartEntry> {
        if index >= self.entries.len() {
            return Err(CoreError::CartIndexOutOfRange {
                index,
                len: self.entries.len(),
            });
        }
        Ok(self.entries.remove(index))
    }

    /// Puts a removed entry back at its old position.
    pub fn restore_at(&mut self, index: usize, entry: CartEntry) {
        let index = index.min(self.entries.len());
        self.entries.insert(index, entry);
    }

    /// Drops the most recently added entry.
    pub fn pop(&mut self) -> Option<CartEntry> {
        self.entries.pop()
    }

    /// Empties the cart and returns what was in it.
    pub fn clear(&mut self) -> Vec<CartEntry> {
        std::mem::take(&mut self.entries)
    }

    /// Exact sum of entry prices.
    pub fn total(&self) -> Money {
        self.entries.iter().map(CartEntry::price).sum()
    }

    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
