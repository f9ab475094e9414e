//! # folio-store: Persistence Layer for Folio
//!
//! This crate keeps the catalog, the cart and the theme preference in memory
//! and mirrors every change to a string key-value storage.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Folio Data Flow                                  │
//! │                                                                         │
//! │  Storefront command (add_to_cart)                                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    folio-store (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │    Stores     │    │ ShelfStorage  │    │   Backends   │  │   │
//! │  │   │               │    │ (adapter.rs)  │    │ (storage/)   │  │   │
//! │  │   │ CatalogStore  │───►│ "books"       │───►│ MemoryStorage│  │   │
//! │  │   │ CartStore     │    │ "cart"        │    │ FileStorage  │  │   │
//! │  │   │ PreferenceSt. │    │ "darkMode"    │    │              │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     Data directory                              │   │
//! │  │   books.json • cart.json • darkMode.json                        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`storage`] - The `KeyValueStorage` trait and its backends
//! - [`adapter`] - Typed load/save over the storage keys
//! - [`catalog`] - Catalog store with first-run seeding
//! - [`cart`] - Cart store
//! - [`preferences`] - Theme preference store
//! - [`seed`] - Default books
//! - [`error`] - Store error types
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use folio_store::{CartStore, CatalogStore, MemoryStorage, ShelfStorage};
//!
//! let shelf = ShelfStorage::new(Arc::new(MemoryStorage::new()));
//! let catalog = CatalogStore::initialize(shelf.clone(), true).unwrap();
//! let mut cart = CartStore::load(shelf).unwrap();
//!
//! cart.add(&catalog.list()[0]).unwrap();
//! assert_eq!(cart.total().to_string(), "$12.99");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod adapter;
pub mod cart;
pub mod catalog;
pub mod error;
pub mod preferences;
pub mod seed;
pub mod storage;

#[cfg(test)]
mod testing;

// =============================================================================
// Re-exports
// =============================================================================

pub use adapter::ShelfStorage;
pub use cart::CartStore;
pub use catalog::CatalogStore;
pub use error::{StoreError, StoreResult};
pub use preferences::PreferenceStore;
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage};
