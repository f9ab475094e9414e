//! # folio-core: Pure Storefront Logic for Folio
//!
//! This crate is the **heart** of the Folio storefront. It contains the data
//! model, the filter engine and the render pipeline as pure functions with
//! zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Folio Architecture                               │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Presentation (browser widget)                   │   │
//! │  │    Book grid ──► Search / chips ──► Cart sidebar ──► Toasts     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ commands / view models / events        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    folio-storefront (app)                       │   │
//! │  │    submit_new_book, add_to_cart, checkout, set_category, ...    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ folio-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │  filter   │  │   view    │  │   │
//! │  │   │   Book    │  │   Money   │  │  visible  │  │  render   │  │   │
//! │  │   │ CartEntry │  │  parsing  │  │           │  │ BookCard  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STORAGE • NO TIMERS • PURE FUNCTIONS             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 folio-store (Persistence Layer)                 │   │
//! │  │           key-value storage, catalog / cart stores              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Book, CartEntry, CategoryFilter, Theme)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`cart`] - The pure cart value and its total
//! - [`filter`] - Search + category filtering
//! - [`view`] - Render pipeline producing view models
//! - [`events`] - Notification event types
//! - [`error`] - Domain error types
//! - [`validation`] - Book form validation
//!
//! ## Example Usage
//!
//! ```rust
//! use folio_core::{Book, BookDraft, Cart};
//!
//! let dune = Book::create(&BookDraft::new("Dune", "Frank Herbert", "14.99", "sci-fi")).unwrap();
//!
//! let mut cart = Cart::new();
//! cart.add(&dune);
//! cart.add(&dune);
//!
//! assert_eq!(cart.total().to_string(), "$29.98");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod events;
pub mod filter;
pub mod money;
pub mod types;
pub mod validation;
pub mod view;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::Cart;
pub use error::{CoreError, CoreResult, ValidationError};
pub use events::{Notification, ToastKind};
pub use money::Money;
pub use types::*;
pub use view::{render, BookCard, CartLine, CartView, RenderInput, StorefrontView};
