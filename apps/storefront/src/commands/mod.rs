//! # Storefront Commands
//!
//! Every entry point the presentation layer calls.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs       ◄─── You are here
//! ├── catalog.rs   ◄─── submit_new_book, delete_book, delete_book_with
//! ├── cart.rs      ◄─── add_to_cart, remove_from_cart
//! ├── checkout.rs  ◄─── checkout, cancel_checkout
//! └── browse.rs    ◄─── set_search_term, set_category, toggle_theme, view
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  storefront.add_to_cart(&book_id)                                      │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  with_state_mut(|s| {                                                   │
//! │      mutate store  ──► persist (rolled back on failure)                 │
//! │      s.view()      ──► fresh StorefrontView                             │
//! │  })                                                                     │
//! │         │  (lock released)                                              │
//! │         ▼                                                               │
//! │  publish(view, notification) ──► render sinks, notification sinks       │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Result<T, ApiError>                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Failed commands publish nothing.

pub mod browse;
pub mod cart;
pub mod catalog;
pub mod checkout;

pub use catalog::ConfirmationGate;
pub use checkout::CheckoutStatus;
