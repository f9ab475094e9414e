//! # Folio Storefront
//!
//! The storefront orchestration layer. The presentation layer (book grid,
//! cart sidebar, toasts) holds a [`Storefront`], calls its commands, and
//! paints whatever view models it is handed.
//!
//! ## Module Organization
//! ```text
//! folio_storefront/
//! ├── lib.rs          ◄─── You are here (logging setup, re-exports)
//! ├── storefront.rs   ◄─── Storefront handle: open, subscribe
//! ├── state/
//! │   ├── mod.rs      ◄─── State overview
//! │   └── shared.rs   ◄─── StorefrontState behind Arc<Mutex>
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command flow
//! │   ├── catalog.rs  ◄─── Add / delete books
//! │   ├── cart.rs     ◄─── Add / remove cart entries
//! │   ├── checkout.rs ◄─── Delayed, cancellable checkout
//! │   └── browse.rs   ◄─── Search, category, theme, view
//! ├── notify.rs       ◄─── Render and notification sinks
//! ├── schedule.rs     ◄─── Delayed one-shot tasks
//! ├── config.rs       ◄─── storefront.toml + FOLIO_* overrides
//! └── error.rs        ◄─── ApiError for commands
//! ```
//!
//! ## Example
//! ```rust
//! use folio_core::BookDraft;
//! use folio_storefront::{Storefront, StorefrontConfig};
//!
//! let storefront = Storefront::open(&StorefrontConfig::in_memory()).unwrap();
//!
//! let dune = storefront
//!     .submit_new_book(BookDraft::new("Dune", "Frank Herbert", "14.99", "sci-fi"))
//!     .unwrap();
//! storefront.add_to_cart(&dune.id).unwrap();
//!
//! assert_eq!(storefront.view().cart.total, "$14.99");
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod notify;
pub mod schedule;
pub mod state;
pub mod storefront;

use tracing_subscriber::EnvFilter;

pub use commands::{CheckoutStatus, ConfirmationGate};
pub use config::{StorageBackend, StorefrontConfig};
pub use error::{ApiError, ApiResult, ConfigError, ErrorCode};
pub use notify::{NotificationSink, RenderSink, SubscriptionId};
pub use storefront::Storefront;

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=folio=trace` - Show trace for folio crates only
/// - Default: INFO, with DEBUG for folio crates
///
/// Safe to call more than once; later calls are ignored.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,folio=debug"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init();
}
