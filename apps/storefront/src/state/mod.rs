//! # State Module
//!
//! Everything the storefront remembers between commands.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  SharedState = Arc<Mutex<StorefrontState>>                             │
//! │                              │                                          │
//! │     ┌──────────────┬────────┴─────┬───────────────┬──────────────┐     │
//! │     ▼              ▼              ▼               ▼              ▼      │
//! │  CatalogStore   CartStore   PreferenceStore   search_term   checkout    │
//! │  ("books")      ("cart")    ("darkMode")      category      (pending)   │
//! │                                                                         │
//! │  PERSISTED                                     SESSION ONLY             │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • One mutex; every command runs to completion while holding it        │
//! │  • Sinks are called after the lock is released                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod shared;

pub use shared::{PendingCheckout, SharedState, StorefrontState};
