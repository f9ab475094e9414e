//! # Key-Value Storage
//!
//! The persistence seam. Mirrors the browser's `localStorage`: string keys,
//! string values, synchronous calls, last write wins.
//!
//! ## Backends
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      KeyValueStorage                                    │
//! │                            │                                            │
//! │           ┌────────────────┴────────────────┐                           │
//! │           ▼                                 ▼                           │
//! │   MemoryStorage                      FileStorage                        │
//! │   HashMap behind RwLock              one file per key in a directory    │
//! │   tests, embedding                   atomic temp-file + rename writes   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Stores never talk to a backend directly; they go through
//! [`crate::adapter::ShelfStorage`], which owns the key names and JSON
//! encoding.

pub mod file;
pub mod memory;

use std::fmt::Debug;

use crate::error::StoreResult;

pub use file::FileStorage;
pub use memory::MemoryStorage;

/// A string-keyed, string-valued persistent store.
///
/// All methods take `&self`; implementations use interior mutability.
pub trait KeyValueStorage: Send + Sync + Debug {
    /// Returns the value under `key`, or `None` if absent.
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Inserts or replaces the value under `key`.
    fn set(&self, key: &str, value: &str) -> StoreResult<()>;

    /// Removes `key`. Succeeds even if the key did not exist.
    fn remove(&self, key: &str) -> StoreResult<()>;
}
