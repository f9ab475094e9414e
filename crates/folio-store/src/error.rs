//! # Store Error Types
//!
//! Error types for storage and store operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  io::Error / serde_json::Error / CoreError                             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← Adds key / entity context                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ApiError (storefront app) ← Serialized for the presentation layer     │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use folio_core::{CoreError, ValidationError};
use thiserror::Error;

/// Store operation errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Entity not found.
    ///
    /// ## When This Occurs
    /// - Removing a book id that is not in the catalog
    /// - Adding a book to the cart by an unknown id
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// Positional access outside `[0, len)`.
    #[error("Index {index} out of range (length {len})")]
    IndexOutOfRange { index: usize, len: usize },

    /// The submitted book failed validation.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Reading or writing the backing storage failed.
    #[error("Storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// A value could not be encoded as JSON.
    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A stored value exists but cannot be decoded.
    ///
    /// ## When This Occurs
    /// - Storage edited by hand
    /// - A write from an incompatible version
    #[error("Stored value under '{key}' is corrupt: {reason}")]
    Corrupt { key: String, reason: String },

    /// Internal storage error.
    #[error("Internal storage error: {0}")]
    Internal(String),
}

impl StoreError {
    /// Creates a NotFound error for a given entity type and id.
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        StoreError::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }

    /// Creates a Corrupt error for a storage key.
    pub fn corrupt(key: impl Into<String>, reason: impl ToString) -> Self {
        StoreError::Corrupt {
            key: key.into(),
            reason: reason.to_string(),
        }
    }
}

/// Convert domain errors into store errors.
impl From<CoreError> for StoreError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::BookNotFound(id) => StoreError::not_found("Book", id),
            CoreError::CartIndexOutOfRange { index, len } => {
                StoreError::IndexOutOfRange { index, len }
            }
            CoreError::Validation(e) => StoreError::Validation(e),
            CoreError::CheckoutInProgress => {
                StoreError::Internal("Checkout already in progress".to_string())
            }
        }
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
