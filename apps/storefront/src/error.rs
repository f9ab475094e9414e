//! # API Error Type
//!
//! Unified error type for storefront commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Folio                                  │
//! │                                                                         │
//! │  Presentation                Rust Backend                               │
//! │  ────────────                ────────────                               │
//! │                                                                         │
//! │  storefront.remove_from_cart(7)                                         │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<T, ApiError>                                             │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Storage Error? ─── StoreError::Io(..) ───────────┐             │  │
//! │  │         │                                          │             │  │
//! │  │         ▼                                          ▼             │  │
//! │  │  Domain Error? ─── CoreError::CheckoutInProgress ─ ApiError ───►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  { "code": "INDEX_OUT_OF_RANGE",                                       │
//! │    "message": "Cart index 7 out of range (cart has 2 entries)" }       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;
use ts_rs::TS;

use folio_core::CoreError;
use folio_store::StoreError;

/// API error returned from storefront commands.
///
/// ## Serialization
/// This is what the presentation layer receives when a command fails:
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Book not found: 1f0c..."
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Unknown book id
    NotFound,

    /// The add-book form was rejected
    ValidationError,

    /// Cart position outside the cart
    IndexOutOfRange,

    /// A checkout is already scheduled
    CheckoutInProgress,

    /// Reading or writing storage failed
    StorageError,

    /// Configuration could not be loaded
    ConfigError,

    /// Internal error
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts storage errors to API errors.
impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { entity, id } => ApiError::not_found(&entity, &id),
            StoreError::IndexOutOfRange { index, len } => ApiError::new(
                ErrorCode::IndexOutOfRange,
                format!("Cart index {} out of range (cart has {} entries)", index, len),
            ),
            StoreError::Validation(e) => ApiError::validation(e.to_string()),
            StoreError::Io(e) => {
                // Log the actual error but return a generic message
                tracing::error!("Storage I/O failed: {}", e);
                ApiError::new(ErrorCode::StorageError, "Could not save your changes")
            }
            StoreError::Serialization(e) => {
                tracing::error!("Serialization failed: {}", e);
                ApiError::new(ErrorCode::StorageError, "Could not save your changes")
            }
            StoreError::Corrupt { key, reason } => {
                tracing::error!(key = %key, "Corrupt stored value: {}", reason);
                ApiError::new(ErrorCode::StorageError, "Stored data is unreadable")
            }
            StoreError::Internal(e) => {
                tracing::error!("Internal storage error: {}", e);
                ApiError::new(ErrorCode::StorageError, "Storage operation failed")
            }
        }
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::BookNotFound(id) => ApiError::not_found("Book", &id),
            CoreError::CartIndexOutOfRange { index, len } => ApiError::new(
                ErrorCode::IndexOutOfRange,
                format!("Cart index {} out of range (cart has {} entries)", index, len),
            ),
            CoreError::CheckoutInProgress => {
                ApiError::new(ErrorCode::CheckoutInProgress, "Checkout already in progress")
            }
            CoreError::Validation(e) => ApiError::validation(e.to_string()),
        }
    }
}

impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        ApiError::new(ErrorCode::ConfigError, err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

/// Result type for storefront commands.
pub type ApiResult<T> = Result<T, ApiError>;

// =============================================================================
// Configuration Errors
// =============================================================================

/// Errors raised while loading or saving [`crate::config::StorefrontConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to read config file {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to save config: {0}")]
    Save(String),

    #[error("Could not determine a platform data directory")]
    NoDataDir,
}

impl From<toml::ser::Error> for ConfigError {
    fn from(err: toml::ser::Error) -> Self {
        ConfigError::Save(err.to_string())
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::Save(err.to_string())
    }
}
