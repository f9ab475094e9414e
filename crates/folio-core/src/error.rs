//! # Error Types
//!
//! Domain-specific error types for folio-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  folio-core errors (this file)                                         │
//! │  ├── CoreError        - General domain errors                          │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  folio-store errors (separate crate)                                   │
//! │  └── StoreError       - Storage and store operation failures           │
//! │                                                                         │
//! │  storefront app errors                                                 │
//! │  └── ApiError         - What the presentation layer sees (serialized)  │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → StoreError → ApiError → UI        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (id, index, field)
//! 3. Errors are enum variants, never String
//! 4. Every error is recoverable at the call site

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    /// No book with this id exists in the catalog.
    ///
    /// ## When This Occurs
    /// - Deleting a book that was already deleted
    /// - Adding a stale card to the cart after its book was removed
    #[error("Book not found: {0}")]
    BookNotFound(String),

    /// Cart removal with an index outside `[0, len)`.
    ///
    /// Cart entries are addressed by position because duplicates share
    /// a book id.
    #[error("Cart index {index} out of range (cart has {len} entries)")]
    CartIndexOutOfRange { index: usize, len: usize },

    /// A checkout is already scheduled for this cart.
    #[error("Checkout already in progress")]
    CheckoutInProgress,

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when a submitted book form doesn't meet requirements.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    /// A required field is missing or blank.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g., a price that is not a number).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::CartIndexOutOfRange { index: 5, len: 3 };
        assert_eq!(
            err.to_string(),
            "Cart index 5 out of range (cart has 3 entries)"
        );

        let err = CoreError::BookNotFound("abc".to_string());
        assert_eq!(err.to_string(), "Book not found: abc");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "title".to_string(),
        };
        assert_eq!(err.to_string(), "title is required");

        let err = ValidationError::InvalidFormat {
            field: "price".to_string(),
            reason: "not a number".to_string(),
        };
        assert_eq!(err.to_string(), "price has invalid format: not a number");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "author".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
