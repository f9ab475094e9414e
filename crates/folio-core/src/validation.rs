//! # Validation Module
//!
//! Input validation for the "add book" form.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Presentation (browser form)                                  │
//! │  ├── May or may not mark fields required                               │
//! │  └── Never trusted                                                     │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Required title / author                                           │
//! │  └── Price is a decimal in 0..=1,000,000,000                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Catalog store                                                │
//! │  └── Only validated books are appended and persisted                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use folio_core::validation::{parse_price, validate_title};
//!
//! assert_eq!(validate_title("  Dune ").unwrap(), "Dune");
//! assert_eq!(parse_price("14.99").unwrap().cents(), 1499);
//! assert!(parse_price("-1").is_err());
//! ```

use crate::error::ValidationError;
use crate::money::{Money, ParseMoneyError};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a book title and returns it trimmed.
pub fn validate_title(title: &str) -> ValidationResult<String> {
    required_text("title", title)
}

/// Validates an author name and returns it trimmed.
pub fn validate_author(author: &str) -> ValidationResult<String> {
    required_text("author", author)
}

fn required_text(field: &str, value: &str) -> ValidationResult<String> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    Ok(value.to_string())
}

/// Trims an optional form field; blank becomes `None`.
pub fn normalize_optional(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Parses the price field.
///
/// ## Rules
/// - Must be a plain decimal number
/// - Zero is allowed (free titles)
/// - Negative prices and prices above `Money::MAX_PRICE` are rejected
/// - Sub-cent digits are kept; only display rounds to cents
pub fn parse_price(raw: &str) -> ValidationResult<Money> {
    raw.parse::<Money>().map_err(|err| match err {
        ParseMoneyError::Empty => ValidationError::Required {
            field: "price".to_string(),
        },
        ParseMoneyError::Negative | ParseMoneyError::TooLarge => ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: Money::MAX_PRICE_DOLLARS,
        },
        other => ValidationError::InvalidFormat {
            field: "price".to_string(),
            reason: other.to_string(),
        },
    })
}
