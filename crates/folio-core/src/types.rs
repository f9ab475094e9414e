//! # Domain Types
//!
//! Core domain types used throughout Folio.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │   BookDraft     │   │      Book       │   │   CartEntry     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  raw form input │──►│  id (UUID v4)   │──►│  frozen copy of │       │
//! │  │  price: String  │   │  price: Money   │   │  a Book         │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                             │
//! │  │ CategoryFilter  │   │     Theme       │                             │
//! │  │  ─────────────  │   │  ─────────────  │                             │
//! │  │  All            │   │  Dark (default) │                             │
//! │  │  Token(String)  │   │  Light          │                             │
//! │  └─────────────────┘   └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Storage Schema
//! `Book` and `CartEntry` serialize to the same JSON object:
//! ```json
//! { "id": "…", "title": "Dune", "author": "Frank Herbert",
//!   "price": 14.99, "category": "sci-fi", "image": "https://…" }
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;
use url::Url;
use uuid::Uuid;

use crate::money::{self, Money};
use crate::validation::{self, ValidationResult};

/// Base URL for the synthesized cover when a book is added without an image.
const COVER_FALLBACK_BASE: &str = "https://source.unsplash.com/random/300x400/";

/// Sentinel category token that disables category filtering.
pub const ALL_CATEGORIES: &str = "all";

// =============================================================================
// Book
// =============================================================================

/// A book in the catalog.
///
/// Immutable once created; the catalog only inserts and removes whole records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    /// Unique identifier (UUID v4).
    pub id: String,

    pub title: String,

    pub author: String,

    /// Price, stored as a decimal JSON number.
    #[serde(with = "money::decimal")]
    pub price: Money,

    /// Free-form category, compared case-insensitively.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// Cover image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Book {
    /// Validates a draft and turns it into a new book with a fresh id.
    ///
    /// ## Behavior
    /// - Title, author and category are trimmed; a blank category becomes `None`
    /// - A blank image is replaced by a cover URL synthesized from the title
    ///
    /// ## Errors
    /// `ValidationError` when title or author is blank, or the price is not a
    /// decimal between zero and `Money::MAX_PRICE`.
    pub fn create(draft: &BookDraft) -> ValidationResult<Book> {
        let title = validation::validate_title(&draft.title)?;
        let author = validation::validate_author(&draft.author)?;
        let price = validation::parse_price(&draft.price)?;
        let category = validation::normalize_optional(&draft.category);
        let image = validation::normalize_optional(draft.image.as_deref().unwrap_or_default())
            .unwrap_or_else(|| fallback_cover_url(&title));

        Ok(Book {
            id: new_book_id(),
            title,
            author,
            price,
            category,
            image: Some(image),
        })
    }

    /// Returns the category if present and not blank.
    pub fn category(&self) -> Option<&str> {
        self.category
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
    }

    /// Returns the image URL if present and not blank.
    pub fn image(&self) -> Option<&str> {
        self.image.as_deref().filter(|i| !i.trim().is_empty())
    }
}

/// Generates a fresh book id.
pub fn new_book_id() -> String {
    Uuid::new_v4().to_string()
}

/// Builds the random-cover URL used when a book is added without an image.
///
/// ```rust
/// use folio_core::types::fallback_cover_url;
///
/// assert_eq!(
///     fallback_cover_url("The Hobbit"),
///     "https://source.unsplash.com/random/300x400/?book,The%20Hobbit"
/// );
/// ```
pub fn fallback_cover_url(title: &str) -> String {
    match Url::parse(COVER_FALLBACK_BASE) {
        Ok(mut url) => {
            url.set_query(Some(&format!("book,{title}")));
            url.to_string()
        }
        Err(_) => COVER_FALLBACK_BASE.to_string(),
    }
}

// =============================================================================
// Book Draft
// =============================================================================

/// Raw fields of the "add book" form.
///
/// Everything is a string because that is what the form submits; validation
/// happens in [`Book::create`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct BookDraft {
    pub title: String,
    pub author: String,
    pub price: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub image: Option<String>,
}

impl BookDraft {
    /// Convenience constructor for a draft without an image.
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        price: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        BookDraft {
            title: title.into(),
            author: author.into(),
            price: price.into(),
            category: category.into(),
            image: None,
        }
    }

    /// Sets the image URL.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }
}

// =============================================================================
// Cart Entry
// =============================================================================

/// A book snapshot taken when it was added to the cart.
///
/// ## Snapshot Semantics
/// The entry is a value copy, not a reference. Deleting the book from the
/// catalog afterwards leaves the entry (and its price) untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CartEntry(Book);

impl CartEntry {
    /// Freezes a copy of the book.
    pub fn snapshot(book: &Book) -> Self {
        CartEntry(book.clone())
    }

    /// The frozen book record.
    pub fn book(&self) -> &Book {
        &self.0
    }

    /// Price at the time of adding.
    pub fn price(&self) -> Money {
        self.0.price
    }

    pub fn book_id(&self) -> &str {
        &self.0.id
    }

    pub fn title(&self) -> &str {
        &self.0.title
    }
}

// =============================================================================
// Category Filter
// =============================================================================

/// The selected category chip.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    /// No category restriction.
    #[default]
    All,
    /// Only books whose category equals this token (case-insensitive).
    Token(String),
}

impl CategoryFilter {
    /// Interprets a chip token. `"all"` (any case) is the sentinel.
    ///
    /// Unknown tokens are kept as-is; they simply match nothing.
    pub fn from_token(token: &str) -> Self {
        let token = token.trim();
        if token.is_empty() || token.eq_ignore_ascii_case(ALL_CATEGORIES) {
            CategoryFilter::All
        } else {
            CategoryFilter::Token(token.to_string())
        }
    }

    /// The token as it would appear on a chip.
    pub fn as_token(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Token(token) => token,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_token())
    }
}

// =============================================================================
// Theme
// =============================================================================

/// Color theme preference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Returns the other theme.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Theme::Dark)
    }

    /// Reads the stored `darkMode` flag. Anything but `"false"` is dark.
    pub fn from_dark_mode_flag(flag: Option<&str>) -> Self {
        match flag.map(str::trim) {
            Some("false") => Theme::Light,
            _ => Theme::Dark,
        }
    }

    /// The `darkMode` flag written to storage.
    pub fn dark_mode_flag(self) -> &'static str {
        if self.is_dark() {
            "true"
        } else {
            "false"
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
