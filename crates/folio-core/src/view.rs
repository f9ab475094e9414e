//! # Render Pipeline
//!
//! Projects storefront state into the view models the presentation layer
//! draws. Pure and deterministic: the same [`RenderInput`] always yields an
//! equal [`StorefrontView`], so rendering twice is harmless.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  RenderInput                         StorefrontView                     │
//! │  ───────────                         ──────────────                     │
//! │  catalog ──┐                                                            │
//! │  search ───┼── filter::visible ───► books: Vec<BookCard>                │
//! │  category ─┘                         show_empty_message                 │
//! │                                                                         │
//! │  cart ────────────────────────────► cart: CartView                      │
//! │                                        lines, total, count, badge       │
//! │                                                                         │
//! │  theme, checkout_pending ─────────► echoed for the header / button      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All view types export TypeScript bindings through `ts-rs`.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::cart::Cart;
use crate::filter;
use crate::types::{Book, CategoryFilter, Theme};

/// Label shown for books without a category.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Cover shown on a card when the book has no image.
pub const CARD_PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/300x400?text=No+Cover";

/// Thumbnail shown in the cart when the entry has no image.
pub const CART_PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/70x90";

/// Everything the renderer reads.
#[derive(Debug, Clone, Copy)]
pub struct RenderInput<'a> {
    pub catalog: &'a [Book],
    pub cart: &'a Cart,
    pub search_term: &'a str,
    pub category: &'a CategoryFilter,
    pub theme: Theme,
    pub checkout_pending: bool,
}

/// The complete render-ready state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct StorefrontView {
    pub books: Vec<BookCard>,
    /// True when the "no books found" message should be visible.
    pub show_empty_message: bool,
    pub cart: CartView,
    pub search_term: String,
    pub category: String,
    pub theme: Theme,
    /// While true the checkout button is disabled.
    pub checkout_pending: bool,
}

/// One card in the book grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct BookCard {
    pub id: String,
    pub title: String,
    pub author: String,
    /// Formatted price, e.g. `$12.99`.
    pub price: String,
    pub category: String,
    pub image: String,
}

/// The cart sidebar and header badge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartView {
    pub lines: Vec<CartLine>,
    /// Formatted total, e.g. `$37.49`.
    pub total: String,
    pub count: usize,
    pub badge_visible: bool,
}

/// One row in the cart sidebar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    /// Position used by "Remove".
    pub index: usize,
    pub book_id: String,
    pub title: String,
    pub author: String,
    pub price: String,
    pub image: String,
}

/// Builds the view from the current state.
pub fn render(input: RenderInput<'_>) -> StorefrontView {
    let books: Vec<BookCard> = filter::visible(input.catalog, input.search_term, input.category)
        .into_iter()
        .map(BookCard::from)
        .collect();

    StorefrontView {
        show_empty_message: books.is_empty(),
        books,
        cart: CartView::from(input.cart),
        search_term: input.search_term.to_string(),
        category: input.category.as_token().to_string(),
        theme: input.theme,
        checkout_pending: input.checkout_pending,
    }
}

impl From<&Book> for BookCard {
    fn from(book: &Book) -> Self {
        BookCard {
            id: book.id.clone(),
            title: book.title.clone(),
            author: book.author.clone(),
            price: book.price.to_string(),
            category: book.category().unwrap_or(UNCATEGORIZED).to_string(),
            image: book.image().unwrap_or(CARD_PLACEHOLDER_IMAGE).to_string(),
        }
    }
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        let lines = cart
            .entries()
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                let book = entry.book();
                CartLine {
                    index,
                    book_id: book.id.clone(),
                    title: book.title.clone(),
                    author: book.author.clone(),
                    price: book.price.to_string(),
                    image: book.image().unwrap_or(CART_PLACEHOLDER_IMAGE).to_string(),
                }
            })
            .collect();

        CartView {
            lines,
            total: cart.total().to_string(),
            count: cart.len(),
            badge_visible: !cart.is_empty(),
        }
    }
}
