//! # Cart Commands
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐     ┌──────────┐       │
//! │  │  Empty   │────►│ In Cart  │────►│ Checkout │────►│  Empty   │       │
//! │  │  Cart    │     │          │     │ pending  │     │  Cart    │       │
//! │  └──────────┘     └──────────┘     └──────────┘     └──────────┘       │
//! │                        │                 │                              │
//! │                   add_to_cart       after delay                        │
//! │                   remove_from_cart  (checkout.rs)                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Entries are addressed by position: the same book may be in the cart
//! several times.

use tracing::debug;

use folio_core::{CartEntry, Notification};

use crate::error::{ApiError, ApiResult};
use crate::storefront::Storefront;

impl Storefront {
    /// Adds a snapshot of the catalog book with `book_id` to the cart.
    ///
    /// Returns the new entry's index. Publishes the view and `cart_item_added`.
    ///
    /// ## Errors
    /// - `NOT_FOUND` when the book is not in the catalog
    /// - `STORAGE_ERROR` when the cart cannot be saved (nothing changes)
    pub fn add_to_cart(&self, book_id: &str) -> ApiResult<usize> {
        debug!(book_id = %book_id, "add_to_cart command");

        let (index, title, view) = self.state.with_state_mut(|s| {
            let book = s
                .catalog
                .get(book_id)
                .cloned()
                .ok_or_else(|| ApiError::not_found("Book", book_id))?;
            let index = s.cart.add(&book)?;
            Ok::<_, ApiError>((index, book.title, s.view()))
        })?;

        self.publish(&view, Some(Notification::CartItemAdded { title }));
        Ok(index)
    }

    /// Removes the cart entry at `index`; later entries shift down.
    ///
    /// Publishes the view and `cart_item_removed`.
    ///
    /// ## Errors
    /// - `INDEX_OUT_OF_RANGE` when `index` is past the end of the cart
    /// - `STORAGE_ERROR` when the cart cannot be saved (nothing changes)
    pub fn remove_from_cart(&self, index: usize) -> ApiResult<CartEntry> {
        debug!(index, "remove_from_cart command");

        let (entry, view) = self.state.with_state_mut(|s| {
            let entry = s.cart.remove_at(index)?;
            Ok::<_, ApiError>((entry, s.view()))
        })?;

        self.publish(
            &view,
            Some(Notification::CartItemRemoved {
                title: entry.title().to_string(),
            }),
        );
        Ok(entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::{empty, seeded, Recorder};
    use crate::config::StorefrontConfig;
    use crate::error::ErrorCode;
    use folio_core::BookDraft;
    use folio_store::adapter::CART_KEY;
    use folio_store::{KeyValueStorage, MemoryStorage, StoreError, StoreResult};
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    #[derive(Debug, Default)]
    struct FlakyStorage {
        inner: MemoryStorage,
        broken: AtomicBool,
    }

    impl KeyValueStorage for FlakyStorage {
        fn get(&self, key: &str) -> StoreResult<Option<String>> {
            self.inner.get(key)
        }

        fn set(&self, key: &str, value: &str) -> StoreResult<()> {
            if self.broken.load(Ordering::SeqCst) {
                return Err(StoreError::Io(std::io::Error::other("read-only")));
            }
            self.inner.set(key, value)
        }

        fn remove(&self, key: &str) -> StoreResult<()> {
            self.inner.remove(key)
        }
    }

    #[test]
    fn test_add_two_books_totals() {
        let storefront = seeded();
        let recorder = Recorder::attach(&storefront);
        let books = storefront.view().books;

        storefront.add_to_cart(&books[0].id).unwrap();
        storefront.add_to_cart(&books[1].id).unwrap();

        let view = recorder.last_view().unwrap();
        assert_eq!(view.cart.total, "$37.49");
        assert_eq!(view.cart.count, 2);
        assert!(view.cart.badge_visible);

        let notifications = recorder.notifications.lock().unwrap();
        assert_eq!(
            notifications[0].message(),
            "Added \"The Great Gatsby\" to collection"
        );
    }

    #[test]
    fn test_same_book_twice_is_two_lines() {
        let storefront = seeded();
        let dune = storefront.view().books[4].clone();

        assert_eq!(storefront.add_to_cart(&dune.id).unwrap(), 0);
        assert_eq!(storefront.add_to_cart(&dune.id).unwrap(), 1);

        let cart = storefront.view().cart;
        assert_eq!(cart.lines.len(), 2);
        assert_eq!(cart.total, "$29.98");
    }

    #[test]
    fn test_add_unknown_book() {
        let storefront = seeded();
        let err = storefront.add_to_cart("missing").unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(storefront.view().cart.count, 0);
    }

    #[test]
    fn test_remove_shifts_following_entries() {
        let storefront = seeded();
        let recorder = Recorder::attach(&storefront);
        let books = storefront.view().books;
        for book in &books[..3] {
            storefront.add_to_cart(&book.id).unwrap();
        }

        let removed = storefront.remove_from_cart(0).unwrap();
        assert_eq!(removed.title(), "The Great Gatsby");

        let lines = storefront.view().cart.lines;
        let titles: Vec<&str> = lines.iter().map(|l| l.title.as_str()).collect();
        assert_eq!(titles, vec!["Atomic Habits", "The Alchemist"]);
        assert_eq!(lines[0].index, 0);
        assert_eq!(lines[1].index, 1);

        let notifications = recorder.notifications.lock().unwrap();
        assert_eq!(
            notifications.last().unwrap().message(),
            "\"The Great Gatsby\" removed from cart."
        );
    }

    #[test]
    fn test_remove_out_of_range() {
        let storefront = seeded();
        let recorder = Recorder::attach(&storefront);
        let id = storefront.view().books[0].id.clone();
        storefront.add_to_cart(&id).unwrap();

        let err = storefront.remove_from_cart(3).unwrap_err();
        assert_eq!(err.code, ErrorCode::IndexOutOfRange);
        assert_eq!(storefront.view().cart.count, 1);
        assert_eq!(recorder.render_count(), 1);
    }

    #[test]
    fn test_failed_save_leaves_cart_unchanged() {
        let storage = Arc::new(FlakyStorage::default());
        let mut config = StorefrontConfig::in_memory();
        config.catalog.seed_on_first_run = true;
        let storefront = Storefront::with_storage(storage.clone(), &config).unwrap();
        let recorder = Recorder::attach(&storefront);
        let id = storefront.view().books[0].id.clone();

        storefront.add_to_cart(&id).unwrap();
        storage.broken.store(true, Ordering::SeqCst);

        let err = storefront.add_to_cart(&id).unwrap_err();
        assert_eq!(err.code, ErrorCode::StorageError);
        let err = storefront.remove_from_cart(0).unwrap_err();
        assert_eq!(err.code, ErrorCode::StorageError);

        assert_eq!(storefront.view().cart.count, 1);
        assert_eq!(recorder.names(), vec!["cart_item_added"]);

        let stored: Vec<CartEntry> =
            serde_json::from_str(&storage.inner.raw(CART_KEY).unwrap()).unwrap();
        assert_eq!(stored.len(), 1);
    }

    #[test]
    fn test_cart_survives_restart() {
        let storage: Arc<dyn KeyValueStorage> = Arc::new(MemoryStorage::new());
        let mut config = StorefrontConfig::in_memory();
        config.catalog.seed_on_first_run = true;

        let first = Storefront::with_storage(storage.clone(), &config).unwrap();
        let id = first.view().books[3].id.clone();
        first.add_to_cart(&id).unwrap();

        let second = Storefront::with_storage(storage, &config).unwrap();
        let cart = second.view().cart;
        assert_eq!(cart.count, 1);
        assert_eq!(cart.lines[0].title, "Steve Jobs");
        assert_eq!(cart.total, "$18.99");
    }

    #[test]
    fn test_oversized_price_is_rejected_and_storefront_stays_usable() {
        let storefront = empty();

        let err = storefront
            .submit_new_book(BookDraft::new("Vault", "Anon", "50000000000000000", ""))
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        let priciest = storefront
            .submit_new_book(BookDraft::new("Vault", "Anon", "1000000000", ""))
            .unwrap();
        storefront.add_to_cart(&priciest.id).unwrap();
        storefront.add_to_cart(&priciest.id).unwrap();

        let cart = storefront.view().cart;
        assert_eq!(cart.count, 2);
        assert_eq!(cart.total, "$2000000000.00");
        assert_eq!(storefront.remove_from_cart(0).unwrap().title(), "Vault");
    }

    #[test]
    fn test_legacy_sub_cent_prices_total_exactly() {
        let legacy = r#"[
            {"id":"a","title":"Third","author":"X","price":"0.333"},
            {"id":"a","title":"Third","author":"X","price":"0.333"},
            {"id":"a","title":"Third","author":"X","price":0.333}
        ]"#;
        let storage: Arc<dyn KeyValueStorage> =
            Arc::new(MemoryStorage::with_entries([(CART_KEY, legacy)]));
        let storefront = Storefront::with_storage(storage, &StorefrontConfig::in_memory()).unwrap();

        let cart = storefront.view().cart;
        assert_eq!(cart.count, 3);
        assert_eq!(cart.lines[0].price, "$0.33");
        assert_eq!(cart.total, "$1.00");
    }
}
