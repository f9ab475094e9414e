//! # Catalog Commands
//!
//! Adding books from the form and deleting them from the grid.

use tracing::debug;

use folio_core::{Book, BookDraft, Notification};

use crate::error::{ApiError, ApiResult};
use crate::storefront::Storefront;

/// Asks the user before a book is deleted.
///
/// Closures `Fn(&Book) -> bool` implement this directly.
pub trait ConfirmationGate {
    /// Returns `true` to go ahead with the delete.
    fn confirm_delete(&self, book: &Book) -> bool;
}

impl<F> ConfirmationGate for F
where
    F: Fn(&Book) -> bool,
{
    fn confirm_delete(&self, book: &Book) -> bool {
        self(book)
    }
}

impl Storefront {
    /// Validates the form fields and adds a new book to the catalog.
    ///
    /// ## Behavior
    /// - The new book gets a fresh id and is appended to the catalog
    /// - A blank image is replaced with a random cover URL built from the title
    /// - Publishes the view and `book_added`
    ///
    /// ## Errors
    /// - `VALIDATION_ERROR` when title or author is blank, or the price is not a
    ///   number between 0 and 1,000,000,000
    /// - `STORAGE_ERROR` when the catalog cannot be saved (nothing changes)
    pub fn submit_new_book(&self, draft: BookDraft) -> ApiResult<Book> {
        debug!(title = %draft.title, "submit_new_book command");

        let (book, view) = self.state.with_state_mut(|s| {
            let book = s.catalog.add(&draft)?;
            Ok::<_, ApiError>((book, s.view()))
        })?;

        self.publish(
            &view,
            Some(Notification::BookAdded {
                title: book.title.clone(),
            }),
        );
        Ok(book)
    }

    /// Deletes a book from the catalog.
    ///
    /// Cart entries for the book stay in the cart.
    ///
    /// ## Errors
    /// - `NOT_FOUND` when no book has this id
    /// - `STORAGE_ERROR` when the catalog cannot be saved (nothing changes)
    pub fn delete_book(&self, id: &str) -> ApiResult<Book> {
        debug!(id = %id, "delete_book command");

        let (book, view) = self.state.with_state_mut(|s| {
            let book = s.catalog.remove(id)?;
            Ok::<_, ApiError>((book, s.view()))
        })?;

        self.publish(
            &view,
            Some(Notification::BookRemoved {
                title: book.title.clone(),
            }),
        );
        Ok(book)
    }

    /// Deletes a book after `gate` confirms it.
    ///
    /// The gate is asked with no lock held. Returns `Ok(None)` when it
    /// declines; nothing changes and nothing is published.
    pub fn delete_book_with(
        &self,
        id: &str,
        gate: &dyn ConfirmationGate,
    ) -> ApiResult<Option<Book>> {
        let book = self
            .state
            .with_state(|s| s.catalog.get(id).cloned())
            .ok_or_else(|| ApiError::not_found("Book", id))?;

        if !gate.confirm_delete(&book) {
            debug!(id = %id, "Delete declined");
            return Ok(None);
        }

        self.delete_book(id).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::{empty, seeded, Recorder};
    use crate::error::ErrorCode;
    use folio_core::ToastKind;

    fn dune() -> BookDraft {
        BookDraft::new("Dune", "Frank Herbert", "14.99", "sci-fi")
    }

    #[test]
    fn test_dune_scenario() {
        let storefront = seeded();
        let recorder = Recorder::attach(&storefront);

        let book = storefront.submit_new_book(dune()).unwrap();
        let view = recorder.last_view().unwrap();
        assert!(view.books.iter().any(|card| card.id == book.id));

        storefront.set_category("fiction");
        assert!(!storefront.view().books.iter().any(|card| card.id == book.id));

        storefront.set_category("all");
        assert!(storefront.view().books.iter().any(|card| card.id == book.id));

        let notifications = recorder.notifications.lock().unwrap();
        assert_eq!(notifications[0].message(), "\"Dune\" added to collection!");
        assert_eq!(notifications[0].kind(), ToastKind::Success);
    }

    #[test]
    fn test_invalid_draft_publishes_nothing() {
        let storefront = empty();
        let recorder = Recorder::attach(&storefront);

        let err = storefront
            .submit_new_book(BookDraft::new("Dune", "", "14.99", ""))
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        let err = storefront
            .submit_new_book(BookDraft::new("Dune", "Frank Herbert", "abc", ""))
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        assert_eq!(recorder.render_count(), 0);
        assert!(recorder.names().is_empty());
        assert!(storefront.view().books.is_empty());
    }

    #[test]
    fn test_delete_keeps_cart_entries() {
        let storefront = seeded();
        let recorder = Recorder::attach(&storefront);
        let gatsby = storefront.view().books[0].clone();

        storefront.add_to_cart(&gatsby.id).unwrap();
        let removed = storefront.delete_book(&gatsby.id).unwrap();
        assert_eq!(removed.title, "The Great Gatsby");

        let view = storefront.view();
        assert_eq!(view.books.len(), 4);
        assert_eq!(view.cart.count, 1);
        assert_eq!(view.cart.lines[0].title, "The Great Gatsby");
        assert_eq!(view.cart.total, "$12.99");

        assert_eq!(recorder.names(), vec!["cart_item_added", "book_removed"]);
        let notifications = recorder.notifications.lock().unwrap();
        assert_eq!(notifications[1].message(), "\"The Great Gatsby\" removed.");
        assert_eq!(notifications[1].kind(), ToastKind::Danger);
    }

    #[test]
    fn test_delete_unknown_id() {
        let storefront = seeded();
        let err = storefront.delete_book("nope").unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(storefront.view().books.len(), 5);
    }

    #[test]
    fn test_declined_gate_is_a_no_op() {
        let storefront = seeded();
        let recorder = Recorder::attach(&storefront);
        let id = storefront.view().books[2].id.clone();

        let asked = std::cell::Cell::new(None);
        let gate = |book: &Book| {
            asked.set(Some(book.title.clone()));
            false
        };

        assert_eq!(storefront.delete_book_with(&id, &gate).unwrap(), None);
        assert_eq!(asked.take().as_deref(), Some("The Alchemist"));
        assert_eq!(storefront.view().books.len(), 5);
        assert_eq!(recorder.render_count(), 0);
    }

    #[test]
    fn test_confirmed_gate_deletes() {
        let storefront = seeded();
        let id = storefront.view().books[2].id.clone();

        let removed = storefront
            .delete_book_with(&id, &|_: &Book| true)
            .unwrap()
            .unwrap();
        assert_eq!(removed.id, id);
        assert_eq!(storefront.view().books.len(), 4);

        let err = storefront.delete_book_with(&id, &|_: &Book| true).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[test]
    fn test_sink_may_call_back_into_storefront() {
        let storefront = empty();
        let reentrant = storefront.clone();
        let seen = std::sync::Arc::new(std::sync::Mutex::new(Vec::new()));

        let sink_seen = seen.clone();
        storefront.on_notification(move |n: &Notification| {
            // reading state from inside a sink must not deadlock
            let count = reentrant.view().books.len();
            sink_seen.lock().unwrap().push((n.name(), count));
        });

        storefront.submit_new_book(dune()).unwrap();
        assert_eq!(*seen.lock().unwrap(), vec![("book_added", 1)]);
    }
}
