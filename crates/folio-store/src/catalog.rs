//! # Catalog Store
//!
//! The authoritative, ordered list of books.
//!
//! ## Key Operations
//! - First-run seeding
//! - Create from a validated draft
//! - Delete by id
//!
//! ## Write Path
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Every mutation                                       │
//! │                                                                         │
//! │  mutate in memory ──► save_books(all) ──┬── Ok  ──► return record       │
//! │                                          │                               │
//! │                                          └── Err ──► undo mutation       │
//! │                                                      return StoreError   │
//! │                                                                         │
//! │  Memory and storage never disagree after a failed write.                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::{debug, info, warn};

use folio_core::{Book, BookDraft};

use crate::adapter::ShelfStorage;
use crate::error::{StoreError, StoreResult};
use crate::seed;

/// In-memory catalog mirrored to the `"books"` key.
///
/// ## Usage
/// ```rust,ignore
/// let mut catalog = CatalogStore::initialize(storage, true)?;
///
/// let dune = catalog.add(&BookDraft::new("Dune", "Frank Herbert", "14.99", "sci-fi"))?;
/// catalog.remove(&dune.id)?;
/// ```
#[derive(Debug)]
pub struct CatalogStore {
    storage: ShelfStorage,
    books: Vec<Book>,
}

impl CatalogStore {
    /// Loads the persisted catalog.
    ///
    /// ## Behavior
    /// - A corrupt `"books"` blob is logged and treated as empty
    /// - An empty catalog is seeded with the default books when `seed` is set
    ///
    /// ## Errors
    /// Backend I/O failures, and failure to persist the seeded catalog.
    pub fn initialize(storage: ShelfStorage, seed: bool) -> StoreResult<Self> {
        let books = match storage.load_books() {
            Ok(books) => books,
            Err(StoreError::Corrupt { key, reason }) => {
                warn!(key = %key, reason = %reason, "Stored catalog is corrupt, starting empty");
                Vec::new()
            }
            Err(e) => return Err(e),
        };

        let mut store = CatalogStore { storage, books };

        if store.books.is_empty() && seed {
            store.books = seed::default_books();
            store.storage.save_books(&store.books)?;
            info!(count = store.books.len(), "Seeded default catalog");
        } else {
            debug!(count = store.books.len(), "Catalog loaded");
        }

        Ok(store)
    }

    /// Validates a draft, appends the new book and persists the catalog.
    ///
    /// ## Errors
    /// - `Validation` when the draft is rejected; nothing changes
    /// - Storage errors; the book is not kept
    pub fn add(&mut self, draft: &BookDraft) -> StoreResult<Book> {
        let book = Book::create(draft)?;

        self.books.push(book.clone());
        if let Err(e) = self.storage.save_books(&self.books) {
            self.books.pop();
            return Err(e);
        }

        debug!(id = %book.id, title = %book.title, "Book added");
        Ok(book)
    }

    /// Removes the book with `id` and persists the catalog.
    ///
    /// Cart entries are snapshots and are not touched.
    ///
    /// ## Errors
    /// - `NotFound` when no book has this id
    /// - Storage errors; the book is put back in place
    pub fn remove(&mut self, id: &str) -> StoreResult<Book> {
        let index = self
            .books
            .iter()
            .position(|b| b.id == id)
            .ok_or_else(|| StoreError::not_found("Book", id))?;

        let book = self.books.remove(index);
        if let Err(e) = self.storage.save_books(&self.books) {
            self.books.insert(index, book);
            return Err(e);
        }

        debug!(id = %book.id, title = %book.title, "Book removed");
        Ok(book)
    }

    /// Books in insertion order.
    pub fn list(&self) -> &[Book] {
        &self.books
    }

    pub fn get(&self, id: &str) -> Option<&Book> {
        self.books.iter().find(|b| b.id == id)
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}
