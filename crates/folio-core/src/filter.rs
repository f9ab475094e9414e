//! # Filter / Query Engine
//!
//! Derives the visible subset of the catalog from the search box and the
//! selected category chip.
//!
//! ```text
//! catalog ──► matches_search(term) ──► matches_category(filter) ──► visible
//!             title OR author          book.category == token
//!             contains term            (skipped for All)
//! ```
//!
//! Both predicates are pure, so their order does not change the result.
//! Catalog order is preserved.

use crate::types::{Book, CategoryFilter};

/// Returns the books to display, in catalog order.
///
/// ```rust
/// use folio_core::filter::visible;
/// use folio_core::types::{Book, BookDraft, CategoryFilter};
///
/// let dune = Book::create(&BookDraft::new("Dune", "Frank Herbert", "14.99", "sci-fi")).unwrap();
/// let catalog = vec![dune];
///
/// assert_eq!(visible(&catalog, "herb", &CategoryFilter::All).len(), 1);
/// assert!(visible(&catalog, "", &CategoryFilter::from_token("fiction")).is_empty());
/// ```
pub fn visible<'a>(catalog: &'a [Book], search_term: &str, category: &CategoryFilter) -> Vec<&'a Book> {
    let needle = search_term.to_lowercase();
    let category = CategoryNeedle::new(category);

    catalog
        .iter()
        .filter(|book| matches_search(book, &needle))
        .filter(|book| category.matches(book))
        .collect()
}

/// Whether title or author contains an already-lowercased term.
pub fn matches_search(book: &Book, lowercase_term: &str) -> bool {
    lowercase_term.is_empty()
        || book.title.to_lowercase().contains(lowercase_term)
        || book.author.to_lowercase().contains(lowercase_term)
}

/// Whether the book passes the category filter.
pub fn matches_category(book: &Book, category: &CategoryFilter) -> bool {
    CategoryNeedle::new(category).matches(book)
}

/// A category filter with its token lowercased once per query.
enum CategoryNeedle {
    Any,
    Exact(String),
}

impl CategoryNeedle {
    fn new(filter: &CategoryFilter) -> Self {
        match filter {
            CategoryFilter::All => CategoryNeedle::Any,
            CategoryFilter::Token(token) => CategoryNeedle::Exact(token.to_lowercase()),
        }
    }

    fn matches(&self, book: &Book) -> bool {
        match self {
            CategoryNeedle::Any => true,
            // uncategorized books only show under All
            CategoryNeedle::Exact(token) => book
                .category()
                .is_some_and(|category| category.to_lowercase() == *token),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    fn book(id: &str, title: &str, author: &str, category: Option<&str>) -> Book {
        Book {
            id: id.to_string(),
            title: title.to_string(),
            author: author.to_string(),
            price: Money::from_cents(1000),
            category: category.map(str::to_string),
            image: None,
        }
    }

    fn catalog() -> Vec<Book> {
        vec![
            book("1", "The Great Gatsby", "F. Scott Fitzgerald", Some("Fiction")),
            book("2", "Atomic Habits", "James Clear", Some("non-fiction")),
            book("3", "The Alchemist", "Paulo Coelho", Some("Fiction")),
            book("4", "Steve Jobs", "Walter Isaacson", Some("biography")),
            book("5", "Dune", "Frank Herbert", Some("sci-fi")),
            book("6", "Untitled Notes", "Anonymous", None),
        ]
    }

    fn ids(books: &[&Book]) -> Vec<String> {
        books.iter().map(|b| b.id.clone()).collect()
    }

    #[test]
    fn test_empty_search_and_all_is_identity() {
        let catalog = catalog();
        let result = visible(&catalog, "", &CategoryFilter::All);
        assert_eq!(ids(&result), vec!["1", "2", "3", "4", "5", "6"]);
    }

    #[test]
    fn test_search_matches_title_or_author_case_insensitively() {
        let catalog = catalog();
        assert_eq!(ids(&visible(&catalog, "THE", &CategoryFilter::All)), vec!["1", "3"]);
        assert_eq!(ids(&visible(&catalog, "clear", &CategoryFilter::All)), vec!["2"]);
        assert!(visible(&catalog, "tolkien", &CategoryFilter::All).is_empty());
    }

    #[test]
    fn test_search_term_is_not_trimmed() {
        let catalog = catalog();
        assert_eq!(ids(&visible(&catalog, "the ", &CategoryFilter::All)), vec!["1", "3"]);
        assert!(visible(&catalog, " dune", &CategoryFilter::All).is_empty());
    }

    #[test]
    fn test_category_is_case_insensitive_exact_match() {
        let catalog = catalog();
        let fiction = CategoryFilter::from_token("fiction");
        assert_eq!(ids(&visible(&catalog, "", &fiction)), vec!["1", "3"]);

        // "non-fiction" must not match "fiction"
        let non_fiction = CategoryFilter::from_token("NON-FICTION");
        assert_eq!(ids(&visible(&catalog, "", &non_fiction)), vec!["2"]);
    }

    #[test]
    fn test_uncategorized_only_under_all() {
        let catalog = catalog();
        assert!(visible(&catalog, "notes", &CategoryFilter::from_token("fiction")).is_empty());
        assert_eq!(ids(&visible(&catalog, "notes", &CategoryFilter::All)), vec!["6"]);
    }

    #[test]
    fn test_unknown_category_yields_empty() {
        let catalog = catalog();
        assert!(visible(&catalog, "", &CategoryFilter::from_token("poetry")).is_empty());
    }

    #[test]
    fn test_predicate_order_does_not_matter() {
        let catalog = catalog();
        for term in ["", "the", "a", "herbert", "zzz"] {
            for token in ["all", "fiction", "sci-fi", "poetry"] {
                let filter = CategoryFilter::from_token(token);
                let needle = term.to_lowercase();

                let search_first: Vec<&Book> = catalog
                    .iter()
                    .filter(|b| matches_search(b, &needle))
                    .filter(|b| matches_category(b, &filter))
                    .collect();
                let category_first: Vec<&Book> = catalog
                    .iter()
                    .filter(|b| matches_category(b, &filter))
                    .filter(|b| matches_search(b, &needle))
                    .collect();

                assert_eq!(ids(&search_first), ids(&category_first));
                assert_eq!(ids(&search_first), ids(&visible(&catalog, term, &filter)));
            }
        }
    }
}
