//! Default catalog written on first run.

use folio_core::{new_book_id, Book, Money};

struct SeedBook {
    title: &'static str,
    author: &'static str,
    price_cents: i64,
    category: &'static str,
    image: &'static str,
}

const DEFAULT_BOOKS: [SeedBook; 5] = [
    SeedBook {
        title: "The Great Gatsby",
        author: "F. Scott Fitzgerald",
        price_cents: 1299,
        category: "Fiction",
        image: "https://images.unsplash.com/photo-1544947950-fa07a98d237f?auto=format&fit=crop&q=80&w=800",
    },
    SeedBook {
        title: "Atomic Habits",
        author: "James Clear",
        price_cents: 2450,
        category: "non-fiction",
        image: "https://images.unsplash.com/photo-1589829085413-56de8ae18c73?auto=format&fit=crop&q=80&w=800",
    },
    SeedBook {
        title: "The Alchemist",
        author: "Paulo Coelho",
        price_cents: 1500,
        category: "Fiction",
        image: "https://images.unsplash.com/photo-1543002588-bfa74002ed7e?auto=format&fit=crop&q=80&w=800",
    },
    SeedBook {
        title: "Steve Jobs",
        author: "Walter Isaacson",
        price_cents: 1899,
        category: "biography",
        image: "https://images.unsplash.com/photo-1531297461136-82lwDe43?auto=format&fit=crop&q=80&w=800",
    },
    SeedBook {
        title: "Dune",
        author: "Frank Herbert",
        price_cents: 1499,
        category: "sci-fi",
        image: "https://images.unsplash.com/photo-1541963463532-d68292c34b19?auto=format&fit=crop&q=80&w=800",
    },
];

/// The five starter books, each with a fresh id.
pub fn default_books() -> Vec<Book> {
    DEFAULT_BOOKS
        .iter()
        .map(|seed| Book {
            id: new_book_id(),
            title: seed.title.to_string(),
            author: seed.author.to_string(),
            price: Money::from_cents(seed.price_cents),
            category: Some(seed.category.to_string()),
            image: Some(seed.image.to_string()),
        })
        .collect()
}
