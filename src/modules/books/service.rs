use bookstore_kernel::settings::BookSeed;

use super::models::{Book, SharedBook};
use crate::modules::error::SeedError;
use crate::modules::users::models::SharedUser;

/// Ordered, duplicate-free collection of books.
///
/// Not synchronized; wrap it in a lock when more than one caller needs it.
#[derive(Debug, Default)]
pub struct CatalogService {
    books: Vec<SharedBook>,
}

impl CatalogService {
    /// Empty catalog.
    pub fn new() -> Self {
        Self { books: Vec::new() }
    }

    /// Take over an existing collection as-is.
    pub fn with_books(books: Vec<SharedBook>) -> Self {
        Self { books }
    }

    /// Build a catalog from configured entries, refusing duplicates.
    pub fn from_seed(seed: &[BookSeed]) -> Result<Self, SeedError> {
        let mut catalog = Self::new();
        for entry in seed {
            let book = SharedBook::new(Book::from(entry));
            if !catalog.add_book(Some(&book)) {
                return Err(SeedError::DuplicateBook {
                    title: entry.title.clone(),
                });
            }
        }
        Ok(catalog)
    }

    /// Every listed book, in insertion order.
    pub fn books(&self) -> &[SharedBook] {
        &self.books
    }

    /// Number of listed books.
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Whether nothing is listed.
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// First book whose title is exactly `title`.
    pub fn find_by_title(&self, title: &str) -> Option<SharedBook> {
        self.books.iter().find(|book| book.title() == title).cloned()
    }

    /// The catalog's own handle for a book equal to `book`.
    pub fn listing(&self, book: &SharedBook) -> Option<SharedBook> {
        self.books.iter().find(|entry| *entry == book).cloned()
    }

    fn contains(&self, book: &SharedBook) -> bool {
        self.books.iter().any(|entry| entry == book)
    }

    /// Books whose title, author, or genre contains `keyword`, in catalog order.
    /// An empty keyword matches everything.
    pub fn search(&self, keyword: &str) -> Vec<SharedBook> {
        let hits: Vec<SharedBook> = self
            .books
            .iter()
            .filter(|book| book.matches(keyword))
            .cloned()
            .collect();

        tracing::debug!(keyword, hits = hits.len(), "catalog search");
        hits
    }

    /// Whether `book` can be bought, i.e. is in the catalog.
    ///
    /// Nothing is recorded on the user; the caller does that after a `true`.
    pub fn purchase(&self, user: &SharedUser, book: Option<&SharedBook>) -> bool {
        let Some(book) = book else {
            tracing::debug!(user = %user.username(), "purchase without a book");
            return false;
        };

        let available = self.contains(book);
        tracing::debug!(
            user = %user.username(),
            title = %book.title(),
            available,
            "purchase check"
        );
        available
    }

    /// Append `review` to `book` if `user` bought an equal book.
    pub fn add_review(&self, user: &SharedUser, book: &SharedBook, review: &str) -> bool {
        if !user.has_purchased(book) {
            tracing::debug!(
                user = %user.username(),
                title = %book.title(),
                "review rejected: book not purchased"
            );
            return false;
        }

        book.push_review(review);
        tracing::info!(user = %user.username(), title = %book.title(), "review added");
        true
    }

    /// Append `book` unless an equal one is already listed.
    pub fn add_book(&mut self, book: Option<&SharedBook>) -> bool {
        let Some(book) = book else {
            return false;
        };

        if self.contains(book) {
            tracing::debug!(title = %book.title(), "book already in catalog");
            return false;
        }

        self.books.push(book.clone());
        tracing::info!(title = %book.title(), size = self.books.len(), "book added");
        true
    }

    /// Remove the first book equal to `book`.
    pub fn remove_book(&mut self, book: Option<&SharedBook>) -> bool {
        let Some(book) = book else {
            return false;
        };

        match self.books.iter().position(|entry| entry == book) {
            Some(index) => {
                self.books.remove(index);
                tracing::info!(title = %book.title(), size = self.books.len(), "book removed");
                true
            }
            None => {
                tracing::debug!(title = %book.title(), "book not in catalog");
                false
            }
        }
    }
}
