use std::fmt;
use std::sync::Arc;

use bookstore_kernel::settings::BookSeed;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

/// A catalog entry. Equality compares every field, reviews included.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Book {
    /// Title of the book
    pub title: String,
    /// Author of the book
    pub author: String,
    /// Genre label, free text
    pub genre: String,
    /// Listed price
    pub price: f64,
    /// Reviews in the order they were written
    #[serde(default)]
    pub reviews: Vec<String>,
}

impl Book {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        genre: impl Into<String>,
        price: f64,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            genre: genre.into(),
            price,
            reviews: Vec::new(),
        }
    }

    pub fn with_reviews(mut self, reviews: Vec<String>) -> Self {
        self.reviews = reviews;
        self
    }

    /// True when title, author, or genre contains `keyword` (case-sensitive).
    pub fn matches(&self, keyword: &str) -> bool {
        self.title.contains(keyword)
            || self.author.contains(keyword)
            || self.genre.contains(keyword)
    }
}

/// Prices compare by bit pattern, so a NaN-priced book still equals its copy.
impl PartialEq for Book {
    fn eq(&self, other: &Self) -> bool {
        self.title == other.title
            && self.author == other.author
            && self.genre == other.genre
            && self.price.to_bits() == other.price.to_bits()
            && self.reviews == other.reviews
    }
}

impl From<&BookSeed> for Book {
    fn from(seed: &BookSeed) -> Self {
        Book::new(&seed.title, &seed.author, &seed.genre, seed.price)
            .with_reviews(seed.reviews.clone())
    }
}

/// Shared handle to a [`Book`].
///
/// Cloning the handle does not copy the book: the catalog and every user who
/// bought it see the same reviews. Two handles compare equal when the books
/// they point at are equal by value at the time of the comparison.
#[derive(Clone)]
pub struct SharedBook(Arc<RwLock<Book>>);

impl SharedBook {
    pub fn new(book: Book) -> Self {
        Self(Arc::new(RwLock::new(book)))
    }

    /// Copy of the current state.
    pub fn snapshot(&self) -> Book {
        self.0.read().clone()
    }

    pub fn title(&self) -> String {
        self.0.read().title.clone()
    }

    pub fn reviews(&self) -> Vec<String> {
        self.0.read().reviews.clone()
    }

    pub fn matches(&self, keyword: &str) -> bool {
        self.0.read().matches(keyword)
    }

    /// Reviews only grow; there is no way to take one back.
    pub(crate) fn push_review(&self, review: &str) {
        self.0.write().reviews.push(review.to_string());
    }

    /// Whether both handles point at the same book, not just an equal one.
    pub fn same_book(&self, other: &SharedBook) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl From<Book> for SharedBook {
    fn from(book: Book) -> Self {
        SharedBook::new(book)
    }
}

impl PartialEq for SharedBook {
    fn eq(&self, other: &Self) -> bool {
        if self.same_book(other) {
            return true;
        }
        *self.0.read() == *other.0.read()
    }
}

impl PartialEq<Book> for SharedBook {
    fn eq(&self, other: &Book) -> bool {
        *self.0.read() == *other
    }
}

impl fmt::Debug for SharedBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0.read(), f)
    }
}

impl Serialize for SharedBook {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.read().serialize(serializer)
    }
}
