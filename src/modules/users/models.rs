use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;
use serde::Serialize;

use crate::modules::books::models::SharedBook;

/// A registered customer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct User {
    /// Key in the account map
    pub username: String,
    /// Compared as plain text
    #[serde(skip_serializing)]
    pub password: String,
    pub email: String,
    /// Books this user bought, oldest first
    pub purchased_books: Vec<SharedBook>,
}

impl User {
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            email: email.into(),
            purchased_books: Vec::new(),
        }
    }

    pub fn with_purchases(mut self, purchased_books: Vec<SharedBook>) -> Self {
        self.purchased_books = purchased_books;
        self
    }

    /// Value membership check against the purchase history.
    pub fn has_purchased(&self, book: &SharedBook) -> bool {
        self.purchased_books.iter().any(|owned| owned == book)
    }
}

/// Shared handle to a [`User`]; the account map and callers hold the same user.
#[derive(Clone)]
pub struct SharedUser(Arc<RwLock<User>>);

impl SharedUser {
    pub fn new(user: User) -> Self {
        Self(Arc::new(RwLock::new(user)))
    }

    pub fn username(&self) -> String {
        self.0.read().username.clone()
    }

    pub fn email(&self) -> String {
        self.0.read().email.clone()
    }

    pub fn password_matches(&self, password: &str) -> bool {
        self.0.read().password == password
    }

    pub fn purchased_books(&self) -> Vec<SharedBook> {
        self.0.read().purchased_books.clone()
    }

    pub fn has_purchased(&self, book: &SharedBook) -> bool {
        self.0.read().has_purchased(book)
    }

    /// Append a book handle to the purchase history.
    pub fn record_purchase(&self, book: SharedBook) {
        self.0.write().purchased_books.push(book);
    }

    /// Overwrite the profile fields in place.
    pub(crate) fn set_profile(&self, username: &str, password: &str, email: &str) {
        let mut user = self.0.write();
        user.username = username.to_string();
        user.password = password.to_string();
        user.email = email.to_string();
    }

    /// Whether both handles point at the same account.
    pub fn same_user(&self, other: &SharedUser) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    pub fn snapshot(&self) -> User {
        self.0.read().clone()
    }
}

impl From<User> for SharedUser {
    fn from(user: User) -> Self {
        SharedUser::new(user)
    }
}

impl fmt::Debug for SharedUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let user = self.0.read();
        f.debug_struct("SharedUser")
            .field("username", &user.username)
            .field("email", &user.email)
            .field("purchased_books", &user.purchased_books.len())
            .finish()
    }
}
