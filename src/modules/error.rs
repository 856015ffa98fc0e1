//! Errors raised while building services from configured seed data.
//!
//! Service operations themselves never fail; they answer `false` or `None`.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SeedError {
    #[error("catalog seed lists '{title}' more than once")]
    DuplicateBook { title: String },

    #[error("account seed lists username '{username}' more than once")]
    DuplicateUsername { username: String },

    #[error("user '{username}' purchased '{title}', which is not in the catalog")]
    UnknownPurchase { username: String, title: String },
}
