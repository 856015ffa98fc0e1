//! In-memory bookstore: a book catalog and a user account registry.
//!
//! Both services answer business-rule failures with `false` or `None`; only
//! seeding from configuration can fail with an error.

pub mod modules;
pub mod utils;

/// Re-export commonly used types
pub use modules::books::models::{Book, SharedBook};
pub use modules::books::service::CatalogService;
pub use modules::users::models::{SharedUser, User};
pub use modules::users::service::AccountService;
pub use modules::*;
