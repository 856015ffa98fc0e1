//! Coordinates the catalog and account services for a single embedding
//! application.
//!
//! Each service sits behind its own mutex, held for the duration of one call.
//! When both are needed the catalog is locked first.

use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard};

use super::books::models::SharedBook;
use super::books::service::CatalogService;
use super::users::models::SharedUser;
use super::users::service::AccountService;

#[derive(Clone, Default)]
pub struct Storefront {
    catalog: Arc<Mutex<CatalogService>>,
    accounts: Arc<Mutex<AccountService>>,
}

impl Storefront {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap pre-built services.
    pub fn with_services(catalog: CatalogService, accounts: AccountService) -> Self {
        Self {
            catalog: Arc::new(Mutex::new(catalog)),
            accounts: Arc::new(Mutex::new(accounts)),
        }
    }

    pub fn catalog(&self) -> MutexGuard<'_, CatalogService> {
        self.catalog.lock()
    }

    pub fn accounts(&self) -> MutexGuard<'_, AccountService> {
        self.accounts.lock()
    }

    pub(crate) fn catalog_handle(&self) -> Arc<Mutex<CatalogService>> {
        Arc::clone(&self.catalog)
    }

    pub(crate) fn accounts_handle(&self) -> Arc<Mutex<AccountService>> {
        Arc::clone(&self.accounts)
    }

    /// Confirm `book` with the catalog, then add the catalog's copy to the
    /// user's purchases.
    pub fn checkout(&self, user: &SharedUser, book: &SharedBook) -> bool {
        let listed = {
            let catalog = self.catalog.lock();
            if !catalog.purchase(user, Some(book)) {
                return false;
            }
            catalog.listing(book)
        };

        match listed {
            Some(listed) => {
                user.record_purchase(listed);
                tracing::info!(user = %user.username(), title = %book.title(), "checkout complete");
                true
            }
            None => false,
        }
    }

    pub fn review(&self, user: &SharedUser, book: &SharedBook, review: &str) -> bool {
        self.catalog.lock().add_review(user, book, review)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::books::models::Book;
    use crate::modules::users::models::User;

    fn dune() -> SharedBook {
        SharedBook::new(Book::new("Dune", "Herbert", "SciFi", 9.99))
    }

    fn storefront_with_dune() -> Storefront {
        Storefront::with_services(
            CatalogService::with_books(vec![dune()]),
            AccountService::new(),
        )
    }

    #[test]
    fn checkout_then_review_is_visible_from_catalog() {
        let store = storefront_with_dune();
        let alice = SharedUser::new(User::new("alice", "pw1", "a@x.com"));
        assert!(store.accounts().register(alice.clone()));

        let wanted = dune();
        assert!(store.checkout(&alice, &wanted));
        assert!(alice.purchased_books()[0].same_book(&store.catalog().books()[0]));

        let owned = alice.purchased_books()[0].clone();
        assert!(store.review(&alice, &owned, "spice must flow"));

        let hits = store.catalog().search("Dune");
        assert_eq!(hits[0].reviews(), vec!["spice must flow".to_string()]);
    }

    #[test]
    fn checkout_of_unlisted_book_records_nothing() {
        let store = Storefront::new();
        let alice = SharedUser::new(User::new("alice", "pw1", "a@x.com"));

        assert!(!store.checkout(&alice, &dune()));
        assert!(alice.purchased_books().is_empty());
    }

    #[test]
    fn review_without_checkout_is_rejected() {
        let store = storefront_with_dune();
        let alice = SharedUser::new(User::new("alice", "pw1", "a@x.com"));

        let listed = store.catalog().books()[0].clone();
        assert!(!store.review(&alice, &listed, "never read it"));
        assert!(listed.reviews().is_empty());
    }

    #[test]
    fn clones_share_services() {
        let store = Storefront::new();
        let other = store.clone();

        assert!(other.catalog().add_book(Some(&dune())));
        assert_eq!(store.catalog().len(), 1);
    }
}
