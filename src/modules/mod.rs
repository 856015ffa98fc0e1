pub mod books;
pub mod error;
pub mod storefront;
pub mod users;

use bookstore_kernel::ModuleRegistry;

pub use error::SeedError;
pub use storefront::Storefront;

/// Register the bookstore modules with the registry.
///
/// Books goes first: user seeds resolve their purchases against the catalog.
pub fn register_all(registry: &mut ModuleRegistry, storefront: &Storefront) {
    registry.register_custom(books::create_module(storefront.catalog_handle()));
    registry.register_custom(users::create_module(
        storefront.accounts_handle(),
        storefront.catalog_handle(),
    ));
}
