//! Store selection for the current page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Hydrated pages persist to `window.localStorage`. SSR and native test
//! builds have no browser, so they get a fresh in-memory store instead.

#[cfg(test)]
#[path = "page_store_test.rs"]
mod page_store_test;

use storefront_cart::StoreError;

#[cfg(feature = "hydrate")]
pub type PageStore = storefront_cart::WebStore;
#[cfg(not(feature = "hydrate"))]
pub type PageStore = storefront_cart::MemoryStore;

/// Open the store the cart should persist to on this page.
///
/// # Errors
///
/// Returns [`StoreError::Unavailable`] when a hydrated page has no usable
/// `localStorage`.
pub fn open() -> Result<PageStore, StoreError> {
    #[cfg(feature = "hydrate")]
    {
        storefront_cart::WebStore::local()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Ok(storefront_cart::MemoryStore::new())
    }
}
