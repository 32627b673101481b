//! Persistent string-keyed stores.
//!
//! DESIGN
//! ======
//! [`KeyValueStore`] mirrors the browser `Storage` surface (`getItem`,
//! `setItem`, `removeItem`) so the same cart code runs against
//! `localStorage` in the browser, a JSON file on native hosts, and an
//! in-memory map in tests and SSR.
//!
//! All methods take `&self`: backends are handles onto shared storage,
//! the way `web_sys::Storage` is.

pub mod file;
pub mod memory;
#[cfg(feature = "web-storage")]
pub mod web;

pub use file::FileStore;
pub use memory::MemoryStore;
#[cfg(feature = "web-storage")]
pub use web::WebStore;

use crate::error::StoreError;

/// A durable mapping from string keys to string values.
pub trait KeyValueStore {
    /// Return the value stored under `key`, or `None` when absent.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the backend cannot be read.
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the backend rejects the write.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Delete `key`. Removing an absent key succeeds.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the backend rejects the write.
    fn remove_item(&self, key: &str) -> Result<(), StoreError>;
}
