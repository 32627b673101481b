//! Browser `localStorage` backend.
//!
//! Requires a browser environment; only compiled with the `web-storage`
//! feature.

use super::KeyValueStore;
use crate::error::StoreError;

/// Handle onto `window.localStorage`.
#[derive(Clone, Debug)]
pub struct WebStore {
    storage: web_sys::Storage,
}

impl WebStore {
    /// Open the page's `localStorage`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] when there is no window or the
    /// browser has storage disabled.
    pub fn local() -> Result<Self, StoreError> {
        let window = web_sys::window().ok_or(StoreError::Unavailable)?;
        let Ok(Some(storage)) = window.local_storage() else {
            return Err(StoreError::Unavailable);
        };
        Ok(Self { storage })
    }
}

impl KeyValueStore for WebStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.storage
            .get_item(key)
            .map_err(|e| StoreError::Read { key: key.to_owned(), reason: format!("{e:?}") })
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.storage
            .set_item(key, value)
            .map_err(|e| StoreError::Write { key: key.to_owned(), reason: format!("{e:?}") })
    }

    fn remove_item(&self, key: &str) -> Result<(), StoreError> {
        self.storage
            .remove_item(key)
            .map_err(|e| StoreError::Write { key: key.to_owned(), reason: format!("{e:?}") })
    }
}
