//! Typed value mirrored to one entry of a [`KeyValueStore`].
//!
//! DESIGN
//! ======
//! The value is read from the store once, at construction. After that the
//! in-memory copy is authoritative: `get()` never touches the store, and
//! every `set()`/`update()` replaces the value first and then writes it as
//! JSON under the same key.
//!
//! ERROR HANDLING
//! ==============
//! A failed write keeps the new value in memory and leaves it dirty; the
//! next successful write (or an explicit `flush()`) brings the store back in
//! line. Malformed entries follow [`CorruptEntryPolicy`].

#[cfg(test)]
#[path = "persisted_test.rs"]
mod persisted_test;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::{CartConfig, CorruptEntryPolicy, SyncMode};
use crate::error::StoreError;
use crate::storage::KeyValueStore;

/// Load and write-back behavior for a [`Persisted`] value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PersistOptions {
    pub on_corrupt: CorruptEntryPolicy,
    pub sync: SyncMode,
}

impl From<&CartConfig> for PersistOptions {
    fn from(config: &CartConfig) -> Self {
        Self { on_corrupt: config.on_corrupt, sync: config.sync }
    }
}

/// A value of type `T` kept in sync with `store[key]`.
#[derive(Debug)]
pub struct Persisted<T, S> {
    store: S,
    key: String,
    value: T,
    sync: SyncMode,
    dirty: bool,
}

impl<T, S> Persisted<T, S>
where
    T: Serialize + DeserializeOwned,
    S: KeyValueStore,
{
    /// Load `key`, falling back to the literal `initial` when absent.
    ///
    /// # Errors
    ///
    /// See [`Persisted::open`].
    pub fn new(store: S, key: impl Into<String>, initial: T) -> Result<Self, StoreError> {
        Self::open(store, key, || initial, PersistOptions::default())
    }

    /// Load `key`, calling `produce` once when absent.
    ///
    /// # Errors
    ///
    /// See [`Persisted::open`].
    pub fn new_with(store: S, key: impl Into<String>, produce: impl FnOnce() -> T) -> Result<Self, StoreError> {
        Self::open(store, key, produce, PersistOptions::default())
    }

    /// Load `key` with explicit options.
    ///
    /// `produce` runs at most once, only when the entry is absent or was
    /// discarded as malformed. The resulting value is written back once
    /// (immediately, or on the first `flush()` in manual mode).
    ///
    /// # Errors
    ///
    /// Returns the backend error if the entry cannot be read or the initial
    /// write-back fails, and [`StoreError::Malformed`] for an unparsable
    /// entry under [`CorruptEntryPolicy::Fail`].
    pub fn open(
        store: S,
        key: impl Into<String>,
        produce: impl FnOnce() -> T,
        options: PersistOptions,
    ) -> Result<Self, StoreError> {
        let key = key.into();
        let value = match store.get_item(&key)? {
            Some(raw) => match serde_json::from_str::<T>(&raw) {
                Ok(value) => {
                    debug!(%key, bytes = raw.len(), "loaded persisted value");
                    value
                }
                Err(source) => match options.on_corrupt {
                    CorruptEntryPolicy::Fail => return Err(StoreError::Malformed { key, source }),
                    CorruptEntryPolicy::Reset => {
                        warn!(%key, error = %source, "discarding malformed persisted value");
                        produce()
                    }
                },
            },
            None => produce(),
        };

        let mut this = Self { store, key, value, sync: options.sync, dirty: true };
        this.sync_if_immediate()?;
        Ok(this)
    }

    /// Current in-memory value. No I/O.
    #[must_use]
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Replace the value and write it back.
    ///
    /// # Errors
    ///
    /// Returns the encode or backend error; the new value is kept in memory
    /// either way.
    pub fn set(&mut self, value: T) -> Result<(), StoreError> {
        self.value = value;
        self.dirty = true;
        self.sync_if_immediate()
    }

    /// Replace the value with `f(current)` and write it back.
    ///
    /// # Errors
    ///
    /// Same as [`Persisted::set`].
    pub fn update(&mut self, f: impl FnOnce(&T) -> T) -> Result<(), StoreError> {
        let next = f(&self.value);
        self.set(next)
    }

    /// Write the value now if it has unwritten changes.
    ///
    /// # Errors
    ///
    /// Returns the encode or backend error and stays dirty.
    pub fn flush(&mut self) -> Result<(), StoreError> {
        if !self.dirty {
            return Ok(());
        }
        let raw = serde_json::to_string(&self.value).map_err(StoreError::Encode)?;
        self.store.set_item(&self.key, &raw)?;
        self.dirty = false;
        debug!(key = %self.key, bytes = raw.len(), "persisted value written");
        Ok(())
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Whether the in-memory value has changes the store has not seen.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Switch sync mode. Moving to immediate writes any pending change.
    ///
    /// # Errors
    ///
    /// Same as [`Persisted::flush`].
    pub(crate) fn set_sync(&mut self, sync: SyncMode) -> Result<(), StoreError> {
        self.sync = sync;
        self.sync_if_immediate()
    }

    fn sync_if_immediate(&mut self) -> Result<(), StoreError> {
        match self.sync {
            SyncMode::Immediate => self.flush(),
            SyncMode::Manual => Ok(()),
        }
    }
}
