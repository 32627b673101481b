//! Cart configuration.
//!
//! Defaults reproduce the storefront's behavior: the `shopping-cart` key,
//! a write on every change, and a reset to an empty cart when the stored
//! entry cannot be read back.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

pub const DEFAULT_STORAGE_KEY: &str = "shopping-cart";

/// What to do when an entry exists but does not deserialize.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CorruptEntryPolicy {
    /// Log a warning, fall back to the initial value, and overwrite the entry.
    #[default]
    Reset,
    /// Fail construction with the parse error.
    Fail,
}

/// When in-memory changes reach the store.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SyncMode {
    /// One store write per change.
    #[default]
    Immediate,
    /// Changes mark the value dirty; `flush()` writes it.
    Manual,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CartConfig {
    pub storage_key: String,
    pub on_corrupt: CorruptEntryPolicy,
    pub sync: SyncMode,
}

impl Default for CartConfig {
    fn default() -> Self {
        Self { storage_key: DEFAULT_STORAGE_KEY.to_owned(), on_corrupt: CorruptEntryPolicy::Reset, sync: SyncMode::Immediate }
    }
}

impl CartConfig {
    /// Parse config from a JSON document. Missing fields take defaults.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error for malformed JSON or unknown enum values.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    #[must_use]
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    #[must_use]
    pub fn with_corrupt_policy(mut self, policy: CorruptEntryPolicy) -> Self {
        self.on_corrupt = policy;
        self
    }

    #[must_use]
    pub fn with_sync(mut self, sync: SyncMode) -> Self {
        self.sync = sync;
        self
    }
}
