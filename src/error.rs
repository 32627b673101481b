//! Error types for storage backends and the cart container.
//!
//! ERROR HANDLING
//! ==============
//! Backends report failures as [`StoreError`]; the cart wraps them in
//! [`CartError`] alongside its own load-time validation failures. A failed
//! write never rolls back the in-memory value, so callers can retry with
//! `flush()` once the backend recovers.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure talking to a persistent key-value store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The backing store does not exist in this environment (no window,
    /// storage disabled by the browser, etc.).
    #[error("persistent storage is not available")]
    Unavailable,
    /// The backend refused to read `key`.
    #[error("failed to read `{key}`: {reason}")]
    Read { key: String, reason: String },
    /// The backend refused to write `key` (quota exceeded, private mode, ...).
    #[error("failed to write `{key}`: {reason}")]
    Write { key: String, reason: String },
    /// Filesystem failure in the file-backed store.
    #[error("storage file I/O failed: {0}")]
    Io(#[from] std::io::Error),
    /// The in-memory value could not be serialized.
    #[error("failed to encode value: {0}")]
    Encode(serde_json::Error),
    /// An entry exists under `key` but is not valid JSON for the expected type.
    #[error("stored entry `{key}` is malformed: {source}")]
    Malformed {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Failure surfaced by cart operations.
#[derive(Debug, thiserror::Error)]
pub enum CartError {
    #[error(transparent)]
    Store(#[from] StoreError),
    /// The stored list parsed but breaks the item invariants.
    #[error("stored cart `{key}` is invalid: {reason}")]
    InvalidEntry { key: String, reason: String },
    /// The item is already at the largest representable quantity.
    #[error("item {id} is already at the maximum quantity")]
    QuantityOverflow { id: crate::cart::ItemId },
}
