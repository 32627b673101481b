//! Cart contents: item quantities keyed by product id.
//!
//! DESIGN
//! ======
//! The item list lives in a [`Persisted`] value, so every mutation is an
//! updater over the latest list followed by one store write. The list
//! transforms are plain functions over slices; `Cart` only wires them to
//! the persisted value.
//!
//! Invariants held by every reachable list:
//! - each id appears at most once,
//! - every quantity is at least 1 (reaching 0 removes the item),
//! - items keep the order in which their ids were first added.

#[cfg(test)]
#[path = "cart_test.rs"]
mod cart_test;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::config::{CartConfig, CorruptEntryPolicy, SyncMode};
use crate::error::CartError;
use crate::persisted::{PersistOptions, Persisted};
use crate::storage::KeyValueStore;

/// Product identifier as stored by the storefront.
pub type ItemId = i64;

/// One product line in the cart.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CartItem {
    pub id: ItemId,
    pub quantity: u32,
}

/// Persisted cart item list.
#[derive(Debug)]
pub struct Cart<S> {
    items: Persisted<Vec<CartItem>, S>,
}

impl<S: KeyValueStore> Cart<S> {
    /// Load the cart stored under `config.storage_key`, or start empty.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::Store`] when the store cannot be read or written,
    /// and, under [`CorruptEntryPolicy::Fail`], a malformed-entry error or
    /// [`CartError::InvalidEntry`] when the stored list breaks the item
    /// invariants.
    pub fn open(store: S, config: &CartConfig) -> Result<Self, CartError> {
        // Hold the write-back until the loaded list has been validated, so a
        // strict open that fails leaves the stored entry untouched.
        let options = PersistOptions { sync: SyncMode::Manual, ..PersistOptions::from(config) };
        let mut items: Persisted<Vec<CartItem>, S> =
            Persisted::open(store, config.storage_key.as_str(), Vec::new, options)?;

        if let Err(reason) = validate(items.get()) {
            match config.on_corrupt {
                CorruptEntryPolicy::Fail => {
                    return Err(CartError::InvalidEntry { key: config.storage_key.clone(), reason });
                }
                CorruptEntryPolicy::Reset => {
                    warn!(key = %config.storage_key, %reason, "discarding invalid stored cart");
                    items.set(Vec::new())?;
                }
            }
        }

        items.set_sync(config.sync)?;
        Ok(Self { items })
    }

    /// Items in the order they were first added.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        self.items.get()
    }

    /// Quantity of `id`, or 0 when it is not in the cart.
    #[must_use]
    pub fn quantity_of(&self, id: ItemId) -> u32 {
        quantity_of(self.items(), id)
    }

    /// Sum of all quantities, recomputed from the item list.
    #[must_use]
    pub fn total_quantity(&self) -> u64 {
        self.items().iter().map(|item| u64::from(item.quantity)).sum()
    }

    /// Add one of `id`, appending it when absent.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::QuantityOverflow`] without changing anything when
    /// `id` is already at `u32::MAX`, and the store error if the write fails
    /// (the change is kept in memory).
    pub fn increase(&mut self, id: ItemId) -> Result<(), CartError> {
        if self.quantity_of(id) == u32::MAX {
            return Err(CartError::QuantityOverflow { id });
        }
        Ok(self.items.update(|items| increased(items, id))?)
    }

    /// Remove one of `id`, dropping the item at 1. No-op when absent.
    ///
    /// # Errors
    ///
    /// Returns the store error if the write fails; the change is kept in memory.
    pub fn decrease(&mut self, id: ItemId) -> Result<(), CartError> {
        Ok(self.items.update(|items| decreased(items, id))?)
    }

    /// Drop `id` regardless of quantity. No-op when absent.
    ///
    /// # Errors
    ///
    /// Returns the store error if the write fails; the change is kept in memory.
    pub fn remove(&mut self, id: ItemId) -> Result<(), CartError> {
        Ok(self.items.update(|items| removed(items, id))?)
    }

    /// Write pending changes (manual sync, or after a failed write).
    ///
    /// # Errors
    ///
    /// Returns the store error if the write fails.
    pub fn flush(&mut self) -> Result<(), CartError> {
        Ok(self.items.flush()?)
    }

    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.items.is_dirty()
    }

    #[must_use]
    pub fn storage_key(&self) -> &str {
        self.items.key()
    }
}

// =============================================================================
// LIST TRANSFORMS
// =============================================================================

fn quantity_of(items: &[CartItem], id: ItemId) -> u32 {
    items.iter().find(|item| item.id == id).map_or(0, |item| item.quantity)
}

fn increased(items: &[CartItem], id: ItemId) -> Vec<CartItem> {
    if items.iter().all(|item| item.id != id) {
        let mut next = items.to_vec();
        next.push(CartItem { id, quantity: 1 });
        return next;
    }
    items
        .iter()
        .map(|item| if item.id == id { CartItem { quantity: item.quantity + 1, ..*item } } else { *item })
        .collect()
}

fn decreased(items: &[CartItem], id: ItemId) -> Vec<CartItem> {
    if quantity_of(items, id) == 1 {
        return removed(items, id);
    }
    items
        .iter()
        .map(|item| if item.id == id { CartItem { quantity: item.quantity - 1, ..*item } } else { *item })
        .collect()
}

fn removed(items: &[CartItem], id: ItemId) -> Vec<CartItem> {
    items.iter().filter(|item| item.id != id).copied().collect()
}

/// Check a loaded list against the item invariants.
fn validate(items: &[CartItem]) -> Result<(), String> {
    let mut seen = HashSet::with_capacity(items.len());
    for item in items {
        if item.quantity == 0 {
            return Err(format!("item {} has quantity 0", item.id));
        }
        if !seen.insert(item.id) {
            return Err(format!("item {} appears more than once", item.id));
        }
    }
    Ok(())
}
