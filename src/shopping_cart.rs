//! UI-facing cart surface.
//!
//! DESIGN
//! ======
//! `ShoppingCart` is built once at application start and handed to every
//! consumer by reference (or wrapped in a reactive handle by the UI layer).
//! It pairs the persisted [`Cart`] with the session-only panel flag and is
//! the only place UI code mutates cart contents.

#[cfg(test)]
#[path = "shopping_cart_test.rs"]
mod shopping_cart_test;

use tracing::debug;

use crate::cart::{Cart, CartItem, ItemId};
use crate::config::CartConfig;
use crate::error::CartError;
use crate::storage::KeyValueStore;
use crate::ui::PanelState;

#[derive(Debug)]
pub struct ShoppingCart<S> {
    cart: Cart<S>,
    panel: PanelState,
}

impl<S: KeyValueStore> ShoppingCart<S> {
    /// Load the cart from `store` with the panel closed.
    ///
    /// # Errors
    ///
    /// See [`Cart::open`].
    pub fn open(store: S, config: &CartConfig) -> Result<Self, CartError> {
        let cart = Cart::open(store, config)?;
        debug!(key = cart.storage_key(), items = cart.items().len(), "shopping cart ready");
        Ok(Self { cart, panel: PanelState::Closed })
    }

    pub fn open_panel(&mut self) {
        self.panel = PanelState::Open;
    }

    pub fn close_panel(&mut self) {
        self.panel = PanelState::Closed;
    }

    #[must_use]
    pub fn panel(&self) -> PanelState {
        self.panel
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.panel.is_open()
    }

    #[must_use]
    pub fn cart_items(&self) -> &[CartItem] {
        self.cart.items()
    }

    /// Total units across all items.
    #[must_use]
    pub fn cart_quantity(&self) -> u64 {
        self.cart.total_quantity()
    }

    #[must_use]
    pub fn get_quantity(&self, id: ItemId) -> u32 {
        self.cart.quantity_of(id)
    }

    /// # Errors
    ///
    /// Returns the store error if the write fails.
    pub fn increase_quantity(&mut self, id: ItemId) -> Result<(), CartError> {
        self.cart.increase(id)
    }

    /// # Errors
    ///
    /// Returns the store error if the write fails.
    pub fn decrease_quantity(&mut self, id: ItemId) -> Result<(), CartError> {
        self.cart.decrease(id)
    }

    /// # Errors
    ///
    /// Returns the store error if the write fails.
    pub fn remove_item(&mut self, id: ItemId) -> Result<(), CartError> {
        self.cart.remove(id)
    }

    /// # Errors
    ///
    /// Returns the store error if the write fails.
    pub fn flush(&mut self) -> Result<(), CartError> {
        self.cart.flush()
    }
}
