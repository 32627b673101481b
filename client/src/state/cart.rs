//! Reactive cart handle for Leptos components.
//!
//! DESIGN
//! ======
//! `CartHandle` is `Copy`: the app root creates it once with
//! [`CartHandle::init`] and passes it down as a prop. Reads go through the
//! signal, so views that call `cart_quantity()` or `get_quantity()` re-render
//! when the cart changes.
//!
//! The signal uses local storage because the browser store handle is not
//! `Send`.
//!
//! ERROR HANDLING
//! ==============
//! Event handlers have nowhere to return an error to, so a failed store
//! write is logged. The in-memory cart keeps the change and the next
//! successful write catches the store up.

#[cfg(test)]
#[path = "cart_test.rs"]
mod cart_test;

use leptos::prelude::*;
use storefront_cart::{CartConfig, CartError, CartItem, ItemId, KeyValueStore, ShoppingCart};

use crate::util::page_store::{self, PageStore};

/// Shared cart state. The store defaults to the page's own store.
pub struct CartHandle<S = PageStore> {
    state: RwSignal<ShoppingCart<S>, LocalStorage>,
}

impl<S> Clone for CartHandle<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for CartHandle<S> {}

impl CartHandle {
    /// Load the cart for this page.
    ///
    /// # Errors
    ///
    /// Returns [`CartError`] when the page store is unavailable or the stored
    /// cart cannot be loaded under `config`.
    pub fn init(config: &CartConfig) -> Result<Self, CartError> {
        let store = page_store::open()?;
        Self::with_store(store, config)
    }
}

impl<S: KeyValueStore + 'static> CartHandle<S> {
    /// Load the cart from an explicit store.
    ///
    /// # Errors
    ///
    /// See [`ShoppingCart::open`].
    pub fn with_store(store: S, config: &CartConfig) -> Result<Self, CartError> {
        let cart = ShoppingCart::open(store, config)?;
        Ok(Self { state: RwSignal::new_local(cart) })
    }

    pub fn is_open(&self) -> bool {
        self.state.with(ShoppingCart::is_open)
    }

    pub fn open_panel(&self) {
        self.state.update(ShoppingCart::open_panel);
    }

    pub fn close_panel(&self) {
        self.state.update(ShoppingCart::close_panel);
    }

    pub fn cart_items(&self) -> Vec<CartItem> {
        self.state.with(|cart| cart.cart_items().to_vec())
    }

    pub fn cart_quantity(&self) -> u64 {
        self.state.with(ShoppingCart::cart_quantity)
    }

    pub fn get_quantity(&self, id: ItemId) -> u32 {
        self.state.with(|cart| cart.get_quantity(id))
    }

    pub fn increase_quantity(&self, id: ItemId) {
        self.mutate("increase", |cart| cart.increase_quantity(id));
    }

    pub fn decrease_quantity(&self, id: ItemId) {
        self.mutate("decrease", |cart| cart.decrease_quantity(id));
    }

    pub fn remove_item(&self, id: ItemId) {
        self.mutate("remove", |cart| cart.remove_item(id));
    }

    fn mutate(&self, op: &str, f: impl FnOnce(&mut ShoppingCart<S>) -> Result<(), CartError>) {
        self.state.update(|cart| {
            if let Err(e) = f(cart) {
                leptos::logging::warn!("cart {op} not persisted: {e}");
            }
        });
    }
}
