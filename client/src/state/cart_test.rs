#![cfg(not(feature = "hydrate"))]

use std::cell::Cell;
use std::rc::Rc;

use storefront_cart::{KeyValueStore, MemoryStore, StoreError};

use super::*;

/// Memory store whose writes can be switched off, like a full quota.
#[derive(Clone, Default)]
struct QuotaStore {
    inner: MemoryStore,
    full: Rc<Cell<bool>>,
}

impl KeyValueStore for QuotaStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.inner.get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        if self.full.get() {
            return Err(StoreError::Write { key: key.into(), reason: "quota exceeded".into() });
        }
        self.inner.set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<(), StoreError> {
        self.inner.remove_item(key)
    }
}

fn handle() -> (CartHandle<MemoryStore>, MemoryStore) {
    let store = MemoryStore::new();
    let cart = CartHandle::with_store(store.clone(), &CartConfig::default()).unwrap();
    (cart, store)
}

#[test]
fn init_starts_empty_and_closed() {
    let cart = CartHandle::init(&CartConfig::default()).unwrap();
    assert!(cart.cart_items().is_empty());
    assert_eq!(cart.cart_quantity(), 0);
    assert!(!cart.is_open());
}

#[test]
fn panel_toggles() {
    let (cart, _) = handle();
    cart.open_panel();
    assert!(cart.is_open());
    cart.close_panel();
    assert!(!cart.is_open());
}

#[test]
fn copies_share_one_cart() {
    let (cart, _) = handle();
    let other = cart;
    other.increase_quantity(5);
    other.increase_quantity(5);
    cart.increase_quantity(7);

    assert_eq!(cart.get_quantity(5), 2);
    assert_eq!(other.cart_items(), vec![CartItem { id: 5, quantity: 2 }, CartItem { id: 7, quantity: 1 }]);
    assert_eq!(cart.cart_quantity(), 3);
}

#[test]
fn mutations_reach_the_store() {
    let (cart, store) = handle();
    cart.increase_quantity(5);
    cart.decrease_quantity(5);
    cart.increase_quantity(2);
    cart.remove_item(99);

    assert_eq!(store.get_item("shopping-cart").unwrap().as_deref(), Some(r#"[{"id":2,"quantity":1}]"#));
}

#[test]
fn existing_store_contents_are_loaded() {
    let store = MemoryStore::new();
    store.set_item("shopping-cart", r#"[{"id":8,"quantity":3}]"#).unwrap();

    let cart = CartHandle::with_store(store, &CartConfig::default()).unwrap();
    assert_eq!(cart.get_quantity(8), 3);
}

#[test]
fn failed_write_keeps_change_until_store_recovers() {
    let store = QuotaStore::default();
    let cart = CartHandle::with_store(store.clone(), &CartConfig::default()).unwrap();
    cart.increase_quantity(5);
    let before = store.get_item("shopping-cart").unwrap();

    store.full.set(true);
    cart.increase_quantity(5);
    cart.increase_quantity(7);
    assert_eq!(cart.get_quantity(5), 2);
    assert_eq!(cart.cart_quantity(), 3);
    assert_eq!(store.get_item("shopping-cart").unwrap(), before);

    store.full.set(false);
    cart.remove_item(99);
    assert_eq!(
        store.get_item("shopping-cart").unwrap().as_deref(),
        Some(r#"[{"id":5,"quantity":2},{"id":7,"quantity":1}]"#)
    );
}
