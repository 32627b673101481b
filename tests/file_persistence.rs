//! End-to-end cart persistence through the JSON file store.

use storefront_cart::{CartConfig, CartItem, CorruptEntryPolicy, FileStore, KeyValueStore, ShoppingCart, SyncMode};

fn open(path: &std::path::Path, config: &CartConfig) -> ShoppingCart<FileStore> {
    ShoppingCart::open(FileStore::new(path), config).unwrap()
}

#[test]
fn cart_survives_process_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cart.json");
    let config = CartConfig::default();

    {
        let mut cart = open(&path, &config);
        cart.increase_quantity(5).unwrap();
        cart.increase_quantity(5).unwrap();
        cart.increase_quantity(7).unwrap();
        cart.open_panel();
    }

    let cart = open(&path, &config);
    assert_eq!(cart.cart_items(), &[CartItem { id: 5, quantity: 2 }, CartItem { id: 7, quantity: 1 }]);
    assert_eq!(cart.cart_quantity(), 3);
    assert!(!cart.is_open());
}

#[test]
fn file_holds_storefront_wire_format() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cart.json");

    let mut cart = open(&path, &CartConfig::default());
    cart.increase_quantity(3).unwrap();

    let raw = FileStore::new(&path).get_item("shopping-cart").unwrap();
    assert_eq!(raw.as_deref(), Some(r#"[{"id":3,"quantity":1}]"#));
}

#[test]
fn manual_sync_leaves_file_untouched_until_flush() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cart.json");
    let config = CartConfig::default().with_sync(SyncMode::Manual);

    let mut cart = open(&path, &config);
    cart.increase_quantity(1).unwrap();
    assert!(!path.exists());

    cart.flush().unwrap();
    let reopened = open(&path, &CartConfig::default());
    assert_eq!(reopened.get_quantity(1), 1);
}

#[test]
fn corrupt_entry_policy_applies_to_file_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cart.json");
    FileStore::new(&path).set_item("shopping-cart", "[{").unwrap();

    let strict = CartConfig::default().with_corrupt_policy(CorruptEntryPolicy::Fail);
    assert!(ShoppingCart::open(FileStore::new(&path), &strict).is_err());

    let cart = open(&path, &CartConfig::default());
    assert!(cart.cart_items().is_empty());
    assert_eq!(FileStore::new(&path).get_item("shopping-cart").unwrap().as_deref(), Some("[]"));
}
