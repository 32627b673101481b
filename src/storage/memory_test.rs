use super::*;

#[test]
fn missing_key_reads_as_none() {
    let store = MemoryStore::new();
    assert_eq!(store.get_item("shopping-cart").unwrap(), None);
    assert!(store.is_empty());
}

#[test]
fn set_then_get_returns_value() {
    let store = MemoryStore::new();
    store.set_item("k", "[1,2]").unwrap();
    assert_eq!(store.get_item("k").unwrap().as_deref(), Some("[1,2]"));
    assert_eq!(store.len(), 1);
}

#[test]
fn clones_share_entries_and_write_count() {
    let store = MemoryStore::new();
    let other = store.clone();
    other.set_item("k", "v").unwrap();

    assert_eq!(store.get_item("k").unwrap().as_deref(), Some("v"));
    assert_eq!(store.write_count(), 1);
}

#[test]
fn remove_absent_key_is_ok() {
    let store = MemoryStore::new();
    store.remove_item("nope").unwrap();
    store.set_item("k", "v").unwrap();
    store.remove_item("k").unwrap();
    assert_eq!(store.get_item("k").unwrap(), None);
    assert_eq!(store.write_count(), 3);
}
