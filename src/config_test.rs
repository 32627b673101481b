use super::*;

#[test]
fn default_matches_storefront_behavior() {
    let cfg = CartConfig::default();
    assert_eq!(cfg.storage_key, "shopping-cart");
    assert_eq!(cfg.on_corrupt, CorruptEntryPolicy::Reset);
    assert_eq!(cfg.sync, SyncMode::Immediate);
}

#[test]
fn from_json_fills_missing_fields_with_defaults() {
    let cfg = CartConfig::from_json(r#"{"storage_key":"guest-cart"}"#).unwrap();
    assert_eq!(cfg.storage_key, "guest-cart");
    assert_eq!(cfg.on_corrupt, CorruptEntryPolicy::Reset);
    assert_eq!(cfg.sync, SyncMode::Immediate);
}

#[test]
fn from_json_parses_snake_case_enums() {
    let cfg = CartConfig::from_json(r#"{"on_corrupt":"fail","sync":"manual"}"#).unwrap();
    assert_eq!(cfg.storage_key, DEFAULT_STORAGE_KEY);
    assert_eq!(cfg.on_corrupt, CorruptEntryPolicy::Fail);
    assert_eq!(cfg.sync, SyncMode::Manual);
}

#[test]
fn from_json_rejects_unknown_policy() {
    assert!(CartConfig::from_json(r#"{"on_corrupt":"ignore"}"#).is_err());
}

#[test]
fn builders_override_fields() {
    let cfg = CartConfig::default()
        .with_storage_key("k")
        .with_corrupt_policy(CorruptEntryPolicy::Fail)
        .with_sync(SyncMode::Manual);
    assert_eq!(cfg, CartConfig { storage_key: "k".into(), on_corrupt: CorruptEntryPolicy::Fail, sync: SyncMode::Manual });
}
