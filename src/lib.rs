//! # storefront-cart
//!
//! Client-side shopping-cart state for a web storefront: item quantities
//! keyed by product id, mirrored to a persistent string-keyed store so the
//! cart survives page reloads, plus the cart panel's open/closed flag.
//!
//! Layers, leaf first:
//! - [`storage`]: the key-value store seam (memory, JSON file, browser
//!   `localStorage` behind the `web-storage` feature).
//! - [`persisted`]: a typed value synchronized with one store entry.
//! - [`cart`]: the item list and its mutation rules.
//! - [`shopping_cart`]: the UI-facing surface combining cart and panel.

pub mod cart;
pub mod config;
pub mod error;
pub mod persisted;
pub mod shopping_cart;
pub mod storage;
pub mod ui;

pub use cart::{Cart, CartItem, ItemId};
pub use config::{CartConfig, CorruptEntryPolicy, DEFAULT_STORAGE_KEY, SyncMode};
pub use error::{CartError, StoreError};
pub use persisted::{PersistOptions, Persisted};
pub use shopping_cart::ShoppingCart;
pub use storage::{FileStore, KeyValueStore, MemoryStore};
#[cfg(feature = "web-storage")]
pub use storage::WebStore;
pub use ui::PanelState;
