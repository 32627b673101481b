//! # client
//!
//! Leptos bindings for the storefront cart. The application root builds one
//! [`state::cart::CartHandle`] at startup and passes it to every component
//! that reads or edits the cart.
//!
//! With the `hydrate` feature the cart lives in the browser's
//! `localStorage`; otherwise (SSR, native tests) it lives in memory.

pub mod state;
pub mod util;
