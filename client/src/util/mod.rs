//! Browser/environment helpers kept out of state modules.

pub mod page_store;
