//! Typed key-value persistence for the storefront.
//!
//! The storefront keeps its client-side state (cart, orders, session,
//! preferences) in a flat key-value profile, one JSON value per fixed key.
//! This crate provides the persistence port ([`KeyValueStore`]), an in-memory
//! and a file-backed implementation, and the typed accessor ([`LocalStore`]).
//!
//! # Example
//!
//! ```rust,ignore
//! use shopfront_cache::{LocalStore, StorageKey};
//!
//! let store = LocalStore::open_file("profile.json")?;
//!
//! // Store a value
//! store.write(StorageKey::Theme, "dark")?;
//!
//! // Missing or corrupt values read as the default
//! let cart: Vec<CartItem> = store.read(StorageKey::Cart);
//!
//! // Delete a value
//! store.remove(StorageKey::UserSession)?;
//! ```

mod backend;
mod error;
mod key;
mod store;

pub use backend::{FileStore, KeyValueStore, MemoryStore};
pub use error::CacheError;
pub use key::StorageKey;
pub use store::LocalStore;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{CacheError, KeyValueStore, LocalStore, StorageKey};
}
