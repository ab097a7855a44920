//! Typed accessor over a storage backend.

use crate::backend::{FileStore, KeyValueStore, MemoryStore};
use crate::{CacheError, StorageKey};
use serde::{de::DeserializeOwned, Serialize};
use std::path::Path;
use std::sync::Arc;

/// Typed, JSON-encoded access to the browser profile.
///
/// Reads never fail from the caller's point of view: a missing key or a value
/// that no longer parses produces the default. Writes are plain overwrites,
/// so concurrent writers to the same key resolve as last-writer-wins.
/// `LocalStore` is cheap to clone; clones share the backend.
#[derive(Clone)]
pub struct LocalStore {
    backend: Arc<dyn KeyValueStore>,
}

impl std::fmt::Debug for LocalStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocalStore").finish_non_exhaustive()
    }
}

impl LocalStore {
    /// Wrap an existing backend.
    pub fn new(backend: impl KeyValueStore + 'static) -> Self {
        Self {
            backend: Arc::new(backend),
        }
    }

    /// Wrap a shared backend.
    pub fn from_shared(backend: Arc<dyn KeyValueStore>) -> Self {
        Self { backend }
    }

    /// A store that lives only as long as the process.
    pub fn in_memory() -> Self {
        Self::new(MemoryStore::new())
    }

    /// Open a file-backed profile.
    pub fn open_file(path: impl AsRef<Path>) -> Result<Self, CacheError> {
        Ok(Self::new(FileStore::open(path)?))
    }

    /// Read a value, falling back to `T::default()`.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let cart: Vec<CartItem> = store.read(StorageKey::Cart);
    /// ```
    pub fn read<T: DeserializeOwned + Default>(&self, key: StorageKey) -> T {
        self.read_or_else(key, T::default)
    }

    /// Read a value, falling back to `default`.
    pub fn read_or<T: DeserializeOwned>(&self, key: StorageKey, default: T) -> T {
        self.read_or_else(key, || default)
    }

    fn read_or_else<T: DeserializeOwned>(&self, key: StorageKey, default: impl FnOnce() -> T) -> T {
        match self.try_read(key) {
            Ok(Some(value)) => value,
            Ok(None) => default(),
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "discarding unreadable value");
                default()
            }
        }
    }

    /// Read a value, surfacing parse and backend errors.
    pub fn try_read<T: DeserializeOwned>(&self, key: StorageKey) -> Result<Option<T>, CacheError> {
        match self.backend.get(key.as_str())? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    /// Overwrite a value.
    pub fn write<T: Serialize + ?Sized>(&self, key: StorageKey, value: &T) -> Result<(), CacheError> {
        let raw = serde_json::to_string(value)?;
        self.backend.set(key.as_str(), &raw)?;
        tracing::debug!(key = %key, bytes = raw.len(), "stored");
        Ok(())
    }

    /// Read, modify and write back a value.
    ///
    /// Not atomic with respect to other writers of the same profile.
    pub fn update<T, F>(&self, key: StorageKey, f: F) -> Result<T, CacheError>
    where
        T: Serialize + DeserializeOwned + Default,
        F: FnOnce(&mut T),
    {
        let mut value: T = self.read(key);
        f(&mut value);
        self.write(key, &value)?;
        Ok(value)
    }

    /// Delete a value.
    pub fn remove(&self, key: StorageKey) -> Result<(), CacheError> {
        self.backend.delete(key.as_str())
    }

    /// Check if a value is present (parseable or not).
    pub fn contains(&self, key: StorageKey) -> bool {
        self.backend.exists(key.as_str()).unwrap_or(false)
    }

    /// Raw JSON text stored under a key.
    pub fn raw(&self, key: StorageKey) -> Option<String> {
        self.backend.get(key.as_str()).ok().flatten()
    }

    /// Store raw text under a key without validating it.
    pub fn write_raw(&self, key: StorageKey, raw: &str) -> Result<(), CacheError> {
        self.backend.set(key.as_str(), raw)
    }

    /// Keys present in the backend that belong to the storefront.
    pub fn keys(&self) -> Vec<StorageKey> {
        self.backend
            .keys()
            .unwrap_or_default()
            .iter()
            .filter_map(|k| StorageKey::from_name(k))
            .collect()
    }
}
