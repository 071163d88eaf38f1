//! Keyed JSON collection storage.
//!
//! Each collection (cart, wishlist, ratings) persists as one JSON snapshot
//! under a string key in a flat namespace. The backend is injected so store
//! logic can run against an in-memory double in tests.
//!
//! # Failure semantics
//!
//! Reads never fail: an absent or corrupt snapshot yields the collection's
//! empty default. Write failures (I/O, serialization) propagate to the caller,
//! which decides whether to surface them.

mod file;
mod memory;

pub use file::JsonFileStore;
pub use memory::MemoryStore;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

/// Errors from persisting a collection snapshot.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Writing to the backing medium failed.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serializing the collection failed.
    #[error("serialize error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Raw string key-value backend under a flat namespace.
pub trait StorageBackend {
    /// Fetch the raw payload for `key`; `None` when absent or unreadable.
    fn get(&self, key: &str) -> Option<String>;

    /// Replace the payload for `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the backing medium rejects the write.
    fn put(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Drop `key` entirely. Deleting an absent key is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the backing medium rejects the removal.
    fn delete(&self, key: &str) -> Result<(), StorageError>;
}

/// Typed access to one named JSON collection.
pub struct KeyedRecordStore<B> {
    backend: B,
    key: String,
}

impl<B: StorageBackend> KeyedRecordStore<B> {
    /// Bind `backend` to the collection stored under `key`.
    #[must_use]
    pub fn new(backend: B, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    /// Read the persisted collection, or its empty default when absent.
    ///
    /// A snapshot that fails to deserialize is treated as absent data and
    /// logged at debug level.
    pub fn read<T>(&self) -> T
    where
        T: DeserializeOwned + Default,
    {
        let Some(raw) = self.backend.get(&self.key) else {
            return T::default();
        };
        match serde_json::from_str(&raw) {
            Ok(collection) => collection,
            Err(error) => {
                debug!(key = %self.key, %error, "discarding corrupt collection snapshot");
                T::default()
            }
        }
    }

    /// Serialize and persist the full collection, replacing any prior value.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when serialization or the backend write fails;
    /// the previously persisted snapshot stays intact.
    pub fn write<T: Serialize>(&self, collection: &T) -> Result<(), StorageError> {
        let payload = serde_json::to_string(collection)?;
        self.backend.put(&self.key, &payload)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_key_reads_as_default() {
        let store = KeyedRecordStore::new(MemoryStore::new(), "cart");
        let items: Vec<String> = store.read();
        assert!(items.is_empty());
    }

    #[test]
    fn test_round_trip() {
        let store = KeyedRecordStore::new(MemoryStore::new(), "cart");
        store.write(&vec!["a".to_string(), "b".to_string()]).unwrap();
        let items: Vec<String> = store.read();
        assert_eq!(items, vec!["a", "b"]);
    }

    #[test]
    fn test_corrupt_snapshot_reads_as_default() {
        let backend = MemoryStore::new();
        backend.put("cart", "{not json").unwrap();
        let store = KeyedRecordStore::new(backend, "cart");
        let items: Vec<String> = store.read();
        assert!(items.is_empty());
    }

    #[test]
    fn test_write_replaces_prior_snapshot() {
        let store = KeyedRecordStore::new(MemoryStore::new(), "cart");
        store.write(&vec![1, 2, 3]).unwrap();
        store.write(&vec![9]).unwrap();
        let items: Vec<i32> = store.read();
        assert_eq!(items, vec![9]);
    }
}
