//! In-memory storage double.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use super::{StorageBackend, StorageError};

/// Shared in-memory backend for tests and ephemeral sessions.
///
/// Clones share the same map, so a cart store and a wishlist store built from
/// clones of one `MemoryStore` observe the same namespace, exactly like the
/// file-backed store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    fn put(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.to_string(), value.to_string());
        }
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), StorageError> {
        if let Ok(mut entries) = self.entries.lock() {
            entries.remove(key);
        }
        Ok(())
    }
}
