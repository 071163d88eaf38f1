//! File-backed storage: one JSON file per key.

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use tempfile::NamedTempFile;

use super::{StorageBackend, StorageError};

/// Durable backend storing each key as `<dir>/<key>.json`.
///
/// Writes go through a temp file in the same directory and replace the target
/// atomically, so an interrupted write leaves the previous snapshot intact.
/// Clones share the same directory, mirroring how every store in one profile
/// sees the same namespace.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Open a store rooted at `dir`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] when the directory cannot be created.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl StorageBackend for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.path_for(key)).ok()
    }

    fn put(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut temp = NamedTempFile::new_in(&self.dir)?;
        temp.write_all(value.as_bytes())?;
        temp.persist(self.path_for(key))
            .map_err(|persist| StorageError::Io(persist.error))?;
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), StorageError> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(error) => Err(error.into()),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(dir.path()).unwrap();
        store.put("cart", r#"[{"id":"1"}]"#).unwrap();
        assert_eq!(store.get("cart").unwrap(), r#"[{"id":"1"}]"#);
    }

    #[test]
    fn test_missing_key_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(dir.path()).unwrap();
        assert!(store.get("wishlist").is_none());
    }

    #[test]
    fn test_versioned_key_maps_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(dir.path()).unwrap();
        store.put("ratings:v1", "{}").unwrap();
        assert!(dir.path().join("ratings:v1.json").exists());
    }

    #[test]
    fn test_delete_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(dir.path()).unwrap();
        store.put("cart", "[]").unwrap();
        store.delete("cart").unwrap();
        store.delete("cart").unwrap();
        assert!(store.get("cart").is_none());
    }
}
