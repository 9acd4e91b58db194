//! File-backed key-value store.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use super::{KeyValueStore, StorageError};

const STORE_FILE: &str = "store.json";

/// A key-value store persisted as a single JSON document on disk.
///
/// The whole document is loaded once at open and rewritten on every
/// mutation. Writes are last-writer-wins; there is no locking across
/// processes, and a concurrent writer's changes are not observed until the
/// next open.
pub struct FileStore {
    path: PathBuf,
    entries: Mutex<BTreeMap<String, String>>,
}

impl FileStore {
    /// Open (or create) a store in the given data directory.
    ///
    /// A corrupt store document is logged and treated as empty rather than
    /// failing the open; per-key snapshots have their own fallback handling
    /// on top of this.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Io` if the directory cannot be created or an
    /// existing store file cannot be read.
    pub fn open(data_dir: &Path) -> Result<Self, StorageError> {
        fs::create_dir_all(data_dir)?;
        let path = data_dir.join(STORE_FILE);

        let entries = if path.exists() {
            let raw = fs::read_to_string(&path)?;
            match serde_json::from_str(&raw) {
                Ok(map) => map,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "Corrupt store document, starting empty");
                    BTreeMap::new()
                }
            }
        } else {
            BTreeMap::new()
        };

        tracing::debug!(path = %path.display(), keys = entries.len(), "Opened file store");

        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    /// Rewrite the backing file from the in-memory map.
    fn flush(&self, entries: &BTreeMap<String, String>) -> Result<(), StorageError> {
        let raw = serde_json::to_string_pretty(entries)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.insert(key.to_owned(), value.to_owned());
        self.flush(&entries)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        if entries.remove(key).is_some() {
            self.flush(&entries)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path()).unwrap();
        store.set("cart", "[]").unwrap();
        assert_eq!(store.get("cart").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_reopen_preserves_entries() {
        let dir = tempfile::tempdir().unwrap();
        {
            let store = FileStore::open(dir.path()).unwrap();
            store.set("user", "{\"email\":\"jane@example.com\"}").unwrap();
        }
        let reopened = FileStore::open(dir.path()).unwrap();
        assert!(reopened.get("user").unwrap().is_some());
    }

    #[test]
    fn test_remove_deletes_key() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path()).unwrap();
        store.set("wishlist", "[1,2]").unwrap();
        store.remove("wishlist").unwrap();
        assert!(store.get("wishlist").unwrap().is_none());
    }

    #[test]
    fn test_remove_absent_key_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path()).unwrap();
        store.remove("nothing").unwrap();
    }

    #[test]
    fn test_corrupt_document_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(STORE_FILE), "{ definitely not json").unwrap();
        let store = FileStore::open(dir.path()).unwrap();
        assert!(store.get("cart").unwrap().is_none());
    }
}
