//! Durable local key-value storage.
//!
//! Every engine persists its snapshot as a string value under a fixed key,
//! in the style of origin-scoped browser local storage. The
//! [`KeyValueStore`] trait is the seam: [`FileStore`] backs a real session
//! with a JSON document on disk, [`MemoryStore`] backs tests.
//!
//! Reads and writes are synchronous and last-writer-wins. There is no
//! cross-process notification; two processes sharing a data directory will
//! simply overwrite each other.

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Well-known storage keys.
///
/// The names are part of the on-disk format and must not change: existing
/// data directories are rehydrated by key.
pub mod keys {
    /// Serialized list of cart lines.
    pub const CART: &str = "cart";

    /// Serialized list of wishlist product ids.
    pub const WISHLIST: &str = "wishlist";

    /// Serialized session user, absent when logged out.
    pub const USER: &str = "user";

    /// Home hero image URL (plain string).
    pub const HOME_HERO_IMAGE_URL: &str = "homeHeroImageUrl";

    /// About hero image URL (plain string).
    pub const ABOUT_HERO_IMAGE_URL: &str = "aboutHeroImageUrl";

    /// Logo image URL (plain string).
    pub const LOGO_IMAGE_URL: &str = "logoImageUrl";

    /// Serialized map of category slug to image URL.
    pub const CATEGORY_IMAGE_URLS: &str = "categoryImageUrls";

    /// Serialized map of product id to image URL.
    pub const PRODUCT_IMAGE_URLS: &str = "productImageUrls";
}

/// Errors that can occur in a key-value store backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing the backing file failed.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serializing the store document failed.
    #[error("storage serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// A durable string-keyed, string-valued store.
///
/// Absence of a key implies default state for whichever engine owns it.
pub trait KeyValueStore: Send + Sync {
    /// Read the value for `key`, if present.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the write cannot be made durable.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key` if present.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the removal cannot be made durable.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Load and deserialize a JSON snapshot, falling back to the default.
///
/// Absent, unreadable, and corrupt snapshots all degrade to `T::default()`;
/// the failure is logged and never surfaced to the caller.
pub(crate) fn load_json_or_default<T>(store: &dyn KeyValueStore, key: &str) -> T
where
    T: DeserializeOwned + Default,
{
    match store.get(key) {
        Ok(Some(raw)) => match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(key, error = %e, "Corrupt snapshot, falling back to default");
                T::default()
            }
        },
        Ok(None) => T::default(),
        Err(e) => {
            tracing::warn!(key, error = %e, "Failed to read snapshot, falling back to default");
            T::default()
        }
    }
}

/// Serialize and write a JSON snapshot.
///
/// Write failures are logged; the caller's in-memory state stays
/// authoritative for the rest of the session.
pub(crate) fn persist_json<T: Serialize>(store: &dyn KeyValueStore, key: &str, value: &T) {
    match serde_json::to_string(value) {
        Ok(raw) => {
            if let Err(e) = store.set(key, &raw) {
                tracing::warn!(key, error = %e, "Failed to persist snapshot");
            }
        }
        Err(e) => {
            tracing::warn!(key, error = %e, "Failed to serialize snapshot");
        }
    }
}
