//! Unified error handling for the storefront.
//!
//! Provides a unified `StoreError` type wrapping the per-component error
//! taxonomies. Nothing in this layer is fatal to the application: engine
//! loads fall back to empty state and failed writes leave in-memory state
//! authoritative, so `StoreError` mostly surfaces at the edges (config
//! loading, opening the store, invalid admin input).

use thiserror::Error;

use mercato_core::EmailError;

use crate::config::ConfigError;
use crate::images::ImageError;
use crate::session::SessionError;
use crate::storage::StorageError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Configuration loading failed.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Durable key-value store operation failed.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Session operation failed.
    #[error("Session error: {0}")]
    Session(#[from] SessionError),

    /// Image override operation failed.
    #[error("Image error: {0}")]
    Image(#[from] ImageError),

    /// An email address failed structural validation.
    #[error("Invalid email: {0}")]
    Email(#[from] EmailError),
}

/// Result type alias for `StoreError`.
pub type Result<T> = std::result::Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StoreError::from(ImageError::MissingKey(crate::images::ImageSlot::Product));
        assert_eq!(err.to_string(), "Image error: slot product requires a key");
    }
}
