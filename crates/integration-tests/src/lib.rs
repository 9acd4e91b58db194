//! Integration tests for Mercato.
//!
//! These tests exercise the storefront engines end-to-end through real
//! file-backed stores in temporary data directories: rehydration across
//! process restarts, corrupt-snapshot recovery, and the full query
//! pipeline over the seed catalog.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p mercato-integration-tests
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::time::Duration;

use tempfile::TempDir;

use mercato_storefront::{AppState, StorefrontConfig};

/// A temp data directory plus the config pointing at it.
///
/// Opening the harness twice simulates two storefront sessions sharing one
/// durable store - the restart scenario every persistence test needs.
pub struct TestHarness {
    dir: TempDir,
}

impl TestHarness {
    /// Create a harness with a fresh, empty data directory.
    #[must_use]
    pub fn new() -> Self {
        let dir = TempDir::new().expect("create temp data dir");
        Self { dir }
    }

    /// The config for this harness: its data dir, default page size, and
    /// no simulated login delay.
    #[must_use]
    pub fn config(&self) -> StorefrontConfig {
        StorefrontConfig {
            data_dir: self.dir.path().to_path_buf(),
            login_delay: Duration::from_millis(0),
            ..StorefrontConfig::default()
        }
    }

    /// Open a storefront session over the harness's data directory.
    #[must_use]
    pub fn open(&self) -> AppState {
        AppState::open(self.config()).expect("open app state")
    }

    /// Path to the raw store document, for corruption tests.
    #[must_use]
    pub fn store_path(&self) -> std::path::PathBuf {
        self.dir.path().join("store.json")
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}
