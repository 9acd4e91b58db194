//! Application state wiring.
//!
//! One [`AppState`] is constructed at startup and threaded through the view
//! layer explicitly. Each engine is instantiated exactly once here; there
//! are no ambient singletons, and tests can build the same state over a
//! [`MemoryStore`](crate::storage::MemoryStore).

use std::sync::Arc;

use crate::cart::CartStore;
use crate::catalog::Catalog;
use crate::config::StorefrontConfig;
use crate::error::StoreError;
use crate::images::ImageStore;
use crate::session::SessionStore;
use crate::storage::{FileStore, KeyValueStore};
use crate::wishlist::WishlistStore;

/// Everything a view needs: the catalog plus one instance of each engine.
///
/// Engines take `&mut self` for mutations, so the state is a plain owned
/// struct rather than a shared handle; the execution model is
/// single-threaded and event-driven.
pub struct AppState {
    config: StorefrontConfig,
    catalog: Catalog,
    pub cart: CartStore,
    pub wishlist: WishlistStore,
    pub session: SessionStore,
    pub images: ImageStore,
}

impl AppState {
    /// Open the file store named by the config and rehydrate every engine
    /// from it, with the built-in catalog.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Storage` if the data directory cannot be
    /// opened. Engine snapshots themselves never fail the open; corrupt
    /// ones degrade to empty state.
    pub fn open(config: StorefrontConfig) -> Result<Self, StoreError> {
        let store: Arc<dyn KeyValueStore> = Arc::new(FileStore::open(&config.data_dir)?);
        Ok(Self::with_store(config, store, Catalog::seed()))
    }

    /// Build state over an explicit store and catalog (used by tests and
    /// alternative frontends).
    #[must_use]
    pub fn with_store(
        config: StorefrontConfig,
        store: Arc<dyn KeyValueStore>,
        catalog: Catalog,
    ) -> Self {
        let cart = CartStore::load(Arc::clone(&store));
        let wishlist = WishlistStore::load(Arc::clone(&store));
        let session = SessionStore::load(Arc::clone(&store), config.login_delay);
        let images = ImageStore::load(store);

        Self {
            config,
            catalog,
            cart,
            wishlist,
            session,
            images,
        }
    }

    /// The storefront configuration.
    #[must_use]
    pub const fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    /// The product catalog.
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::cart::CartLine;
    use crate::storage::MemoryStore;
    use mercato_core::ProductId;

    fn memory_state() -> AppState {
        AppState::with_store(
            StorefrontConfig::default(),
            Arc::new(MemoryStore::new()),
            Catalog::seed(),
        )
    }

    #[test]
    fn test_engines_share_one_store() {
        let store = Arc::new(MemoryStore::new());
        let mut state = AppState::with_store(
            StorefrontConfig::default(),
            Arc::clone(&store) as Arc<dyn KeyValueStore>,
            Catalog::seed(),
        );

        let product = state.catalog().get(ProductId::new(1)).unwrap().clone();
        state.cart.add(CartLine::new(&product, 2));
        state.wishlist.add(product.id);

        assert!(store.get("cart").unwrap().is_some());
        assert!(store.get("wishlist").unwrap().is_some());
    }

    #[test]
    fn test_fresh_state_is_empty() {
        let state = memory_state();
        assert!(state.cart.cart().is_empty());
        assert!(state.wishlist.wishlist().is_empty());
        assert!(!state.session.is_authenticated());
    }
}
