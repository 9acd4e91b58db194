//! Wishlist engine.
//!
//! A duplicate-free list of product ids. Insertion order is preserved for
//! display; membership is what matters for correctness. Persistence follows
//! the same contract as the cart: load-or-default at startup, write-through
//! on every mutation.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use mercato_core::ProductId;

use crate::storage::{self, KeyValueStore, keys};

/// Pure wishlist state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Wishlist {
    ids: Vec<ProductId>,
}

impl Wishlist {
    /// The wished product ids, in insertion order.
    #[must_use]
    pub fn ids(&self) -> &[ProductId] {
        &self.ids
    }

    /// Whether the wishlist is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Number of wished products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Membership test.
    #[must_use]
    pub fn contains(&self, id: ProductId) -> bool {
        self.ids.contains(&id)
    }

    /// Add a product id. Idempotent: adding a present id is a no-op.
    pub fn add(&mut self, id: ProductId) {
        if !self.contains(id) {
            self.ids.push(id);
        }
    }

    /// Remove a product id. No-op if absent.
    pub fn remove(&mut self, id: ProductId) {
        self.ids.retain(|&existing| existing != id);
    }

    /// Flip membership. Returns `true` if the id is present afterwards.
    pub fn toggle(&mut self, id: ProductId) -> bool {
        if self.contains(id) {
            self.remove(id);
            false
        } else {
            self.add(id);
            true
        }
    }

    /// Empty the wishlist.
    pub fn clear(&mut self) {
        self.ids.clear();
    }
}

/// The persisted wishlist engine.
pub struct WishlistStore {
    wishlist: Wishlist,
    store: Arc<dyn KeyValueStore>,
}

impl WishlistStore {
    /// Load the wishlist from the store, defaulting to empty.
    #[must_use]
    pub fn load(store: Arc<dyn KeyValueStore>) -> Self {
        let wishlist = storage::load_json_or_default(store.as_ref(), keys::WISHLIST);
        Self { wishlist, store }
    }

    /// The current wishlist state.
    #[must_use]
    pub fn wishlist(&self) -> &Wishlist {
        &self.wishlist
    }

    /// Membership test.
    #[must_use]
    pub fn contains(&self, id: ProductId) -> bool {
        self.wishlist.contains(id)
    }

    /// Add an id (idempotent) and persist.
    pub fn add(&mut self, id: ProductId) {
        tracing::debug!(product_id = %id, "Adding to wishlist");
        self.wishlist.add(id);
        self.persist();
    }

    /// Remove an id and persist.
    pub fn remove(&mut self, id: ProductId) {
        tracing::debug!(product_id = %id, "Removing from wishlist");
        self.wishlist.remove(id);
        self.persist();
    }

    /// Flip membership, persist, and report the new state.
    pub fn toggle(&mut self, id: ProductId) -> bool {
        let present = self.wishlist.toggle(id);
        tracing::debug!(product_id = %id, present, "Toggling wishlist");
        self.persist();
        present
    }

    /// Empty the wishlist and persist.
    pub fn clear(&mut self) {
        tracing::debug!("Clearing wishlist");
        self.wishlist.clear();
        self.persist();
    }

    fn persist(&self) {
        storage::persist_json(self.store.as_ref(), keys::WISHLIST, &self.wishlist);
    }
}
