//! Cart engine.
//!
//! The cart is split in two: [`Cart`] is the pure state type with the
//! line-merging rules, and [`CartStore`] wraps it with write-through
//! persistence. The pure type is what the unit tests exercise; the store
//! is what the view layer holds.
//!
//! Invariants: at most one line per product id, and every line's quantity
//! is at least 1.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use mercato_core::{Price, ProductId};

use crate::catalog::Product;
use crate::storage::{self, KeyValueStore, keys};

/// One cart row: a product reference with a denormalized snapshot of the
/// name, price, and image at the time it was added.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub product_id: ProductId,
    pub name: String,
    pub price: Price,
    pub image: String,
    pub quantity: u32,
}

impl CartLine {
    /// Snapshot a product into a cart line. Quantity is clamped to at
    /// least 1.
    #[must_use]
    pub fn new(product: &Product, quantity: u32) -> Self {
        Self {
            product_id: product.id,
            name: product.name.clone(),
            price: product.price,
            image: product.image.clone(),
            quantity: quantity.max(1),
        }
    }

    /// Price × quantity for this line.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.price.times(self.quantity)
    }
}

/// Pure cart state: an ordered list of lines, one per product id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// The cart lines, in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Add a line. If a line for the same product already exists its
    /// quantity is increased by the incoming quantity; otherwise the line
    /// is appended. Always succeeds; there is no stock check.
    pub fn add(&mut self, line: CartLine) {
        if let Some(existing) = self
            .lines
            .iter_mut()
            .find(|l| l.product_id == line.product_id)
        {
            existing.quantity += line.quantity;
        } else {
            self.lines.push(line);
        }
    }

    /// Remove the line for `product_id`. No-op if absent.
    pub fn remove(&mut self, product_id: ProductId) {
        self.lines.retain(|l| l.product_id != product_id);
    }

    /// Replace the quantity of the line for `product_id`. A quantity of 0
    /// removes the line. No-op if the product is not in the cart.
    pub fn set_quantity(&mut self, product_id: ProductId, quantity: u32) {
        if quantity == 0 {
            self.remove(product_id);
        } else if let Some(line) = self.lines.iter_mut().find(|l| l.product_id == product_id) {
            line.quantity = quantity;
        }
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Sum of price × quantity over all lines; zero for an empty cart.
    #[must_use]
    pub fn total(&self) -> Price {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Sum of quantities over all lines; zero for an empty cart.
    #[must_use]
    pub fn count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }
}

/// The persisted cart engine.
///
/// Rehydrates from the `cart` key at construction (absent or corrupt data
/// yields an empty cart) and re-serializes the full line list after every
/// mutation. Write failures are logged; in-memory state stays
/// authoritative.
pub struct CartStore {
    cart: Cart,
    store: Arc<dyn KeyValueStore>,
}

impl CartStore {
    /// Load the cart from the store, defaulting to empty.
    #[must_use]
    pub fn load(store: Arc<dyn KeyValueStore>) -> Self {
        let cart = storage::load_json_or_default(store.as_ref(), keys::CART);
        Self { cart, store }
    }

    /// The current cart state.
    #[must_use]
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Add a line (merging by product id) and persist.
    pub fn add(&mut self, line: CartLine) {
        tracing::debug!(product_id = %line.product_id, quantity = line.quantity, "Adding to cart");
        self.cart.add(line);
        self.persist();
    }

    /// Remove a product's line and persist.
    pub fn remove(&mut self, product_id: ProductId) {
        tracing::debug!(%product_id, "Removing from cart");
        self.cart.remove(product_id);
        self.persist();
    }

    /// Set a line's quantity (0 removes) and persist.
    pub fn set_quantity(&mut self, product_id: ProductId, quantity: u32) {
        tracing::debug!(%product_id, quantity, "Updating cart quantity");
        self.cart.set_quantity(product_id, quantity);
        self.persist();
    }

    /// Empty the cart and persist.
    pub fn clear(&mut self) {
        tracing::debug!("Clearing cart");
        self.cart.clear();
        self.persist();
    }

    /// Sum of price × quantity over all lines.
    #[must_use]
    pub fn total(&self) -> Price {
        self.cart.total()
    }

    /// Sum of quantities over all lines.
    #[must_use]
    pub fn count(&self) -> u32 {
        self.cart.count()
    }

    fn persist(&self) {
        storage::persist_json(self.store.as_ref(), keys::CART, &self.cart);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn line(id: i32, price: u32, quantity: u32) -> CartLine {
        CartLine {
            product_id: ProductId::new(id),
            name: format!("Product {id}"),
            price: Price::from_units(price),
            image: format!("/images/products/{id}.jpg"),
            quantity,
        }
    }

    #[test]
    fn test_add_merges_same_product() {
        let mut cart = Cart::default();
        cart.add(line(1, 50, 2));
        cart.add(line(1, 50, 3));

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].quantity, 5);
        assert_eq!(cart.total(), Price::from_units(250));
    }

    #[test]
    fn test_add_appends_distinct_products() {
        let mut cart = Cart::default();
        cart.add(line(1, 50, 1));
        cart.add(line(2, 80, 1));

        assert_eq!(cart.lines().len(), 2);
        assert_eq!(cart.count(), 2);
    }

    #[test]
    fn test_repeated_adds_sum_quantities() {
        let mut cart = Cart::default();
        for quantity in [1, 4, 2, 3] {
            cart.add(line(7, 10, quantity));
        }
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].quantity, 10);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut cart = Cart::default();
        cart.add(line(1, 50, 1));
        cart.remove(ProductId::new(99));
        assert_eq!(cart.lines().len(), 1);
    }

    #[test]
    fn test_set_quantity_replaces_not_adds() {
        let mut cart = Cart::default();
        cart.add(line(1, 50, 5));
        cart.set_quantity(ProductId::new(1), 2);
        assert_eq!(cart.lines()[0].quantity, 2);
    }

    #[test]
    fn test_set_quantity_zero_removes() {
        let mut cart = Cart::default();
        cart.add(line(1, 50, 5));
        cart.set_quantity(ProductId::new(1), 0);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_quantity_for_absent_product_is_noop() {
        let mut cart = Cart::default();
        cart.set_quantity(ProductId::new(1), 3);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_empty_cart_totals() {
        let cart = Cart::default();
        assert_eq!(cart.total(), Price::ZERO);
        assert_eq!(cart.count(), 0);
    }

    #[test]
    fn test_total_over_mixed_lines() {
        let mut cart = Cart::default();
        cart.add(line(1, 100, 2));
        cart.add(line(2, 250, 1));
        assert_eq!(cart.total(), Price::from_units(450));
        assert_eq!(cart.count(), 3);
    }

    #[test]
    fn test_store_persists_and_rehydrates() {
        let store = Arc::new(MemoryStore::new());

        let mut cart_store = CartStore::load(Arc::clone(&store) as Arc<dyn KeyValueStore>);
        cart_store.add(line(1, 50, 2));
        cart_store.add(line(2, 30, 1));

        let reloaded = CartStore::load(store as Arc<dyn KeyValueStore>);
        assert_eq!(reloaded.cart(), cart_store.cart());
        assert_eq!(reloaded.total(), Price::from_units(130));
    }

    #[test]
    fn test_store_recovers_from_corrupt_snapshot() {
        let store = Arc::new(MemoryStore::new());
        store.set(keys::CART, "{ nope").unwrap();

        let cart_store = CartStore::load(store as Arc<dyn KeyValueStore>);
        assert!(cart_store.cart().is_empty());
    }

    #[test]
    fn test_clear_persists_empty_list() {
        let store = Arc::new(MemoryStore::new());
        let mut cart_store = CartStore::load(Arc::clone(&store) as Arc<dyn KeyValueStore>);
        cart_store.add(line(1, 50, 2));
        cart_store.clear();

        assert_eq!(store.get(keys::CART).unwrap().as_deref(), Some("[]"));
    }
}
