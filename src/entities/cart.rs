//! In-memory cart and wishlist.
//!
//! Transient session state: lines live for the run of the app only
//! (persisting them is explicitly out of scope). Line order is insertion
//! order, like the session dict the storefront kept.

use indexmap::IndexMap;
use std::collections::HashSet;

use crate::entities::product::{Catalog, ProductId};

/// Product quantities keyed by product id.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    lines: IndexMap<ProductId, u32>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `quantity` units, accumulating onto an existing line.
    pub fn add(&mut self, id: ProductId, quantity: u32) {
        if quantity == 0 {
            return;
        }
        *self.lines.entry(id).or_insert(0) += quantity;
    }

    /// Drop a line entirely.
    pub fn remove(&mut self, id: ProductId) {
        self.lines.shift_remove(&id);
    }

    /// Replace a line's quantity. Anything below 1 removes the line
    /// (mirrors the cart-update rule of the storefront).
    pub fn set_quantity(&mut self, id: ProductId, quantity: i64) {
        if quantity > 0 {
            self.lines.insert(id, quantity as u32);
        } else {
            self.lines.shift_remove(&id);
        }
    }

    pub fn quantity(&self, id: ProductId) -> u32 {
        self.lines.get(&id).copied().unwrap_or(0)
    }

    /// Iterate lines in insertion order.
    pub fn lines(&self) -> impl Iterator<Item = (ProductId, u32)> + '_ {
        self.lines.iter().map(|(id, qty)| (*id, *qty))
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total units across all lines (badge count).
    pub fn unit_count(&self) -> u32 {
        self.lines.values().sum()
    }

    /// Line subtotal in cents. Unknown products price at zero, matching the
    /// storefront's skip-missing-product behavior.
    pub fn subtotal_cents(&self, catalog: &Catalog, id: ProductId) -> u64 {
        let price = catalog.get(id).map(|p| p.price_cents).unwrap_or(0);
        price * u64::from(self.quantity(id))
    }

    /// Cart total in cents.
    pub fn total_cents(&self, catalog: &Catalog) -> u64 {
        self.lines
            .keys()
            .map(|id| self.subtotal_cents(catalog, *id))
            .sum()
    }
}

/// Set of wished-for product ids.
#[derive(Debug, Clone, Default)]
pub struct Wishlist {
    ids: HashSet<ProductId>,
}

impl Wishlist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip membership; returns true when the product was just added.
    pub fn toggle(&mut self, id: ProductId) -> bool {
        if self.ids.remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        }
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_accumulates_quantity() {
        let mut cart = Cart::new();
        cart.add(1, 1);
        cart.add(1, 2);
        assert_eq!(cart.quantity(1), 3);
        assert_eq!(cart.unit_count(), 3);
    }

    #[test]
    fn test_set_quantity_below_one_removes_line() {
        let mut cart = Cart::new();
        cart.add(1, 5);
        cart.set_quantity(1, 0);
        assert_eq!(cart.quantity(1), 0);
        assert!(cart.is_empty());

        cart.add(2, 1);
        cart.set_quantity(2, -3);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_totals_over_demo_catalog() {
        let catalog = Catalog::demo();
        let mut cart = Cart::new();
        cart.add(1, 2); // 2 x 8999
        cart.add(5, 1); // 1 x 1999

        assert_eq!(cart.subtotal_cents(&catalog, 1), 17998);
        assert_eq!(cart.total_cents(&catalog), 19997);

        // Unknown product prices at zero instead of erroring
        cart.add(999, 3);
        assert_eq!(cart.total_cents(&catalog), 19997);
    }

    #[test]
    fn test_lines_keep_insertion_order() {
        let mut cart = Cart::new();
        cart.add(3, 1);
        cart.add(1, 1);
        cart.add(2, 1);
        let order: Vec<ProductId> = cart.lines().map(|(id, _)| id).collect();
        assert_eq!(order, vec![3, 1, 2]);
    }

    #[test]
    fn test_wishlist_toggle_pair_is_identity() {
        let mut wishlist = Wishlist::new();
        assert!(wishlist.toggle(7));
        assert!(wishlist.contains(7));
        assert!(!wishlist.toggle(7));
        assert!(!wishlist.contains(7));
        assert!(wishlist.is_empty());
    }
}
