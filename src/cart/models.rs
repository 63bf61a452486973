//! Shopping Cart Domain Models
//!
//! This module contains all data structures related to the shopping cart
//! business domain.

use super::helpers::{append_item, remove_first_by_id, round_cents, total_price};
use crate::catalog::{Product, ProductId};
use serde::{Deserialize, Serialize};

// =============================================================================
// Cart Domain Models
// =============================================================================

/// The user's selection of products, in the order they were added.
///
/// There is no quantity field: adding a product twice keeps two entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CartState {
    items: Vec<Product>,
}

impl CartState {
    /// Creates an empty cart
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `product` to the end of the cart.
    pub fn add_to_cart(&mut self, product: Product) {
        append_item(&mut self.items, product);
    }

    /// Removes the first entry with the same id as `product`.
    ///
    /// Returns the removed entry, or `None` when nothing matched; in that case
    /// the cart is left untouched.
    pub fn remove_from_cart(&mut self, product: &Product) -> Option<Product> {
        remove_first_by_id(&mut self.items, product.id)
    }

    /// Sum of the prices of every entry
    pub fn derived_total(&self) -> f64 {
        total_price(&self.items)
    }

    /// Looks up the first entry with the given id
    pub fn find(&self, id: ProductId) -> Option<&Product> {
        self.items.iter().find(|p| p.id == id)
    }

    pub fn items(&self) -> &[Product] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Input for the add and remove endpoints.
///
/// Either a full product record or the catalog id of one. When both are
/// given, the record wins.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartActionInput {
    /// Product record to act on
    pub product: Option<Product>,

    /// Catalog id of the product to act on
    pub product_id: Option<ProductId>,
}

impl CartActionInput {
    /// Id of the product this action targets
    pub fn target_id(&self) -> Option<ProductId> {
        self.product.as_ref().map(|p| p.id).or(self.product_id)
    }
}

/// Snapshot of the cart returned by every cart endpoint
#[derive(Debug, Serialize)]
pub struct CartResponse {
    /// Entries in insertion order
    pub items: Vec<Product>,

    /// Sum of the entries' prices, rounded to cents
    pub total: f64,
}

impl From<&CartState> for CartResponse {
    fn from(cart: &CartState) -> Self {
        Self {
            items: cart.items().to_vec(),
            total: round_cents(cart.derived_total()),
        }
    }
}
