//! Shopping Cart Business Logic Helpers
//!
//! This module contains helper functions for cart operations and formatting.

use crate::catalog::{Product, ProductId};

/// Appends `product` to `cart_items`.
///
/// No deduplication takes place: the same product may appear any number of
/// times, each occurrence being its own entry.
pub fn append_item(cart_items: &mut Vec<Product>, product: Product) {
    cart_items.push(product);
}

/// Removes the first entry of `cart_items` whose id equals `id`.
///
/// Later duplicates of the same id are kept. Returns the removed product, or
/// `None` when no entry matched.
pub fn remove_first_by_id(cart_items: &mut Vec<Product>, id: ProductId) -> Option<Product> {
    let position = cart_items.iter().position(|p| p.id == id)?;
    Some(cart_items.remove(position))
}

/// Sum of `price` over all entries.
pub fn total_price(cart_items: &[Product]) -> f64 {
    cart_items.iter().map(|p| p.price).sum()
}

/// Rounds an amount to whole cents, dropping float noise such as
/// `0.30000000000000004`.
pub fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Formats a single cart entry as it is listed to the user.
///
/// Example output: `"Shirt - $9.99"`.
pub fn format_cart_line(item: &Product) -> String {
    format!("{} - ${}", item.title, item.price)
}

/// Produces a human-readable one-line summary for a list of cart entries.
///
/// Example output: `"Shirt - $9.99, Mug - $4.5"`.
pub fn format_item_summary(items: &[Product]) -> String {
    items
        .iter()
        .map(format_cart_line)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Rating;

    fn product(id: ProductId, title: &str, price: f64) -> Product {
        Product {
            id,
            title: title.into(),
            price,
            description: String::new(),
            image: String::new(),
            category: String::new(),
            rating: Rating { rate: 0.0, count: 0 },
        }
    }

    #[test]
    fn test_remove_first_by_id_keeps_later_duplicates() {
        let mut items = vec![
            product(1, "Shirt", 9.99),
            product(2, "Mug", 4.5),
            product(1, "Shirt", 9.99),
        ];

        let removed = remove_first_by_id(&mut items, 1).unwrap();
        assert_eq!(removed.id, 1);
        let ids: Vec<_> = items.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn test_remove_first_by_id_missing_is_noop() {
        let mut items = vec![product(1, "Shirt", 9.99)];
        assert!(remove_first_by_id(&mut items, 42).is_none());
        assert_eq!(items.len(), 1);
    }

    #[test]
    fn test_round_cents() {
        assert_eq!(round_cents(0.1 + 0.2), 0.3);
        assert_eq!(round_cents(9.99), 9.99);
        assert_eq!(round_cents(109.95 + 22.3), 132.25);
        assert_eq!(round_cents(0.0), 0.0);
    }

    #[test]
    fn test_format_cart_line_uses_shortest_price() {
        assert_eq!(format_cart_line(&product(1, "Shirt", 9.99)), "Shirt - $9.99");
        assert_eq!(format_cart_line(&product(2, "Mug", 22.3)), "Mug - $22.3");
        assert_eq!(format_cart_line(&product(3, "Pen", 5.0)), "Pen - $5");
    }

    #[test]
    fn test_format_item_summary() {
        let items = vec![product(1, "Shirt", 9.99), product(2, "Mug", 4.5)];
        assert_eq!(format_item_summary(&items), "Shirt - $9.99, Mug - $4.5");
        assert_eq!(format_item_summary(&[]), "");
    }
}
