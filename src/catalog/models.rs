//! Product Catalog Models
//!
//! Shapes of the records returned by the catalog endpoint. Products are
//! read-only once fetched.

use serde::{Deserialize, Serialize};

// =============================================================================
// Catalog Domain Models
// =============================================================================

/// Identifier of a product, stable for the lifetime of a session
pub type ProductId = u64;

/// Aggregate review score of a product
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Rating {
    /// Average score in `[0, 5]`
    pub rate: f64,

    /// Number of reviews behind the score
    pub count: u64,
}

/// A product as listed by the catalog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: ProductId,

    /// Display name
    pub title: String,

    /// Unit price, never negative
    pub price: f64,

    /// Free text of arbitrary length
    pub description: String,

    /// URL of the product picture
    pub image: String,

    /// Catalog category; not every catalog sends it
    #[serde(default)]
    pub category: String,

    pub rating: Rating,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_product_decodes_catalog_record() {
        let raw = json!({
            "id": 1,
            "title": "Fjallraven - Foldsack No. 1 Backpack, Fits 15 Laptops",
            "price": 109.95,
            "description": "Your perfect pack for everyday use and walks in the forest.",
            "category": "men's clothing",
            "image": "https://fakestoreapi.com/img/81fPKd-2AYL._AC_SL1500_.jpg",
            "rating": { "rate": 3.9, "count": 120 }
        });

        let product: Product = serde_json::from_value(raw).unwrap();
        assert_eq!(product.id, 1);
        assert_eq!(product.price, 109.95);
        assert_eq!(product.category, "men's clothing");
        assert_eq!(product.rating, Rating { rate: 3.9, count: 120 });
    }

    #[test]
    fn test_product_category_is_optional() {
        let raw = json!({
            "id": 7,
            "title": "Shirt",
            "price": 9.99,
            "description": "xxxxxxxxxx",
            "image": "",
            "rating": { "rate": 3.2, "count": 5 }
        });

        let product: Product = serde_json::from_value(raw).unwrap();
        assert!(product.category.is_empty());
    }
}
