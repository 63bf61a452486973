//! Display derivations for product cards
//!
//! Everything here is pure: given a product and its expansion flag, compute
//! the text, the toggle affordance and the star slots to show.

use crate::catalog::{Product, ProductId};
use serde::Serialize;

/// Descriptions up to this many characters are never truncated
pub const TOGGLE_THRESHOLD: usize = 50;
/// Number of characters kept when a description is collapsed
pub const TRUNCATE_AT: usize = 100;
/// Appended to a collapsed description
pub const ELLIPSIS: &str = "...";
/// Label of the toggle when the description is collapsed
pub const SEE_MORE: &str = " ..See more";
/// Label of the toggle when the description is expanded
pub const SEE_LESS: &str = " ..See less";
/// Number of star slots in a rating
pub const RATING_SLOTS: usize = 5;

/// Visual state of one star
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StarSlot {
    Filled,
    Empty,
}

/// Description text plus the optional toggle affordance
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DescriptionView {
    pub text: String,

    /// Label of the toggle, `None` when the description is too short for one
    pub toggle: Option<&'static str>,
}

/// Everything shown for one product in the grid
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCard {
    pub id: ProductId,
    pub title: String,
    pub price: f64,
    pub image: String,
    pub stars: [StarSlot; RATING_SLOTS],
    pub review_count: u64,
    pub description: DescriptionView,
}

/// Derives the description shown for a product.
///
/// Two different thresholds are at play: a toggle is offered as soon as the
/// description exceeds 50 characters, while a collapsed description keeps its
/// first 100 characters. A 60-character description therefore shows in full,
/// followed by the ellipsis and a "See more" toggle.
pub fn describe(description: &str, expanded: bool) -> DescriptionView {
    let length = description.chars().count();

    let text = if expanded || length <= TOGGLE_THRESHOLD {
        description.to_string()
    } else {
        let mut head: String = description.chars().take(TRUNCATE_AT).collect();
        head.push_str(ELLIPSIS);
        head
    };

    let toggle = (length > TOGGLE_THRESHOLD).then_some(if expanded { SEE_LESS } else { SEE_MORE });

    DescriptionView { text, toggle }
}

/// Slot `i` is filled iff `i < rate`, compared without rounding.
pub fn rating_slots(rate: f64) -> [StarSlot; RATING_SLOTS] {
    std::array::from_fn(|i| {
        if (i as f64) < rate {
            StarSlot::Filled
        } else {
            StarSlot::Empty
        }
    })
}

/// Assembles the grid entry for `product`.
pub fn product_card(product: &Product, expanded: bool) -> ProductCard {
    ProductCard {
        id: product.id,
        title: product.title.clone(),
        price: product.price,
        image: product.image.clone(),
        stars: rating_slots(product.rating.rate),
        review_count: product.rating.count,
        description: describe(&product.description, expanded),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Rating;
    use StarSlot::{Empty, Filled};

    #[test]
    fn test_short_description_ignores_flag() {
        let text = "x".repeat(50);
        for expanded in [false, true] {
            let view = describe(&text, expanded);
            assert_eq!(view.text, text);
            assert_eq!(view.toggle, None);
        }
    }

    #[test]
    fn test_sixty_chars_collapsed_keeps_everything_and_offers_toggle() {
        let text = "y".repeat(60);
        let view = describe(&text, false);
        assert_eq!(view.text, format!("{}...", text));
        assert_eq!(view.toggle, Some(SEE_MORE));
    }

    #[test]
    fn test_long_description_truncates_at_hundred() {
        let text: String = ('a'..='z').cycle().take(150).collect();
        let view = describe(&text, false);
        assert_eq!(view.text.chars().count(), 103);
        assert!(view.text.starts_with(&text[..100]));
        assert!(view.text.ends_with("..."));

        let expanded = describe(&text, true);
        assert_eq!(expanded.text, text);
        assert_eq!(expanded.toggle, Some(SEE_LESS));
    }

    #[test]
    fn test_truncation_counts_characters() {
        let text = "é".repeat(120);
        let view = describe(&text, false);
        assert_eq!(view.text, format!("{}...", "é".repeat(100)));
    }

    #[test]
    fn test_rating_slots_compare_without_rounding() {
        assert_eq!(rating_slots(3.2), [Filled, Filled, Filled, Filled, Empty]);
        assert_eq!(rating_slots(3.0), [Filled, Filled, Filled, Empty, Empty]);
        assert_eq!(rating_slots(0.0), [Empty; 5]);
        assert_eq!(rating_slots(0.1), [Filled, Empty, Empty, Empty, Empty]);
        assert_eq!(rating_slots(5.0), [Filled; 5]);
    }

    #[test]
    fn test_product_card() {
        let product = Product {
            id: 1,
            title: "Shirt".into(),
            price: 9.99,
            description: "x".repeat(10),
            image: "shirt.png".into(),
            category: String::new(),
            rating: Rating { rate: 3.2, count: 5 },
        };

        let card = product_card(&product, false);
        assert_eq!(card.title, "Shirt");
        assert_eq!(card.review_count, 5);
        assert_eq!(card.description.text, "xxxxxxxxxx");
        assert_eq!(card.description.toggle, None);
    }
}
