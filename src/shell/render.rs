//! Render Contract
//!
//! The screen the storefront shows for a given combination of session, cart
//! and view state. Serialized as JSON for the REST surface.

use super::session::SessionState;
use crate::cart::{
    helpers::{format_cart_line, round_cents},
    CartState,
};
use crate::catalog::ProductId;
use crate::view::{product_card, ProductCard, ViewState};
use serde::Serialize;

/// One line of the cart listing
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartEntry {
    pub id: ProductId,
    pub title: String,
    pub price: f64,

    /// Preformatted `"{title} - ${price}"`
    pub label: String,
}

/// Cart section, shown whenever the user is logged in
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartView {
    pub entries: Vec<CartEntry>,

    /// Rounded to cents
    pub total: f64,
}

impl From<&CartState> for CartView {
    fn from(cart: &CartState) -> Self {
        Self {
            entries: cart
                .items()
                .iter()
                .map(|item| CartEntry {
                    id: item.id,
                    title: item.title.clone(),
                    price: item.price,
                    label: format_cart_line(item),
                })
                .collect(),
            total: round_cents(cart.derived_total()),
        }
    }
}

/// Products section
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum CatalogView {
    /// Logged in, fetch not completed yet
    Loading,
    /// The last fetch failed; shown instead of the grid
    Failed { error: String },
    Ready { products: Vec<ProductCard> },
}

/// What the user sees
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "screen", rename_all = "camelCase")]
pub enum Screen {
    Login,
    Storefront {
        username: String,
        cart: CartView,
        catalog: CatalogView,
    },
}

/// Derives the current screen.
pub fn build_screen(session: &SessionState, cart: &CartState, view: &ViewState) -> Screen {
    if !session.is_authenticated {
        return Screen::Login;
    }

    let catalog = match (&session.error, &session.products) {
        (Some(error), _) => CatalogView::Failed {
            error: error.clone(),
        },
        (None, None) => CatalogView::Loading,
        (None, Some(products)) => CatalogView::Ready {
            products: products
                .iter()
                .map(|p| product_card(p, view.is_expanded(p.id)))
                .collect(),
        },
    };

    Screen::Storefront {
        username: session.username.clone(),
        cart: CartView::from(cart),
        catalog,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Product, Rating, TransportError};
    use crate::view::display::SEE_LESS;

    fn product(id: ProductId, description: &str) -> Product {
        Product {
            id,
            title: format!("Product {}", id),
            price: 1.25,
            description: description.into(),
            image: String::new(),
            category: String::new(),
            rating: Rating { rate: 2.0, count: 3 },
        }
    }

    #[test]
    fn test_unauthenticated_shows_login() {
        let screen = build_screen(&SessionState::new(), &CartState::new(), &ViewState::new());
        assert_eq!(screen, Screen::Login);
    }

    #[test]
    fn test_authenticated_without_products_is_loading() {
        let mut session = SessionState::new();
        session.login("alice");

        match build_screen(&session, &CartState::new(), &ViewState::new()) {
            Screen::Storefront {
                username, catalog, ..
            } => {
                assert_eq!(username, "alice");
                assert_eq!(catalog, CatalogView::Loading);
            }
            other => panic!("unexpected screen: {:?}", other),
        }
    }

    #[test]
    fn test_error_replaces_grid_but_cart_stays() {
        let mut session = SessionState::new();
        session.login("bob");
        session.apply_fetch(Ok(vec![product(1, "short")]));
        session.apply_fetch(Err(TransportError::Status(reqwest::StatusCode::NOT_FOUND)));

        let mut cart = CartState::new();
        cart.add_to_cart(product(1, "short"));

        match build_screen(&session, &cart, &ViewState::new()) {
            Screen::Storefront { cart, catalog, .. } => {
                assert!(matches!(catalog, CatalogView::Failed { .. }));
                assert_eq!(cart.entries.len(), 1);
                assert_eq!(cart.entries[0].label, "Product 1 - $1.25");
            }
            other => panic!("unexpected screen: {:?}", other),
        }
    }

    #[test]
    fn test_ready_grid_follows_expansion_flags() {
        let long = "z".repeat(80);
        let mut session = SessionState::new();
        session.login("carol");
        session.apply_fetch(Ok(vec![product(1, &long), product(2, &long)]));

        let mut view = ViewState::new();
        view.toggle_description(2);

        let Screen::Storefront { catalog, .. } = build_screen(&session, &CartState::new(), &view)
        else {
            panic!("expected storefront");
        };
        let CatalogView::Ready { products } = catalog else {
            panic!("expected ready catalog");
        };
        assert_eq!(products[0].description.text, format!("{}...", long));
        assert_eq!(products[1].description.text, long);
        assert_eq!(products[1].description.toggle, Some(SEE_LESS));
    }

    #[test]
    fn test_screen_serialization_tags() {
        let json = serde_json::to_value(Screen::Login).unwrap();
        assert_eq!(json["screen"], "login");

        let mut session = SessionState::new();
        session.login("dave");
        let json =
            serde_json::to_value(build_screen(&session, &CartState::new(), &ViewState::new()))
                .unwrap();
        assert_eq!(json["screen"], "storefront");
        assert_eq!(json["catalog"]["status"], "loading");
        assert_eq!(json["cart"]["total"], 0.0);
    }
}
