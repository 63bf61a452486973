//! REST API handlers for shopping cart operations
//!
//! This module implements HTTP endpoints for listing the cart and for adding
//! and removing products.

use super::models::{CartActionInput, CartResponse};
use crate::error::ApiError;
use crate::shell::SharedState;
use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};

/// Creates routes for cart-related operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/cart", get(get_cart))
        .route("/cart/add", post(add_to_cart))
        .route("/cart/remove", post(remove_from_cart))
}

/// Endpoint: GET /cart
/// Returns the cart entries in insertion order with their total.
async fn get_cart(State(state): State<SharedState>) -> Json<CartResponse> {
    Json(state.cart_snapshot().await)
}

/// Endpoint: POST /cart/add
/// Appends a product to the cart, given either its record or its catalog id.
async fn add_to_cart(
    State(state): State<SharedState>,
    Json(payload): Json<CartActionInput>,
) -> Result<Json<CartResponse>, ApiError> {
    let product = match (payload.product, payload.product_id) {
        (Some(product), _) => product,
        (None, Some(id)) => state.catalog_product(id).await?,
        (None, None) => return Err(ApiError::MissingProduct),
    };
    Ok(Json(state.add_to_cart(product).await))
}

/// Endpoint: POST /cart/remove
/// Removes the first entry with the given product id, if any.
async fn remove_from_cart(
    State(state): State<SharedState>,
    Json(payload): Json<CartActionInput>,
) -> Result<Json<CartResponse>, ApiError> {
    let id = payload.target_id().ok_or(ApiError::MissingProduct)?;
    Ok(Json(state.remove_from_cart(id).await))
}
