//! REST API handler for description toggles

use crate::catalog::ProductId;
use crate::shell::SharedState;
use axum::{
    extract::{Path, State},
    routing::post,
    Json, Router,
};
use serde::Serialize;

/// Creates routes for view-related operations
pub fn routes() -> Router<SharedState> {
    Router::new().route("/products/:id/toggle", post(toggle_description))
}

/// Response for a description toggle
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleResponse {
    pub product_id: ProductId,

    /// New value of the flag
    pub expanded: bool,
}

/// Endpoint: POST /products/:id/toggle
/// Shows or hides the full description of a product.
async fn toggle_description(
    State(state): State<SharedState>,
    Path(product_id): Path<ProductId>,
) -> Json<ToggleResponse> {
    let expanded = state.toggle_description(product_id).await;
    Json(ToggleResponse {
        product_id,
        expanded,
    })
}
