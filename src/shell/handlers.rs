//! REST API handlers for the session gate
//!
//! This module implements HTTP endpoints for login, manual retry of the
//! catalog fetch and reading the current screen.

use super::{render::Screen, state::SharedState};
use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

/// Creates routes for session-related operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/", get(screen))
        .route("/login", post(login))
        .route("/retry", post(retry))
}

/// Input for the login endpoint; nothing about it is validated
#[derive(Debug, Deserialize)]
pub struct LoginInput {
    #[serde(default)]
    pub username: String,
}

/// Response of the retry endpoint
#[derive(Debug, Serialize)]
pub struct RetryResponse {
    /// `"started"` or `"ignored"`
    pub status: String,
}

/// Endpoint: GET /
/// Returns the screen for the current state.
async fn screen(State(state): State<SharedState>) -> Json<Screen> {
    Json(state.screen().await)
}

/// Endpoint: POST /login
/// Opens the gate and kicks off the catalog fetch on the first login.
async fn login(State(state): State<SharedState>, Json(payload): Json<LoginInput>) -> Json<Screen> {
    // Detached: the screen shows the catalog as loading until the fetch lands.
    let _fetch = state.login(payload.username).await;
    Json(state.screen().await)
}

/// Endpoint: POST /retry
/// Restarts a failed catalog fetch.
async fn retry(State(state): State<SharedState>) -> Json<RetryResponse> {
    let status = match state.retry().await {
        Some(_) => "started",
        None => "ignored",
    };
    Json(RetryResponse {
        status: status.to_string(),
    })
}
