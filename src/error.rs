//! Error types for the storefront service.

use crate::catalog::{ProductId, TransportError};
use crate::config::ConfigError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Top-level error of the binary.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The catalog client could not be set up.
    #[error("Catalog error: {0}")]
    Transport(#[from] TransportError),

    /// Binding or serving the listener failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors returned by the REST handlers.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Unknown product: {0}")]
    UnknownProduct(ProductId),

    #[error("Either product or productId is required")]
    MissingProduct,
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::UnknownProduct(_) => StatusCode::NOT_FOUND,
            ApiError::MissingProduct => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}
