//! Catalog Client
//!
//! `CatalogClient` is the port the shell depends on; `HttpCatalogClient` is the
//! production adapter that issues a single GET against the catalog endpoint.

use super::models::Product;
use async_trait::async_trait;
use std::{sync::Arc, time::Duration};
use tracing::debug;

/// Endpoint used when no `CATALOG_URL` is configured
pub const DEFAULT_CATALOG_URL: &str = "https://fakestoreapi.com/products";

/// Request timeout used when no `CATALOG_TIMEOUT_SECS` is configured
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// The single failure kind of the catalog fetch.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The request never produced a response (DNS, connect, timeout, ...).
    #[error("Failed to fetch: {0}")]
    Request(#[source] reqwest::Error),

    /// The endpoint answered with a non-2xx status.
    #[error("Network response was not ok ({0})")]
    Status(reqwest::StatusCode),

    /// The body was not a sequence of products.
    #[error("Invalid catalog response: {0}")]
    Decode(#[source] reqwest::Error),

    /// The fetch task panicked or was cancelled before producing a result.
    #[error("Catalog fetch interrupted: {0}")]
    Interrupted(String),

    /// The HTTP client itself could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

/// Read side of the product catalog.
#[async_trait]
pub trait CatalogClient: Send + Sync {
    /// Fetches the full product listing in one request.
    async fn fetch_products(&self) -> Result<Vec<Product>, TransportError>;
}

/// Catalog client shared between the shell and its fetch tasks
pub type SharedCatalog = Arc<dyn CatalogClient>;

/// reqwest-backed catalog client
#[derive(Debug, Clone)]
pub struct HttpCatalogClient {
    url: String,
    client: reqwest::Client,
}

impl HttpCatalogClient {
    /// Builds a client for `url` whose requests give up after `timeout`.
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(TransportError::Client)?;

        Ok(Self {
            url: url.into(),
            client,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl CatalogClient for HttpCatalogClient {
    async fn fetch_products(&self) -> Result<Vec<Product>, TransportError> {
        debug!(url = %self.url, "fetching catalog");

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(TransportError::Request)?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status(status));
        }

        let products: Vec<Product> = response.json().await.map_err(TransportError::Decode)?;
        debug!(count = products.len(), "catalog fetched");

        Ok(products)
    }
}
