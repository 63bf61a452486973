//! Product Catalog Module
//!
//! This module contains everything needed to read the remote product listing:
//! - Product models as returned by the catalog API
//! - The `CatalogClient` port and its reqwest-backed adapter
//! - The transport error raised when a fetch fails

pub mod client;
pub mod models;

// Re-export commonly used types for convenience
pub use client::{CatalogClient, HttpCatalogClient, SharedCatalog, TransportError};
pub use models::{Product, ProductId, Rating};
