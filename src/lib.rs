//! Storefront Library
//!
//! This library provides the core functionality of a small storefront: a
//! login gate, a product listing read from a remote catalog, a client-held
//! cart and the display rules for product cards.

// Domain modules
pub mod cart;
pub mod catalog;
pub mod shell;
pub mod view;

// Infrastructure
pub mod config;
pub mod error;
pub mod router;
