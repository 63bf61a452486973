//! Product View Module
//!
//! Per-product display state and the pure rules that turn a `Product` into
//! what the user sees:
//! - Expansion flags for long descriptions
//! - Description truncation and the "See more / See less" toggle
//! - Five-slot star ratings
//! - REST handler for toggling a description

pub mod display;
pub mod handlers;
pub mod state;

// Re-export commonly used types and functions
pub use display::{describe, product_card, rating_slots, DescriptionView, ProductCard, StarSlot};
pub use handlers::routes;
pub use state::ViewState;
