//! Storefront Shell Module
//!
//! The shell composes the catalog, the cart and the view state:
//! - Session state and the login gate
//! - The auth-edge watcher that starts the catalog fetch
//! - The render contract (`Screen`) derived from all of the above
//! - REST handlers for login, retry and the current screen

pub mod handlers;
pub mod render;
pub mod session;
pub mod state;

// Re-export commonly used types for convenience
pub use handlers::routes;
pub use render::{CartEntry, CartView, CatalogView, Screen};
pub use session::{AuthWatcher, SessionState};
pub use state::{AppState, SharedState};
