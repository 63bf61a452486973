//! Storefront Application State
//!
//! A single store shared by every handler. Session, cart and view state are
//! guarded separately; the catalog fetch runs on its own task and never holds
//! a lock across the network call.

use super::render::{build_screen, Screen};
use super::session::SessionState;
use crate::cart::{helpers::format_cart_line, models::CartResponse, CartState};
use crate::catalog::{Product, ProductId, SharedCatalog, TransportError};
use crate::error::ApiError;
use crate::view::ViewState;
use std::sync::Arc;
use tokio::{sync::Mutex, task::JoinHandle};
use tracing::{info, warn};

// =============================================================================
// Application State
// =============================================================================

/// Shared application state that can be safely passed between threads
pub type SharedState = Arc<AppState>;

/// Core application state: one session, one cart, one set of view flags
pub struct AppState {
    pub session: Mutex<SessionState>,
    pub cart: Mutex<CartState>,
    pub view: Mutex<ViewState>,

    /// Source of the product listing
    catalog: SharedCatalog,
}

impl AppState {
    /// Creates the initial state: logged out, empty cart, nothing expanded
    pub fn new(catalog: SharedCatalog) -> Self {
        Self {
            session: Mutex::new(SessionState::new()),
            cart: Mutex::new(CartState::new()),
            view: Mutex::new(ViewState::new()),
            catalog,
        }
    }

    /// Logs `username` in and, on the first login, starts the catalog fetch.
    ///
    /// The returned handle resolves once the fetch outcome has been applied.
    pub async fn login(self: &Arc<Self>, username: impl Into<String>) -> Option<JoinHandle<()>> {
        let should_fetch = self.session.lock().await.login(username);
        should_fetch.then(|| self.spawn_fetch())
    }

    /// Restarts the catalog fetch after a failure.
    ///
    /// Returns `None` when there is nothing to retry or a fetch is running.
    pub async fn retry(self: &Arc<Self>) -> Option<JoinHandle<()>> {
        let should_fetch = self.session.lock().await.request_retry();
        should_fetch.then(|| {
            info!("retrying catalog fetch");
            self.spawn_fetch()
        })
    }

    /// Runs the fetch on its own task so that a panic or abort still ends in
    /// `apply_fetch`, releasing the in-flight guard.
    fn spawn_fetch(self: &Arc<Self>) -> JoinHandle<()> {
        let state = Arc::clone(self);
        tokio::spawn(async move {
            let catalog = Arc::clone(&state.catalog);
            let fetch = tokio::spawn(async move { catalog.fetch_products().await });
            let result = fetch.await.unwrap_or_else(|e| {
                warn!(error = %e, "catalog fetch task did not complete");
                Err(TransportError::Interrupted(e.to_string()))
            });
            state.session.lock().await.apply_fetch(result);
        })
    }

    /// Looks up product `id` in the loaded catalog.
    pub async fn catalog_product(&self, id: ProductId) -> Result<Product, ApiError> {
        self.session
            .lock()
            .await
            .product(id)
            .cloned()
            .ok_or(ApiError::UnknownProduct(id))
    }

    /// Appends `product` to the cart. Never fails.
    pub async fn add_to_cart(&self, product: Product) -> CartResponse {
        info!(item = %format_cart_line(&product), "added to cart");

        let mut cart = self.cart.lock().await;
        cart.add_to_cart(product);
        CartResponse::from(&*cart)
    }

    /// Removes the first cart entry with id `id`; unknown ids leave the cart as is.
    pub async fn remove_from_cart(&self, id: ProductId) -> CartResponse {
        let mut cart = self.cart.lock().await;
        if let Some(product) = cart.find(id).cloned() {
            cart.remove_from_cart(&product);
            info!(item = %format_cart_line(&product), "removed from cart");
        }
        CartResponse::from(&*cart)
    }

    pub async fn cart_snapshot(&self) -> CartResponse {
        CartResponse::from(&*self.cart.lock().await)
    }

    /// Flips the description flag of `id` and returns its new value.
    pub async fn toggle_description(&self, id: ProductId) -> bool {
        self.view.lock().await.toggle_description(id)
    }

    /// Derives the screen from the current state.
    pub async fn screen(&self) -> Screen {
        let session = self.session.lock().await;
        let cart = self.cart.lock().await;
        let view = self.view.lock().await;
        build_screen(&session, &cart, &view)
    }
}
