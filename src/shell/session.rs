//! Session State
//!
//! Tracks the login gate and the outcome of the catalog fetch. The watcher
//! decides when a fetch may start; applying the result is a single state
//! replacement so no partial product list is ever observable.

use crate::catalog::{Product, ProductId, TransportError};
use tracing::{info, warn};

/// Fires once per false→true transition of the authentication flag.
#[derive(Debug, Default, Clone, Copy)]
pub struct AuthWatcher {
    last_seen: bool,
}

impl AuthWatcher {
    /// Records `authenticated` and reports whether it is a rising edge.
    pub fn observe(&mut self, authenticated: bool) -> bool {
        let rising = authenticated && !self.last_seen;
        self.last_seen = authenticated;
        rising
    }
}

/// Login gate plus the catalog listing it unlocks
#[derive(Debug, Default)]
pub struct SessionState {
    pub is_authenticated: bool,

    /// Only meaningful once authenticated
    pub username: String,

    /// `None` until a fetch has succeeded
    pub products: Option<Vec<Product>>,

    /// Message of the last failed fetch, cleared by a successful one
    pub error: Option<String>,

    watcher: AuthWatcher,
    fetch_in_flight: bool,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens the gate for `username`. Any input is accepted.
    ///
    /// Returns `true` when the caller must start a catalog fetch, which only
    /// happens on the first login.
    pub fn login(&mut self, username: impl Into<String>) -> bool {
        self.username = username.into();
        self.is_authenticated = true;
        info!(username = %self.username, "user logged in");

        self.watcher.observe(self.is_authenticated) && self.begin_fetch()
    }

    /// Returns `true` when a manual retry should start a fetch: the user is
    /// logged in, the last fetch failed and nothing is running.
    pub fn request_retry(&mut self) -> bool {
        if !self.is_authenticated || self.error.is_none() {
            return false;
        }
        self.begin_fetch()
    }

    /// Installs the outcome of a fetch.
    pub fn apply_fetch(&mut self, result: Result<Vec<Product>, TransportError>) {
        self.fetch_in_flight = false;
        match result {
            Ok(products) => {
                info!(count = products.len(), "catalog loaded");
                self.products = Some(products);
                self.error = None;
            }
            Err(e) => {
                warn!(error = %e, "catalog fetch failed");
                self.error = Some(e.to_string());
            }
        }
    }

    pub fn fetch_in_flight(&self) -> bool {
        self.fetch_in_flight
    }

    /// Looks up a product of the loaded catalog
    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.products.as_deref()?.iter().find(|p| p.id == id)
    }

    fn begin_fetch(&mut self) -> bool {
        if self.fetch_in_flight {
            return false;
        }
        self.fetch_in_flight = true;
        true
    }
}
