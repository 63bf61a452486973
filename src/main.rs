use std::sync::Arc;
use storefront_rust::catalog::HttpCatalogClient;
use storefront_rust::config::Config;
use storefront_rust::error::AppError;
use storefront_rust::router::create_app_router;
use storefront_rust::shell::AppState;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // Load configuration and set up logging
    let config = Config::from_env()?;
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(config.log_level.to_string()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Initialize application state
    let catalog = HttpCatalogClient::new(config.catalog_url.clone(), config.catalog_timeout)?;
    info!(url = %catalog.url(), "using product catalog");
    let state = Arc::new(AppState::new(Arc::new(catalog)));

    // Build application router with all routes and middleware
    let app = create_app_router(state);

    // Start the server
    let listener = tokio::net::TcpListener::bind(config.bind_address).await?;
    info!("Server running on http://{}", config.bind_address);
    axum::serve(listener, app).await?;

    Ok(())
}
