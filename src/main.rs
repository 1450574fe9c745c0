mod backend;
mod config;
mod routes;
mod state;

use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();
    if let Err(e) = dotenvy::dotenv() {
        tracing::debug!(error = %e, "no .env file loaded");
    }

    let config = config::ServerConfig::from_env()?;
    let catalog = backend::RestCatalog::new(
        &config.backend_url,
        &config.backend_api_key,
        &config.store_id,
        config.backend_timeout_secs,
    )?;
    tracing::info!(store_id = %config.store_id, backend = %config.backend_url, "catalog backend configured");

    let state = state::AppState::new(Arc::new(catalog), config.settings);
    let app = routes::leptos_app(state)?;

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    tracing::info!(port = config.port, "storefront listening");
    axum::serve(listener, app).await?;
    Ok(())
}
