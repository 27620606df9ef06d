//! book-catalog server entry point.
//!
//! Opens the SQLite pool and starts the Axum HTTP server.

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use book_catalog::api;
use book_catalog::app_state::AppState;
use book_catalog::config::{CatalogConfig, LogFormat};
use book_catalog::persistence;
use book_catalog::service::BookService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = CatalogConfig::from_env().context("invalid LISTEN_ADDR")?;

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match config.log_format {
        LogFormat::Json => tracing_subscriber::fmt().json().with_env_filter(filter).init(),
        LogFormat::Text => tracing_subscriber::fmt().with_env_filter(filter).init(),
    }
    tracing::info!(addr = %config.listen_addr, "starting book-catalog");

    // Open the store
    let pool = persistence::connect(&config).await?;
    if config.database_init_schema {
        persistence::ensure_schema(&pool).await?;
    }

    // Build service layer and application state
    let app_state = AppState::new(BookService::new(pool));
    let app = api::build_app(app_state);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.listen_addr))?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
