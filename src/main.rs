//! bandstand server entry point.
//!
//! Starts the Axum HTTP server over the venue/artist/show directory.

use anyhow::Context;
use sqlx::postgres::PgPoolOptions;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use bandstand::api;
use bandstand::app_state::AppState;
use bandstand::config::AppConfig;
use bandstand::persistence::migrations;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config =
        AppConfig::from_env().map_err(|e| anyhow::anyhow!("loading configuration: {e}"))?;
    tracing::info!(addr = %config.listen_addr, "starting bandstand");

    // Connect to storage and bring the schema up to date
    let pool = PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .acquire_timeout(std::time::Duration::from_secs(
            config.database_connect_timeout_secs,
        ))
        .connect(&config.database_url)
        .await
        .context("connecting to PostgreSQL")?;
    migrations::run(&pool).await.context("running migrations")?;

    // Build application state and router
    let app_state = AppState::new(pool);
    let app = api::build_router()
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr)
        .await
        .context("binding listen address")?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app).await.context("serving")?;

    Ok(())
}
