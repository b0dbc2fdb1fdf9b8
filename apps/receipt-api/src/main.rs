//! # Receipt API
//!
//! Entry point: configuration, logging, then the HTTP server.
//!
//! ## Startup Sequence
//! 1. Load configuration from the environment
//! 2. Initialize tracing (logging)
//! 3. Create state (empty in-memory store, UUID generator)
//! 4. Serve until Ctrl+C / SIGTERM

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use receipt_api::config::{ApiConfig, DEFAULT_LOG_FILTER};
use receipt_api::server;
use receipt_api::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ApiConfig::load().context("Failed to load configuration")?;

    // Initialize tracing
    let filter = EnvFilter::try_new(&config.log_filter)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    info!(
        port = config.port,
        bind_addr = %config.bind_addr,
        "Starting Receipt API server..."
    );

    let state = AppState::in_memory();

    server::serve(&config, state)
        .await
        .with_context(|| format!("Server failed on {}", config.bind_address()))?;

    info!("Server shutdown complete");
    Ok(())
}
