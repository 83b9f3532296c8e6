//! Sunpos HTTP Server Binary
//!
//! Entry point for the solar position REST API. It loads configuration,
//! initializes the ephemeris backend, sets up the HTTP router, and starts
//! serving requests.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin sunpos-server
//!
//! PORT=8080 EPHEMERIS_PATH=/srv/ephe cargo run --bin sunpos-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 3000)
//! - `EPHEMERIS_PATH`: Ephemeris data directory (default: ./ephe)
//! - `COMPUTATION_TIMEOUT_MS`: Per-request computation limit (default: 5000)
//! - `SUNPOS_CONFIG`: Optional TOML configuration file
//! - `RUST_LOG`: Log filter (default: info)

use std::net::SocketAddr;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use sunpos_api::config::ServerConfig;
use sunpos_api::ephemeris::AnalyticalEphemeris;
use sunpos_api::http::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting Sunpos HTTP Server");

    let config = ServerConfig::load()?;

    // The ephemeris backend is configured once and shared read-only
    let ephemeris = Arc::new(AnalyticalEphemeris::new(config.ephemeris_config()));
    info!(path = %config.ephemeris.data_path.display(), "Ephemeris initialized");

    let state = AppState::new(ephemeris).with_computation_timeout(config.computation_timeout());
    let app = create_router(state);

    let addr: SocketAddr = config.bind_address().parse()?;
    info!("Swiss Ephemeris API listening at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
