//! Leave accrual HTTP server.
//!
//! Reads the policy directory from `LEAVE_ENGINE_CONFIG` (default `./config`)
//! and the listen address from `LEAVE_ENGINE_ADDR` (default `0.0.0.0:3000`).

use std::env;
use std::sync::Arc;

use tracing::info;

use leave_engine::api::{AppState, create_router};
use leave_engine::clock::SystemClock;
use leave_engine::config::ConfigLoader;
use leave_engine::telemetry::init_tracing;

const DEFAULT_CONFIG_DIR: &str = "./config";
const DEFAULT_ADDR: &str = "0.0.0.0:3000";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let config_dir =
        env::var("LEAVE_ENGINE_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.to_string());
    let addr = env::var("LEAVE_ENGINE_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());

    let config = ConfigLoader::load(&config_dir)?;
    info!(
        config_dir = %config_dir,
        policy = %config.metadata().code,
        version = %config.metadata().version,
        "Loaded leave policy"
    );

    let state = AppState::new(config, Arc::new(SystemClock));
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(addr = %addr, "Listening");

    axum::serve(listener, create_router(state)).await?;
    Ok(())
}
