//! # User Registry server
//!
//! Loads [`Config`], starts the [`UserSystem`] and serves the HTTP routes until Ctrl-C.

use anyhow::{Context, Result};
use tracing::{info, warn};
use user_registry::config::Config;
use user_registry::http;
use user_registry::lifecycle::{setup_tracing, UserSystem};

#[tokio::main]
async fn main() -> Result<()> {
    // Setup tracing once for the entire application
    setup_tracing();

    let config = Config::load().context("Failed to load configuration")?;
    info!(?config, "Starting user registry");

    let system = UserSystem::new(&config).context("Failed to start user actor")?;

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr))?;
    info!(addr = %config.bind_addr, "Listening");

    http::serve(system.user_client.clone(), listener, shutdown_signal())
        .await
        .context("HTTP server failed")?;

    system.shutdown().await.context("User actor failed")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
    info!("Shutdown requested");
}
