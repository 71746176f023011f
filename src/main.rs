//! Scaffold server entry point.
//!
//! ```text
//! load config (defaults → optional file → env overlay)
//!     → bind listener
//!     → (test mode) schedule guarded runner after readiness + delay
//!     → serve until Ctrl+C
//! ```

use std::time::Duration;

use tokio::net::TcpListener;

use scaffold_server::config;
use scaffold_server::lifecycle::harness;
use scaffold_server::observability;
use scaffold_server::routing::NoExtraRoutes;
use scaffold_server::{HttpServer, Shutdown};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    observability::logging::init();

    let config = config::load(|key| std::env::var(key).ok())?;
    tracing::info!(
        host = %config.listener.host,
        port = config.listener.port,
        harness_enabled = config.harness.enabled,
        "Configuration loaded"
    );

    let listener =
        TcpListener::bind((config.listener.host.as_str(), config.listener.port)).await?;
    let addr = listener.local_addr()?;

    let harness_config = config.harness.clone();
    let server = HttpServer::new(config, &NoExtraRoutes);

    if harness_config.enabled {
        harness::spawn_runner(
            server.subscribe_ready(),
            Duration::from_millis(harness_config.startup_delay_ms),
            harness::smoke_check(addr),
        );
    }

    let shutdown = Shutdown::new();
    shutdown.listen_for_ctrl_c();

    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
