use ps_config::Config;
use ps_relay::{AppState, BroadcastRegistry, Metrics};
use ps_server::error::ServerError;
use ps_server::{Cli, build_router, logger, shutdown};

use std::error::Error;
use std::net::SocketAddr;

use clap::Parser;
use log::info;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    // Load and validate configuration
    let config = Config::load(cli.config.as_deref(), &cli.overrides())?;
    config.validate()?;

    // Initialize logger (before any other logging)
    logger::initialize(&config.logging)?;

    info!("Starting ps-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Start the broadcast registry
    let metrics = Metrics::new();
    let registry = BroadcastRegistry::spawn(metrics.clone());
    let app_state = AppState::new(registry.clone(), metrics);

    let app = build_router(app_state);

    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: bind_addr.clone(),
            source,
        })?;

    // Get actual bound address (important when port is 0 / auto-assigned)
    let actual_addr = listener.local_addr().map_err(ServerError::Io)?;
    info!("Server listening on {actual_addr}");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown::graceful_shutdown(registry, shutdown::signal()))
    .await
    .map_err(ServerError::Io)?;

    info!("Graceful shutdown complete");

    Ok(())
}
