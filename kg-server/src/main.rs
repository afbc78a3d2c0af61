use kg_server::{AppState, Config, build_router, logger};

use std::error::Error;

use log::{error, info};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load and validate configuration
    let config = Config::from_env()?;

    // Initialize logger (before any other logging)
    logger::initialize(&config.log_level, config.log_colored)?;

    info!("Starting kg-server v{}", env!("CARGO_PKG_VERSION"));

    // Build application state: volatile credential store + token engine
    let state = AppState::new(config.jwt_secret.as_bytes(), config.token_ttl);
    info!(
        "Token engine initialized: HS256, ttl={}s",
        config.token_ttl.as_secs()
    );

    // Build router
    let app = build_router(state);

    // Create TCP listener
    let listener = TcpListener::bind(config.bind_addr).await?;
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    // Start server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            match tokio::signal::ctrl_c().await {
                Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
                Err(e) => error!("Failed to listen for SIGINT: {}", e),
            }
        })
        .await?;

    info!("Graceful shutdown complete");

    Ok(())
}
