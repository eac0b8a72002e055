use gate_server::{AppState, build_router, logger};

use std::error::Error;

use log::{error, info};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load .env file if present (development)
    let _ = dotenvy::dotenv();

    // Load and validate configuration
    let config = gate_config::Config::load()?;
    config.validate()?;

    let config_dir = gate_config::Config::config_dir()?;

    // Construct log file path if configured
    let log_file_path = match config.logging.file {
        Some(ref filename) => {
            let log_dir = config_dir.join(&config.logging.dir);
            std::fs::create_dir_all(&log_dir)?;
            Some(log_dir.join(filename))
        }
        None => None,
    };

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting gate-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let app_state = AppState::from_config(&config, &config_dir)?;
    let app = build_router(app_state);

    let listener = TcpListener::bind(config.bind_addr()).await?;

    // Get actual bound address (important when port is 0 / auto-assigned)
    let actual_addr = listener.local_addr()?;
    info!("Server listening on http://{}", actual_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Graceful shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        Err(e) => {
            error!("Failed to listen for SIGINT: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
