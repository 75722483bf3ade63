use std::error::Error;

use tokio::signal;
use tracing::{error, info};

use client::bootstrap::app::ConsoleApp;
use client::bootstrap::state::AppState;
use client::config_loader;
use client::observability;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenvy::dotenv().ok();

    let config = config_loader::load_config()?;

    observability::tracing::setup_logging(&config)?;

    info!("Starting imgconsole");
    info!("Configuration loaded successfully");

    let state = AppState::new(config)?;

    observability::startup_info::print_session_info(&state.config);

    let app = ConsoleApp::new(state);

    tokio::select! {
        result = app.run() => {
            if let Err(e) = result {
                error!("Console error: {}", e);
                return Err(e.into());
            }
        }
        () = shutdown_signal() => {}
    }

    info!("Shutdown completed");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                error!("Failed to install signal handler: {}", e);
            }
        }
    };

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C signal, shutting down...");
        },
        () = terminate => {
            info!("Received terminate signal, shutting down...");
        },
    }
}
