use std::sync::Arc;

use log::{error, info};
use pawsafety_app::build_application;
use pawsafety_email_lettre::LettreEmailAdapter;

use crate::config::ServerConfig;

mod config;
mod logs;

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received. Preparing graceful exit...");
}

#[tokio::main]
async fn main() {
    let dotenv = dotenvy::dotenv();

    if let Err(e) = logs::init_logger() {
        eprintln!("Failed to initialize logger: {}", e);
        std::process::exit(1);
    }

    match dotenv {
        Ok(path) => info!("Loaded environment from {}", path.display()),
        Err(e) => info!("No .env file loaded ({}), using process environment", e),
    }

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{}. Please check your .env file", e);
            std::process::exit(1);
        }
    };
    info!("Environment variables loaded successfully");

    let email_adapter = match LettreEmailAdapter::new(&config.email) {
        Ok(adapter) => Arc::new(adapter),
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    tokio::spawn(pawsafety_http_api::startup::verify_transport(
        email_adapter.clone(),
    ));

    let app = Arc::new(build_application(email_adapter));

    info!("Email service configured for: {}", config.email.user);

    if let Err(e) = pawsafety_http_api::run(app, config.listen_addr, shutdown_signal()).await {
        error!("HTTP API failed: {}", e);
        std::process::exit(1);
    }
}
