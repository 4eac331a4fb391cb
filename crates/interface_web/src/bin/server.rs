//! Expense Claims Core - Web Server Binary
//!
//! This binary starts the HTTP server that fronts the upstream claims
//! service.
//!
//! # Usage
//!
//! ```bash
//! # Run with default configuration
//! cargo run --bin claims-web
//!
//! # Run with environment variables
//! CLAIMS_HOST=0.0.0.0 CLAIMS_PORT=8080 CLAIMS_UPSTREAM_BASE_URL=http://backend:3000 cargo run --bin claims-web
//! ```
//!
//! # Environment Variables
//!
//! * `CLAIMS_HOST` - Server host (default: 0.0.0.0)
//! * `CLAIMS_PORT` - Server port (default: 8080)
//! * `CLAIMS_UPSTREAM_BASE_URL` - Base URL of the upstream claims service
//! * `CLAIMS_SIGN_OUT_REDIRECT` - Post-logout destination (default: /login)
//! * `CLAIMS_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use infra_claims_api::{GatewayConfig, HttpClaimsGateway};
use interface_web::{config::WebConfig, create_router, identity::PlaceholderIdentity, AppState};

/// Main entry point for the web server.
///
/// Initializes logging, loads configuration, wires the upstream gateway,
/// and starts the HTTP server.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let config = load_config();
    init_tracing(&config.log_level);

    tracing::info!(
        host = %config.host,
        port = %config.port,
        upstream = %config.upstream_base_url,
        "Starting Expense Claims Core web server"
    );

    let gateway = HttpClaimsGateway::new(GatewayConfig {
        base_url: config.upstream_base_url.clone(),
    });

    let state = AppState {
        gateway: Arc::new(gateway),
        identity: Arc::new(PlaceholderIdentity),
        config: config.clone(),
    };

    let app = create_router(state);

    let addr: SocketAddr = config
        .server_addr()
        .parse()
        .context("invalid server address")?;

    tracing::info!(%addr, "Server listening");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Loads configuration from environment variables, falling back to
/// defaults for anything unset.
fn load_config() -> WebConfig {
    WebConfig::from_env().unwrap_or_else(|_| {
        let defaults = WebConfig::default();
        WebConfig {
            host: std::env::var("CLAIMS_HOST").unwrap_or(defaults.host),
            port: std::env::var("CLAIMS_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            upstream_base_url: std::env::var("CLAIMS_UPSTREAM_BASE_URL")
                .unwrap_or(defaults.upstream_base_url),
            sign_out_redirect: std::env::var("CLAIMS_SIGN_OUT_REDIRECT")
                .unwrap_or(defaults.sign_out_redirect),
            log_level: std::env::var("CLAIMS_LOG_LEVEL")
                .or_else(|_| std::env::var("RUST_LOG"))
                .unwrap_or(defaults.log_level),
        }
    })
}

/// Initializes the tracing subscriber for structured logging.
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
///
/// This enables graceful shutdown of the server, allowing in-flight
/// requests to complete before the process exits.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
