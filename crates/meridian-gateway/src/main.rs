//! Meridian HR Gateway - contact-form backend and site server
//!
//! This is the main entry point for the gateway service. It builds the
//! in-memory record store once, hands it to the router, and serves until
//! Ctrl+C or SIGTERM.
//!
//! # Admin Access
//!
//! Set `ADMIN_TOKEN` to enable `GET /api/inquiries`. Without it the admin
//! endpoints answer `403 Forbidden`.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use meridian_gateway::{create_router, GatewayConfig, GatewayState};
use meridian_store::MemoryStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,meridian=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Meridian HR Gateway");

    // Load configuration from environment
    let config = GatewayConfig::from_env()?;

    tracing::info!(
        listen_addr = %config.listen_addr,
        cors_origins = ?config.cors_origins,
        max_body_bytes = config.max_body_bytes,
        admin_enabled = config.admin_token.is_some(),
        site_dir = ?config.site_dir,
        "Gateway configuration loaded"
    );

    if config.admin_token.is_none() {
        tracing::warn!("No ADMIN_TOKEN set - inquiry listing is disabled");
    }

    // Records live only as long as this process
    let store = Arc::new(MemoryStore::new());
    tracing::info!("In-memory record store initialized");

    let listen_addr = config.listen_addr.clone();
    let state = GatewayState::new(store, config);
    let app = create_router(state);

    // Start HTTP server
    tracing::info!(listen_addr = %listen_addr, "Starting HTTP server");
    let listener = tokio::net::TcpListener::bind(&listen_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Gateway stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("Received Ctrl+C, shutting down"),
        () = terminate => tracing::info!("Received SIGTERM, shutting down"),
    }
}
