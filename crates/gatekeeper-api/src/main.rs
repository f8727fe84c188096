//! Gatekeeper API server binary

use anyhow::Context;
use gatekeeper_api::{create_router, state::AppState};
use gatekeeper_core::AppConfig;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = AppConfig::from_env().context("failed to load configuration")?;

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.logging.level)),
        )
        .init();

    // Create the upload directory if it doesn't exist
    tokio::fs::create_dir_all(&config.upload.dir)
        .await
        .with_context(|| format!("failed to create upload directory {:?}", config.upload.dir))?;

    let addr = config.server.bind_addr();

    // Create application state (hashes the credential seeds)
    let state = Arc::new(AppState::new(config).context("failed to build application state")?);

    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Gatekeeper API listening on http://{}", addr);
    tracing::info!("Swagger UI available at http://{}/swagger-ui/", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
