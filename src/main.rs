// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc};
use tracing_subscriber::EnvFilter;

use crate::application::chart_service::ChartDataService;
use crate::infrastructure::config::load_app_config;
use crate::presentation::app_state::AppState;
use crate::presentation::routes::router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load configuration
    let app_config = load_app_config()?;
    let palette = app_config.chart.palette()?;

    // Create services (application layer)
    let chart_service = ChartDataService::new(palette);

    // Create application state
    let state = Arc::new(AppState { chart_service });

    // Build router (presentation layer)
    let app = router(state);

    // Start server
    let addr: SocketAddr = app_config.server.bind_addr.parse()?;
    tracing::info!("Starting chart-data service on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, app).await?;

    Ok(())
}
