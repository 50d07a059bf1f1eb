// Router assembly
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{anomaly_bands, chart_data, health_check};
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(health_check))
        .route("/chart-data", post(chart_data))
        .route("/anomaly-bands", post(anomaly_bands))
        .layer(CompressionLayer::new().br(true).gzip(true))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
