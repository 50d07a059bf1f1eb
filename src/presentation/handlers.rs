// HTTP request handlers
use crate::domain::aligner::ChartOptions;
use crate::domain::error::ChartError;
use crate::domain::series::QueryRangeResponse;
use crate::presentation::app_state::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

#[derive(Deserialize)]
pub struct ChartDataRequest {
    #[serde(default)]
    pub response: QueryRangeResponse,
    #[serde(flatten)]
    pub options: ChartOptions,
}

impl IntoResponse for ChartError {
    fn into_response(self) -> Response {
        let status = match self {
            ChartError::EmptyPalette => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::UNPROCESSABLE_ENTITY,
        };
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Align a query-range response into columnar chart data
pub async fn chart_data(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ChartDataRequest>,
) -> impl IntoResponse {
    let matrix = state
        .chart_service
        .chart_matrix(&request.response, &request.options);
    Json(matrix)
}

/// Build anomaly-band overlays from a query-range response
pub async fn anomaly_bands(
    State(state): State<Arc<AppState>>,
    Json(response): Json<QueryRangeResponse>,
) -> Result<impl IntoResponse, ChartError> {
    let bands = state.chart_service.anomaly_bands(&response)?;
    Ok(Json(bands))
}
