//! Route handlers

use super::error::ApiError;
use super::response::{ApiResponse, HealthStatus};
use super::server::AppState;
use axum::{Json, extract::State, extract::rejection::JsonRejection};
use chrono::SecondsFormat;
use roi_application::{BenchmarksView, SectorSummary, SimulationReport, SimulationRequest};

/// GET /health
pub async fn health(State(state): State<AppState>) -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "OK",
        timestamp: state
            .clock
            .now()
            .to_rfc3339_opts(SecondsFormat::Millis, true),
        environment: state.environment.clone(),
    })
}

/// POST /api/simulator/calculate
pub async fn calculate(
    State(state): State<AppState>,
    payload: Result<Json<SimulationRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<SimulationReport>>, ApiError> {
    let Json(request) = payload?;
    let report = state.calculate_roi.execute(&request)?;
    Ok(Json(ApiResponse::success(report)))
}

/// GET /api/simulator/benchmarks
pub async fn benchmarks(State(state): State<AppState>) -> Json<ApiResponse<BenchmarksView>> {
    Json(ApiResponse::success(state.get_benchmarks.execute()))
}

/// GET /api/simulator/sectors
pub async fn sectors(State(state): State<AppState>) -> Json<ApiResponse<Vec<SectorSummary>>> {
    Json(ApiResponse::success(state.list_sectors.execute()))
}

/// Fallback for unknown routes and methods
pub async fn not_found() -> ApiError {
    ApiError::NotFound
}
