use axum::Json;
use axum::extract::State;

use roster_core::health::HealthCheckResponse;
use roster_core::responses::SuccessResponse;

use crate::app::AppState;

/// `GET /api/health`. Always 200; the report's `status` carries the verdict.
pub async fn health(State(state): State<AppState>) -> Json<SuccessResponse<HealthCheckResponse>> {
    let report = state.health.check(&state.service).await;
    if !report.is_healthy() {
        tracing::warn!(status = report.status.as_str(), "health check degraded");
    }
    Json(SuccessResponse::new(report))
}
