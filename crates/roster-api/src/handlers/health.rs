//! Health check handlers
//!
//! Endpoints for liveness and readiness checks.

use axum::{extract::State, http::StatusCode, Json};
use roster_service::{HealthResponse, ReadinessResponse};
use tracing::warn;

use crate::state::AppState;

/// Basic health check (liveness)
///
/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

/// Readiness check with storage health
///
/// GET /health/ready
pub async fn readiness_check(
    State(state): State<AppState>,
) -> (StatusCode, Json<ReadinessResponse>) {
    let storage_healthy = match state.service_context().student_repo().health_check().await {
        Ok(()) => true,
        Err(e) => {
            warn!(error = %e, "Storage health check failed");
            false
        }
    };

    let response = ReadinessResponse::ready(storage_healthy);
    let status = if response.is_ready() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status, Json(response))
}
