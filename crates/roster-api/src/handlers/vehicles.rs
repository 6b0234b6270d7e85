//! Vehicle inventory handlers

use axum::{extract::State, Json};
use roster_service::{CreateVehicleRequest, VehicleResponse, VehicleService};

use crate::extractors::{RecordIdPath, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// GET /vehicles
pub async fn list_vehicles(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<VehicleResponse>>> {
    let service = VehicleService::new(state.service_context());
    let response = service.list_vehicles().await?;
    Ok(Json(response))
}

/// POST /vehicles
pub async fn create_vehicle(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateVehicleRequest>,
) -> ApiResult<Created<Json<VehicleResponse>>> {
    let service = VehicleService::new(state.service_context());
    let response = service.create_vehicle(request).await?;
    Ok(Created(Json(response)))
}

/// GET /vehicles/{id}
pub async fn get_vehicle(
    State(state): State<AppState>,
    RecordIdPath(vehicle_id): RecordIdPath,
) -> ApiResult<Json<VehicleResponse>> {
    let service = VehicleService::new(state.service_context());
    let response = service.get_vehicle(vehicle_id).await?;
    Ok(Json(response))
}
