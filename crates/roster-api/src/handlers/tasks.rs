//! Task handlers

use axum::{extract::State, Json};
use roster_service::{TaskRequest, TaskResponse, TaskService};

use crate::extractors::{RecordIdPath, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// GET /tasks
pub async fn list_tasks(State(state): State<AppState>) -> ApiResult<Json<Vec<TaskResponse>>> {
    let service = TaskService::new(state.service_context());
    let response = service.list_tasks().await?;
    Ok(Json(response))
}

/// POST /tasks
pub async fn create_task(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<TaskRequest>,
) -> ApiResult<Created<Json<TaskResponse>>> {
    let service = TaskService::new(state.service_context());
    let response = service.create_task(request).await?;
    Ok(Created(Json(response)))
}

/// GET /tasks/{id}
pub async fn get_task(
    State(state): State<AppState>,
    RecordIdPath(task_id): RecordIdPath,
) -> ApiResult<Json<TaskResponse>> {
    let service = TaskService::new(state.service_context());
    let response = service.get_task(task_id).await?;
    Ok(Json(response))
}

/// Replace a task wholesale
///
/// PUT /tasks/{id}
pub async fn replace_task(
    State(state): State<AppState>,
    RecordIdPath(task_id): RecordIdPath,
    ValidatedJson(request): ValidatedJson<TaskRequest>,
) -> ApiResult<Json<TaskResponse>> {
    let service = TaskService::new(state.service_context());
    let response = service.replace_task(task_id, request).await?;
    Ok(Json(response))
}

/// DELETE /tasks/{id}
pub async fn delete_task(
    State(state): State<AppState>,
    RecordIdPath(task_id): RecordIdPath,
) -> ApiResult<Json<TaskResponse>> {
    let service = TaskService::new(state.service_context());
    let response = service.delete_task(task_id).await?;
    Ok(Json(response))
}
