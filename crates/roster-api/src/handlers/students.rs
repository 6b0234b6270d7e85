//! Student handlers
//!
//! Endpoints for student records and search.

use axum::{extract::State, Json};
use roster_service::{
    CreateStudentRequest, SearchStudentsQuery, StudentResponse, StudentService,
    UpdateStudentRequest,
};

use crate::extractors::{RecordIdPath, ValidatedJson, ValidatedQuery};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// List active students
///
/// GET /students
pub async fn list_students(State(state): State<AppState>) -> ApiResult<Json<Vec<StudentResponse>>> {
    let service = StudentService::new(state.service_context());
    let response = service.list_students().await?;
    Ok(Json(response))
}

/// Create a student
///
/// POST /students
pub async fn create_student(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateStudentRequest>,
) -> ApiResult<Created<Json<StudentResponse>>> {
    let service = StudentService::new(state.service_context());
    let response = service.create_student(request).await?;
    Ok(Created(Json(response)))
}

/// Search students
///
/// GET /students/search
pub async fn search_students(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<SearchStudentsQuery>,
) -> ApiResult<Json<Vec<StudentResponse>>> {
    let service = StudentService::new(state.service_context());
    let response = service.search_students(query).await?;
    Ok(Json(response))
}

/// Get a student
///
/// GET /students/{id}
pub async fn get_student(
    State(state): State<AppState>,
    RecordIdPath(student_id): RecordIdPath,
) -> ApiResult<Json<StudentResponse>> {
    let service = StudentService::new(state.service_context());
    let response = service.get_student(student_id).await?;
    Ok(Json(response))
}

/// Partially update a student
///
/// PUT /students/{id}
pub async fn update_student(
    State(state): State<AppState>,
    RecordIdPath(student_id): RecordIdPath,
    ValidatedJson(request): ValidatedJson<UpdateStudentRequest>,
) -> ApiResult<Json<StudentResponse>> {
    let service = StudentService::new(state.service_context());
    let response = service.update_student(student_id, request).await?;
    Ok(Json(response))
}

/// Soft delete a student
///
/// DELETE /students/{id}
pub async fn delete_student(
    State(state): State<AppState>,
    RecordIdPath(student_id): RecordIdPath,
) -> ApiResult<Json<StudentResponse>> {
    let service = StudentService::new(state.service_context());
    let response = service.delete_student(student_id).await?;
    Ok(Json(response))
}
