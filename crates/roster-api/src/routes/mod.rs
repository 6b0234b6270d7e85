//! Route definitions

use axum::{routing::get, Router};

use crate::handlers::{health, root, students, tasks, vehicles};
use crate::state::AppState;

/// Create the resource router (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/", get(root::welcome))
        .merge(student_routes())
        .merge(task_routes())
        .merge(vehicle_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// Student routes
fn student_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/students",
            get(students::list_students).post(students::create_student),
        )
        .route("/students/search", get(students::search_students))
        .route(
            "/students/:id",
            get(students::get_student)
                .put(students::update_student)
                .delete(students::delete_student),
        )
}

/// Task routes
fn task_routes() -> Router<AppState> {
    Router::new()
        .route("/tasks", get(tasks::list_tasks).post(tasks::create_task))
        .route(
            "/tasks/:id",
            get(tasks::get_task)
                .put(tasks::replace_task)
                .delete(tasks::delete_task),
        )
}

/// Vehicle inventory routes
fn vehicle_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/vehicles",
            get(vehicles::list_vehicles).post(vehicles::create_vehicle),
        )
        .route("/vehicles/:id", get(vehicles::get_vehicle))
}
