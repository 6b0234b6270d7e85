//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use chrono::{DateTime, Utc};
use roster_core::{
    is_valid_phone, BodyType, FuelType, Gender, StudentQuery, TaskCategory, TaskPriority,
    TaskStatus, Transmission,
};
use serde::Deserialize;
use validator::{Validate, ValidationError};

/// Phone numbers are checked after normalization, so punctuation is allowed.
fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    if is_valid_phone(phone) {
        Ok(())
    } else {
        let mut err = ValidationError::new("phone");
        err.message = Some("Phone number must contain 7-15 digits".into());
        Err(err)
    }
}

// ============================================================================
// Student Requests
// ============================================================================

/// Create student request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateStudentRequest {
    #[validate(length(min = 1, max = 100, message = "First name must be 1-100 characters"))]
    pub first_name: String,

    #[validate(length(min = 1, max = 100, message = "Last name must be 1-100 characters"))]
    pub last_name: String,

    #[validate(range(exclusive_min = 18, message = "Age must be greater than 18"))]
    pub age: i32,

    pub gender: Gender,

    #[validate(custom(function = "validate_phone"))]
    pub phone: String,
}

/// Partial student update; absent fields keep their stored value
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateStudentRequest {
    #[validate(length(min = 1, max = 100, message = "First name must be 1-100 characters"))]
    pub first_name: Option<String>,

    #[validate(length(min = 1, max = 100, message = "Last name must be 1-100 characters"))]
    pub last_name: Option<String>,

    #[validate(range(exclusive_min = 18, message = "Age must be greater than 18"))]
    pub age: Option<i32>,

    pub gender: Option<Gender>,

    #[validate(custom(function = "validate_phone"))]
    pub phone: Option<String>,
}

fn default_limit() -> i64 {
    StudentQuery::DEFAULT_LIMIT as i64
}

fn default_sort_by() -> String {
    "first_name".to_string()
}

fn default_sort_order() -> String {
    "asc".to_string()
}

/// Student search query parameters
///
/// Text filters are case-insensitive substring matches; an unknown
/// `sort_by` leaves results in insertion order.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SearchStudentsQuery {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub gender: Option<Gender>,

    #[validate(range(min = 0, message = "min_age must not be negative"))]
    pub min_age: Option<i32>,

    #[validate(range(min = 0, message = "max_age must not be negative"))]
    pub max_age: Option<i32>,

    #[serde(default)]
    #[validate(range(min = 0, message = "skip must not be negative"))]
    pub skip: i64,

    #[serde(default = "default_limit")]
    #[validate(range(min = 1, max = 100, message = "limit must be between 1 and 100"))]
    pub limit: i64,

    #[serde(default = "default_sort_by")]
    pub sort_by: String,

    #[serde(default = "default_sort_order")]
    pub sort_order: String,
}

impl Default for SearchStudentsQuery {
    fn default() -> Self {
        Self {
            first_name: None,
            last_name: None,
            email: None,
            gender: None,
            min_age: None,
            max_age: None,
            skip: 0,
            limit: default_limit(),
            sort_by: default_sort_by(),
            sort_order: default_sort_order(),
        }
    }
}

// ============================================================================
// Task Requests
// ============================================================================

fn default_category() -> Option<TaskCategory> {
    Some(TaskCategory::default())
}

/// Task body, used for both create and full replace
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct TaskRequest {
    #[validate(length(min = 1, max = 200, message = "Task name must be 1-200 characters"))]
    pub task_name: String,

    #[validate(length(max = 2000, message = "Description must be at most 2000 characters"))]
    pub task_description: String,

    #[serde(default)]
    pub status: TaskStatus,

    #[serde(default)]
    pub priority: TaskPriority,

    pub due_date: Option<DateTime<Utc>>,

    #[serde(default = "default_category")]
    pub category: Option<TaskCategory>,
}

// ============================================================================
// Vehicle Requests
// ============================================================================

/// Create vehicle request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateVehicleRequest {
    #[validate(length(min = 1, max = 100, message = "Make must be 1-100 characters"))]
    pub make: String,

    #[validate(length(min = 1, max = 100, message = "Model must be 1-100 characters"))]
    pub model: String,

    pub body_type: BodyType,

    #[validate(range(exclusive_min = 0.0, message = "Engine size must be greater than 0"))]
    pub engine_size: f64,

    pub transmission: Transmission,

    #[validate(range(min = 0, message = "Vehicle age cannot be negative"))]
    pub vehicle_age: i32,

    pub fuel_type: FuelType,

    #[validate(length(min = 1, max = 100, message = "Colour must be 1-100 characters"))]
    pub colour: String,

    #[validate(range(min = 0.0, message = "Price cannot be negative"))]
    pub vehicle_price: f64,
}
