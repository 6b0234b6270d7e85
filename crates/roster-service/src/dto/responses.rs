//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.

use chrono::{DateTime, Utc};
use roster_core::{
    BodyType, FuelType, Gender, TaskCategory, TaskPriority, TaskStatus, Transmission,
};
use serde::Serialize;

// ============================================================================
// Student Responses
// ============================================================================

/// Student record as returned by every student endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StudentResponse {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub age: i32,
    pub gender: Gender,
    pub phone: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub is_active: bool,
}

// ============================================================================
// Task Responses
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskResponse {
    pub id: String,
    pub task_name: String,
    pub task_description: String,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    pub due_date: Option<DateTime<Utc>>,
    pub category: Option<TaskCategory>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ============================================================================
// Vehicle Responses
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VehicleResponse {
    pub id: String,
    pub make: String,
    pub model: String,
    pub body_type: BodyType,
    pub engine_size: f64,
    pub transmission: Transmission,
    pub vehicle_age: i32,
    pub fuel_type: FuelType,
    pub colour: String,
    pub vehicle_price: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub is_available: bool,
}

// ============================================================================
// Misc Responses
// ============================================================================

/// Plain message body
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn welcome() -> Self {
        Self::new("Welcome to student DBS")
    }
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub storage: String,
}

impl ReadinessResponse {
    pub fn ready(storage_healthy: bool) -> Self {
        Self {
            status: if storage_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                storage: if storage_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
