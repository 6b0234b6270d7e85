//! Test fixtures and data generators
//!
//! Provides reusable request and response shapes for integration tests.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Create student request
#[derive(Debug, Clone, Serialize)]
pub struct StudentCreate {
    pub first_name: String,
    pub last_name: String,
    pub age: i32,
    pub gender: String,
    pub phone: String,
}

impl StudentCreate {
    pub fn new(first_name: &str, last_name: &str, age: i32) -> Self {
        Self {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            age,
            gender: "Female".to_string(),
            phone: "+1234567890".to_string(),
        }
    }

    pub fn jane_doe() -> Self {
        Self::new("Jane", "Doe", 25)
    }

    pub fn with_phone(mut self, phone: &str) -> Self {
        self.phone = phone.to_string();
        self
    }

    pub fn with_gender(mut self, gender: &str) -> Self {
        self.gender = gender.to_string();
        self
    }
}

/// Student response
#[derive(Debug, Clone, Deserialize)]
pub struct Student {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub age: i32,
    pub gender: String,
    pub phone: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub is_active: bool,
}

/// Task response
#[derive(Debug, Clone, Deserialize)]
pub struct Task {
    pub id: String,
    pub task_name: String,
    pub task_description: String,
    pub status: String,
    pub priority: String,
    pub due_date: Option<DateTime<Utc>>,
    pub category: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create vehicle request
#[derive(Debug, Clone, Serialize)]
pub struct VehicleCreate {
    pub make: String,
    pub model: String,
    pub body_type: String,
    pub engine_size: f64,
    pub transmission: String,
    pub vehicle_age: i32,
    pub fuel_type: String,
    pub colour: String,
    pub vehicle_price: f64,
}

impl VehicleCreate {
    pub fn new(make: &str, model: &str) -> Self {
        Self {
            make: make.to_string(),
            model: model.to_string(),
            body_type: "Saloon".to_string(),
            engine_size: 2.0,
            transmission: "Manual".to_string(),
            vehicle_age: 5,
            fuel_type: "Diesel".to_string(),
            colour: "Black".to_string(),
            vehicle_price: 9_750.0,
        }
    }
}

/// Vehicle response
#[derive(Debug, Clone, Deserialize)]
pub struct Vehicle {
    pub id: String,
    pub make: String,
    pub model: String,
    pub body_type: String,
    pub engine_size: f64,
    pub transmission: String,
    pub vehicle_age: i32,
    pub fuel_type: String,
    pub colour: String,
    pub vehicle_price: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub is_available: bool,
}

/// Error envelope
#[derive(Debug, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    pub details: Option<Value>,
}
