//! Vehicle database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for vehicles table
#[derive(Debug, Clone, FromRow)]
pub struct VehicleModel {
    pub id: Uuid,
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
