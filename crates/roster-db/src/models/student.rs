//! Student database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for students table
#[derive(Debug, Clone, FromRow)]
pub struct StudentModel {
    pub id: Uuid,
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

/// Identifier/email pair scanned when deriving a unique email
#[derive(Debug, Clone, FromRow)]
pub struct EmailRowModel {
    pub id: Uuid,
    pub email: String,
}
