//! Error handling utilities for repositories

use roster_core::{DomainError, RecordId};
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Create a "student not found" error
pub fn student_not_found(id: RecordId) -> DomainError {
    DomainError::StudentNotFound(id)
}
