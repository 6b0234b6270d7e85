//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::RecordId;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Student not found: {0}")]
    StudentNotFound(RecordId),

    #[error("Task not found: {0}")]
    TaskNotFound(RecordId),

    #[error("No matching students found")]
    NoMatchingStudents,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::StudentNotFound(_) => "UNKNOWN_STUDENT",
            Self::TaskNotFound(_) => "UNKNOWN_TASK",
            Self::NoMatchingStudents => "NO_MATCHING_STUDENTS",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::StudentNotFound(_) | Self::TaskNotFound(_) | Self::NoMatchingStudents
        )
    }
}
