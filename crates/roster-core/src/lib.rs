//! # roster-core
//!
//! Domain layer containing entities, value objects, the student query engine,
//! and repository traits. This crate has zero dependencies on infrastructure
//! (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod query;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    BodyType, FuelType, Gender, NewStudent, NewVehicle, Student, StudentPatch, Task,
    TaskCategory, TaskDraft, TaskPriority, TaskStatus, Transmission, Vehicle,
};
pub use error::DomainError;
pub use query::{SortField, SortOrder, StudentFilter, StudentQuery};
pub use traits::{RepoResult, StudentRepository, TaskRepository, VehicleRepository};
pub use value_objects::{
    generate_unique_email, is_valid_phone, normalize_phone, EmailDirectory, RecordId,
    RecordIdParseError, DEFAULT_EMAIL_DOMAIN,
};
