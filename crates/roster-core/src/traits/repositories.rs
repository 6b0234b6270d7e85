//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! (in-memory arena or PostgreSQL table) provides the implementation.

use async_trait::async_trait;

use crate::entities::{NewStudent, NewVehicle, Student, StudentPatch, Task, TaskDraft, Vehicle};
use crate::error::DomainError;
use crate::value_objects::RecordId;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Student Repository
// ============================================================================

#[async_trait]
pub trait StudentRepository: Send + Sync {
    /// Find an active student by ID
    async fn find_by_id(&self, id: RecordId) -> RepoResult<Option<Student>>;

    /// Fresh snapshot of all active students in insertion order
    async fn list_active(&self) -> RepoResult<Vec<Student>>;

    /// Insert a new student. The store assigns id, timestamps, and a unique
    /// email in the same atomic step as the insert.
    async fn create(&self, draft: NewStudent) -> RepoResult<Student>;

    /// Apply a partial update to an active student, re-deriving the email when
    /// a name is supplied. Fails with `StudentNotFound` if no active record matches.
    async fn update(&self, id: RecordId, patch: StudentPatch) -> RepoResult<Student>;

    /// Mark an active student inactive. Fails with `StudentNotFound` if the
    /// record is missing or already inactive.
    async fn soft_delete(&self, id: RecordId) -> RepoResult<Student>;

    /// Check that the backing storage is reachable
    async fn health_check(&self) -> RepoResult<()>;
}

// ============================================================================
// Task Repository
// ============================================================================

#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Find task by ID
    async fn find_by_id(&self, id: RecordId) -> RepoResult<Option<Task>>;

    /// List all tasks in insertion order
    async fn list(&self) -> RepoResult<Vec<Task>>;

    /// Insert a new task
    async fn create(&self, draft: TaskDraft) -> RepoResult<Task>;

    /// Replace every client-controlled field of an existing task
    async fn replace(&self, id: RecordId, draft: TaskDraft) -> RepoResult<Task>;

    /// Remove a task, returning it
    async fn delete(&self, id: RecordId) -> RepoResult<Task>;
}

// ============================================================================
// Vehicle Repository
// ============================================================================

#[async_trait]
pub trait VehicleRepository: Send + Sync {
    /// Find vehicle by ID
    async fn find_by_id(&self, id: RecordId) -> RepoResult<Option<Vehicle>>;

    /// List every vehicle in insertion order
    async fn list(&self) -> RepoResult<Vec<Vehicle>>;

    /// Insert a new vehicle
    async fn create(&self, draft: NewVehicle) -> RepoResult<Vehicle>;
}
