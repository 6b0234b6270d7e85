//! Service context - dependency container for services
//!
//! Holds the record stores shared by every request.

use std::sync::Arc;

use roster_core::{StudentRepository, TaskRepository, VehicleRepository};

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    student_repo: Arc<dyn StudentRepository>,
    task_repo: Arc<dyn TaskRepository>,
    vehicle_repo: Arc<dyn VehicleRepository>,
}

impl ServiceContext {
    /// Create a new service context
    pub fn new(
        student_repo: Arc<dyn StudentRepository>,
        task_repo: Arc<dyn TaskRepository>,
        vehicle_repo: Arc<dyn VehicleRepository>,
    ) -> Self {
        Self {
            student_repo,
            task_repo,
            vehicle_repo,
        }
    }

    /// Get the student repository
    pub fn student_repo(&self) -> &dyn StudentRepository {
        self.student_repo.as_ref()
    }

    /// Get the task repository
    pub fn task_repo(&self) -> &dyn TaskRepository {
        self.task_repo.as_ref()
    }

    /// Get the vehicle repository
    pub fn vehicle_repo(&self) -> &dyn VehicleRepository {
        self.vehicle_repo.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .finish()
    }
}

/// Builder for creating ServiceContext
#[derive(Default)]
pub struct ServiceContextBuilder {
    student_repo: Option<Arc<dyn StudentRepository>>,
    task_repo: Option<Arc<dyn TaskRepository>>,
    vehicle_repo: Option<Arc<dyn VehicleRepository>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn student_repo(mut self, repo: Arc<dyn StudentRepository>) -> Self {
        self.student_repo = Some(repo);
        self
    }

    pub fn task_repo(mut self, repo: Arc<dyn TaskRepository>) -> Self {
        self.task_repo = Some(repo);
        self
    }

    pub fn vehicle_repo(mut self, repo: Arc<dyn VehicleRepository>) -> Self {
        self.vehicle_repo = Some(repo);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Internal` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.student_repo
                .ok_or_else(|| ServiceError::internal("student_repo is required"))?,
            self.task_repo
                .ok_or_else(|| ServiceError::internal("task_repo is required"))?,
            self.vehicle_repo
                .ok_or_else(|| ServiceError::internal("vehicle_repo is required"))?,
        ))
    }
}
