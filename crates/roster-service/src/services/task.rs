//! Task service
//!
//! Handles to-do tasks. Updates replace the whole task; deletes are physical.

use roster_core::{RecordId, TaskDraft};
use tracing::{info, instrument};
use validator::Validate;

use crate::dto::{TaskRequest, TaskResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Task service
pub struct TaskService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> TaskService<'a> {
    /// Create a new TaskService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    #[instrument(skip(self))]
    pub async fn list_tasks(&self) -> ServiceResult<Vec<TaskResponse>> {
        let tasks = self.ctx.task_repo().list().await?;
        Ok(tasks.iter().map(TaskResponse::from).collect())
    }

    #[instrument(skip(self))]
    pub async fn get_task(&self, task_id: RecordId) -> ServiceResult<TaskResponse> {
        let task = self
            .ctx
            .task_repo()
            .find_by_id(task_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Task", task_id.to_string()))?;

        Ok(TaskResponse::from(&task))
    }

    #[instrument(skip(self, request))]
    pub async fn create_task(&self, request: TaskRequest) -> ServiceResult<TaskResponse> {
        request.validate()?;

        let task = self.ctx.task_repo().create(TaskDraft::from(request)).await?;

        info!(task_id = %task.id, "Task created");
        Ok(TaskResponse::from(&task))
    }

    /// Replace every client-controlled field of a task
    #[instrument(skip(self, request))]
    pub async fn replace_task(
        &self,
        task_id: RecordId,
        request: TaskRequest,
    ) -> ServiceResult<TaskResponse> {
        request.validate()?;

        let task = self
            .ctx
            .task_repo()
            .replace(task_id, TaskDraft::from(request))
            .await?;

        info!(task_id = %task.id, "Task replaced");
        Ok(TaskResponse::from(&task))
    }

    #[instrument(skip(self))]
    pub async fn delete_task(&self, task_id: RecordId) -> ServiceResult<TaskResponse> {
        let task = self.ctx.task_repo().delete(task_id).await?;

        info!(task_id = %task.id, "Task deleted");
        Ok(TaskResponse::from(&task))
    }
}
