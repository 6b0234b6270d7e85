//! In-memory implementation of TaskRepository

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;

use roster_core::{DomainError, RecordId, RepoResult, Task, TaskDraft, TaskRepository};

use super::arena::RecordArena;

/// In-memory implementation of TaskRepository. Deletes are physical.
#[derive(Default)]
pub struct InMemoryTaskRepository {
    records: RwLock<RecordArena<Task>>,
}

impl InMemoryTaskRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn find_by_id(&self, id: RecordId) -> RepoResult<Option<Task>> {
        Ok(self.records.read().get(id).cloned())
    }

    async fn list(&self) -> RepoResult<Vec<Task>> {
        Ok(self.records.read().iter().cloned().collect())
    }

    async fn create(&self, draft: TaskDraft) -> RepoResult<Task> {
        let task = Task::new(RecordId::new(), draft, Utc::now());
        if !self.records.write().push(task.clone()) {
            return Err(DomainError::InternalError(format!(
                "duplicate task id {}",
                task.id
            )));
        }
        Ok(task)
    }

    async fn replace(&self, id: RecordId, draft: TaskDraft) -> RepoResult<Task> {
        let mut records = self.records.write();
        let task = records.get_mut(id).ok_or(DomainError::TaskNotFound(id))?;
        task.replace(draft, Utc::now());
        Ok(task.clone())
    }

    async fn delete(&self, id: RecordId) -> RepoResult<Task> {
        self.records
            .write()
            .remove(id)
            .ok_or(DomainError::TaskNotFound(id))
    }
}
