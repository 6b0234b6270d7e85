//! Task entity - a to-do item

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::RecordId;

/// Task progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    #[default]
    Pending,
    InProgress,
    Complete,
}

/// Task priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TaskPriority {
    #[default]
    Low,
    Medium,
    High,
}

/// Task category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TaskCategory {
    Work,
    Personal,
    Urgent,
    #[default]
    Other,
}

/// Client-controlled task fields, used for both create and full replace
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    pub task_name: String,
    pub task_description: String,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    pub due_date: Option<DateTime<Utc>>,
    pub category: Option<TaskCategory>,
}

/// Task entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: RecordId,
    pub task_name: String,
    pub task_description: String,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    pub due_date: Option<DateTime<Utc>>,
    pub category: Option<TaskCategory>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Create a new task
    pub fn new(id: RecordId, draft: TaskDraft, now: DateTime<Utc>) -> Self {
        Self {
            id,
            task_name: draft.task_name,
            task_description: draft.task_description,
            status: draft.status,
            priority: draft.priority,
            due_date: draft.due_date,
            category: draft.category,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace every client-controlled field, keeping `id` and `created_at`
    pub fn replace(&mut self, draft: TaskDraft, now: DateTime<Utc>) {
        self.task_name = draft.task_name;
        self.task_description = draft.task_description;
        self.status = draft.status;
        self.priority = draft.priority;
        self.due_date = draft.due_date;
        self.category = draft.category;
        self.updated_at = now.max(self.created_at);
    }
}
