use crate::{TaskPriority, TaskStatus};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: Uuid,

    // Core fields
    pub title: String,
    pub description: Option<String>,

    // Workflow
    pub status: TaskStatus,
    pub priority: Option<TaskPriority>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub deadline: Option<DateTime<Utc>>,

    // Ownership
    pub project_id: Uuid,
    pub created_by_id: Uuid,
    pub assigned_to_id: Option<Uuid>,

    // Audit
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Task {
    pub fn new(project_id: Uuid, title: String, created_by_id: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title,
            description: None,
            status: TaskStatus::default(),
            priority: Some(TaskPriority::default()),
            tags: Vec::new(),
            deadline: None,
            project_id,
            created_by_id,
            assigned_to_id: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Copy of this task with a different status; nothing else changes.
    pub fn with_status(&self, status: TaskStatus) -> Self {
        Self {
            status,
            ..self.clone()
        }
    }
}
