//! Project entity - container for tasks.

use crate::Task;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user-owned container of tasks.
///
/// `tasks` is filled when projects are fetched for a board. A freshly created
/// project comes back with an empty collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub created_by_id: Uuid,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl Project {
    /// Create a new project with no tasks
    pub fn new(name: String, description: Option<String>, created_by_id: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name,
            description,
            created_at: now,
            updated_at: now,
            created_by_id,
            tasks: Vec::new(),
        }
    }

    /// Visible to its creator and to anyone assigned at least one of its tasks
    pub fn is_visible_to(&self, user_id: Uuid) -> bool {
        self.created_by_id == user_id
            || self
                .tasks
                .iter()
                .any(|task| task.assigned_to_id == Some(user_id))
    }

    pub fn find_task(&self, task_id: Uuid) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == task_id)
    }
}
