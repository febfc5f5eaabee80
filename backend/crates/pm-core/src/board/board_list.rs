use crate::{Task, TaskStatus, list_id_for};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One status column of a project board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardList {
    /// Synthesized as `<project_id>-<status slug>`
    pub id: String,
    pub status: TaskStatus,
    pub title: String,
    pub cards: Vec<Task>,
}

impl BoardList {
    pub fn id_for(project_id: Uuid, status: TaskStatus) -> String {
        list_id_for(project_id, status)
    }

    pub fn empty(project_id: Uuid, status: TaskStatus) -> Self {
        Self {
            id: Self::id_for(project_id, status),
            status,
            title: status.title().to_string(),
            cards: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
