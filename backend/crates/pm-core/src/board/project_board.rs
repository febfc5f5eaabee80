use crate::{BoardList, Project, Task, TaskStatus, partition};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A project together with its derived lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectBoard {
    pub project: Project,
    pub lists: [BoardList; 3],
}

impl ProjectBoard {
    pub fn from_project(project: Project) -> Self {
        let lists = partition(project.id, &project.tasks);
        Self { project, lists }
    }

    pub fn id(&self) -> Uuid {
        self.project.id
    }

    pub fn list(&self, status: TaskStatus) -> &BoardList {
        &self.lists[status.position()]
    }

    pub fn find_task(&self, task_id: Uuid) -> Option<&Task> {
        self.project.find_task(task_id)
    }

    /// New board with one task's status rewritten and all lists rebuilt.
    ///
    /// Returns `None` when the task is not part of this project.
    pub fn with_task_status(&self, task_id: Uuid, status: TaskStatus) -> Option<Self> {
        self.find_task(task_id)?;

        let tasks = self
            .project
            .tasks
            .iter()
            .map(|task| {
                if task.id == task_id {
                    task.with_status(status)
                } else {
                    task.clone()
                }
            })
            .collect();

        Some(Self::from_project(Project {
            tasks,
            ..self.project.clone()
        }))
    }
}
