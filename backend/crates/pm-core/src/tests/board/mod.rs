mod list_id;
mod partition;
mod project_board;

use crate::{Task, TaskStatus};

use uuid::Uuid;

pub(crate) fn task_with_status(project_id: Uuid, title: &str, status: TaskStatus) -> Task {
    Task::new(project_id, title.to_string(), Uuid::new_v4()).with_status(status)
}
