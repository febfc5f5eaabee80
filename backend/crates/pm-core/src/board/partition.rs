use crate::{BoardList, Task, TaskStatus};

use uuid::Uuid;

/// Split a project's tasks into its three lists.
///
/// Output order is always To Do, In Progress, Done. Each list keeps the
/// relative order the tasks had in `tasks`, and every task lands in exactly
/// one list.
pub fn partition(project_id: Uuid, tasks: &[Task]) -> [BoardList; 3] {
    let mut lists = TaskStatus::ALL.map(|status| BoardList::empty(project_id, status));

    for task in tasks {
        lists[task.status.position()].cards.push(task.clone());
    }

    lists
}
