use pm_core::Task;

use serde::Serialize;

/// Single task response
#[derive(Debug, Serialize)]
pub struct TaskResponse {
    pub task: Task,
}
