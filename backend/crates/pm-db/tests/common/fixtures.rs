use pm_core::{Project, Task, TaskStatus};

use chrono::{Duration, Utc};
use uuid::Uuid;

/// Creates a test Project owned by `user_id`
pub fn create_test_project(user_id: Uuid) -> Project {
    Project::new(
        "Test Project".to_string(),
        Some("Test project description".to_string()),
        user_id,
    )
}

/// Creates a test Task with sensible defaults
pub fn create_test_task(project_id: Uuid, user_id: Uuid, title: &str) -> Task {
    Task::new(project_id, title.to_string(), user_id)
}

/// Creates a test Task with the given status, stamped `offset_secs` after now
pub fn create_test_task_at(
    project_id: Uuid,
    user_id: Uuid,
    title: &str,
    status: TaskStatus,
    offset_secs: i64,
) -> Task {
    let at = Utc::now() + Duration::seconds(offset_secs);
    Task {
        status,
        created_at: at,
        updated_at: at,
        ..Task::new(project_id, title.to_string(), user_id)
    }
}
