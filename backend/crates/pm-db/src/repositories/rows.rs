use crate::{DbError, Result as DbErrorResult};

use pm_core::{Project, Task, TaskPriority, TaskStatus, User};

use std::str::FromStr;

use chrono::{DateTime, Utc};
use sqlx::Row;
use sqlx::sqlite::SqliteRow;
use uuid::Uuid;

pub(crate) const TASK_COLUMNS: &str = "id, title, description, status, priority, tags, deadline, \
     project_id, created_by, assigned_to, created_at, updated_at";

pub(crate) const PROJECT_COLUMNS: &str =
    "id, name, description, created_at, updated_at, created_by";

pub(crate) const USER_COLUMNS: &str = "id, name, email, image";

pub(crate) fn uuid_column(row: &SqliteRow, column: &str) -> DbErrorResult<Uuid> {
    let raw: String = row.try_get(column)?;
    Uuid::parse_str(&raw)
        .map_err(|e| DbError::decode(format!("Invalid UUID in {}: {}", column, e)))
}

pub(crate) fn optional_uuid_column(row: &SqliteRow, column: &str) -> DbErrorResult<Option<Uuid>> {
    let raw: Option<String> = row.try_get(column)?;
    raw.map(|value| {
        Uuid::parse_str(&value)
            .map_err(|e| DbError::decode(format!("Invalid UUID in {}: {}", column, e)))
    })
    .transpose()
}

pub(crate) fn timestamp_column(row: &SqliteRow, column: &str) -> DbErrorResult<DateTime<Utc>> {
    let seconds: i64 = row.try_get(column)?;
    DateTime::from_timestamp(seconds, 0)
        .ok_or_else(|| DbError::decode(format!("Invalid timestamp in {}", column)))
}

pub(crate) fn task_from_row(row: &SqliteRow) -> DbErrorResult<Task> {
    let status: String = row.try_get("status")?;
    let priority: Option<String> = row.try_get("priority")?;
    let tags: String = row.try_get("tags")?;
    let deadline: Option<i64> = row.try_get("deadline")?;

    Ok(Task {
        id: uuid_column(row, "id")?,
        title: row.try_get("title")?,
        description: row.try_get("description")?,
        status: TaskStatus::from_str(&status)?,
        priority: priority
            .as_deref()
            .map(TaskPriority::from_str)
            .transpose()?,
        tags: serde_json::from_str(&tags)
            .map_err(|e| DbError::decode(format!("Invalid JSON in tasks.tags: {}", e)))?,
        deadline: deadline
            .map(|seconds| {
                DateTime::from_timestamp(seconds, 0)
                    .ok_or_else(|| DbError::decode("Invalid timestamp in tasks.deadline"))
            })
            .transpose()?,
        project_id: uuid_column(row, "project_id")?,
        created_by_id: uuid_column(row, "created_by")?,
        assigned_to_id: optional_uuid_column(row, "assigned_to")?,
        created_at: timestamp_column(row, "created_at")?,
        updated_at: timestamp_column(row, "updated_at")?,
    })
}

/// Decodes a project row. `tasks` is left empty for the caller to fill.
pub(crate) fn project_from_row(row: &SqliteRow) -> DbErrorResult<Project> {
    Ok(Project {
        id: uuid_column(row, "id")?,
        name: row.try_get("name")?,
        description: row.try_get("description")?,
        created_at: timestamp_column(row, "created_at")?,
        updated_at: timestamp_column(row, "updated_at")?,
        created_by_id: uuid_column(row, "created_by")?,
        tasks: Vec::new(),
    })
}

pub(crate) fn user_from_row(row: &SqliteRow) -> DbErrorResult<User> {
    Ok(User {
        id: uuid_column(row, "id")?,
        name: row.try_get("name")?,
        email: row.try_get("email")?,
        image: row.try_get("image")?,
    })
}
