use crate::Result as DbErrorResult;
use crate::repositories::rows::{TASK_COLUMNS, task_from_row};

use pm_core::{Task, TaskChanges};

use chrono::{DateTime, Utc};
use sqlx::{QueryBuilder, Sqlite, SqlitePool};
use uuid::Uuid;

pub struct TaskRepository {
    pool: SqlitePool,
}

impl TaskRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, task: &Task) -> DbErrorResult<()> {
        let tags = serde_json::to_string(&task.tags)
            .map_err(|e| crate::DbError::decode(format!("Unserializable task tags: {}", e)))?;

        sqlx::query(
            r#"
                INSERT INTO tasks (
                    id, title, description, status, priority, tags, deadline,
                    project_id, created_by, assigned_to, created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(task.id.to_string())
        .bind(&task.title)
        .bind(&task.description)
        .bind(task.status.as_str())
        .bind(task.priority.map(|p| p.as_str()))
        .bind(tags)
        .bind(task.deadline.map(|dt| dt.timestamp()))
        .bind(task.project_id.to_string())
        .bind(task.created_by_id.to_string())
        .bind(task.assigned_to_id.map(|id| id.to_string()))
        .bind(task.created_at.timestamp())
        .bind(task.updated_at.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<Task>> {
        let sql = format!("SELECT {} FROM tasks WHERE id = ?", TASK_COLUMNS);

        let row = sqlx::query(&sql)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(task_from_row).transpose()
    }

    /// Tasks of one project in creation order.
    pub async fn find_by_project(&self, project_id: Uuid) -> DbErrorResult<Vec<Task>> {
        let sql = format!(
            "SELECT {} FROM tasks WHERE project_id = ? ORDER BY created_at, rowid",
            TASK_COLUMNS
        );

        let rows = sqlx::query(&sql)
            .bind(project_id.to_string())
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(task_from_row).collect()
    }

    /// Write only the fields present in `changes` and return the task as
    /// stored afterwards, or `None` when no task has this id.
    ///
    /// Columns not named in `changes` are left untouched, so concurrent edits
    /// of different fields both survive. An empty description is stored as
    /// NULL.
    pub async fn apply_changes(
        &self,
        id: Uuid,
        changes: &TaskChanges,
        updated_at: DateTime<Utc>,
    ) -> DbErrorResult<Option<Task>> {
        let mut tx = self.pool.begin().await?;

        let mut query = QueryBuilder::<Sqlite>::new("UPDATE tasks SET ");
        let mut columns = query.separated(", ");
        if let Some(ref title) = changes.title {
            columns.push("title = ").push_bind_unseparated(title.clone());
        }
        if let Some(ref description) = changes.description {
            let description = Some(description.clone()).filter(|d| !d.is_empty());
            columns
                .push("description = ")
                .push_bind_unseparated(description);
        }
        if let Some(status) = changes.status {
            columns.push("status = ").push_bind_unseparated(status.as_str());
        }
        if let Some(priority) = changes.priority {
            columns
                .push("priority = ")
                .push_bind_unseparated(priority.as_str());
        }
        if let Some(assignee_id) = changes.assigned_to_id {
            columns
                .push("assigned_to = ")
                .push_bind_unseparated(assignee_id.to_string());
        }
        columns
            .push("updated_at = ")
            .push_bind_unseparated(updated_at.timestamp());
        query.push(" WHERE id = ").push_bind(id.to_string());

        let result = query.build().execute(&mut *tx).await?;
        if result.rows_affected() == 0 {
            return Ok(None);
        }

        let sql = format!("SELECT {} FROM tasks WHERE id = ?", TASK_COLUMNS);
        let row = sqlx::query(&sql)
            .bind(id.to_string())
            .fetch_optional(&mut *tx)
            .await?;
        let task = row.as_ref().map(task_from_row).transpose()?;

        tx.commit().await?;

        Ok(task)
    }

    /// Hard delete. Returns whether a row was removed.
    pub async fn delete(&self, id: Uuid) -> DbErrorResult<bool> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
