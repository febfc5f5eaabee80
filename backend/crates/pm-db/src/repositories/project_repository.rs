//! Project persistence.
//!
//! Projects are always returned with their tasks attached. Visibility follows
//! the board rule: a user sees the projects they created plus every project
//! in which at least one task is assigned to them.

use crate::Result as DbErrorResult;
use crate::repositories::rows::{PROJECT_COLUMNS, TASK_COLUMNS, project_from_row, task_from_row};

use pm_core::{Project, Task};

use std::collections::HashMap;

use sqlx::SqlitePool;
use uuid::Uuid;

// Binds the user id twice.
const VISIBLE_PROJECT_FILTER: &str = "created_by = ? \
     OR EXISTS (SELECT 1 FROM tasks t WHERE t.project_id = projects.id AND t.assigned_to = ?)";

pub struct ProjectRepository {
    pool: SqlitePool,
}

impl ProjectRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, project: &Project) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                INSERT INTO projects (id, name, description, created_at, updated_at, created_by)
                VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(project.id.to_string())
        .bind(&project.name)
        .bind(&project.description)
        .bind(project.created_at.timestamp())
        .bind(project.updated_at.timestamp())
        .bind(project.created_by_id.to_string())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<Project>> {
        let sql = format!("SELECT {} FROM projects WHERE id = ?", PROJECT_COLUMNS);

        let row = sqlx::query(&sql)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let mut project = project_from_row(&row)?;

        let tasks_sql = format!(
            "SELECT {} FROM tasks WHERE project_id = ? ORDER BY created_at, rowid",
            TASK_COLUMNS
        );
        let task_rows = sqlx::query(&tasks_sql)
            .bind(id.to_string())
            .fetch_all(&self.pool)
            .await?;

        project.tasks = task_rows
            .iter()
            .map(task_from_row)
            .collect::<DbErrorResult<Vec<Task>>>()?;

        Ok(Some(project))
    }

    /// Every project visible to `user_id`, oldest first, each with all of
    /// its tasks (not only the ones assigned to the user).
    pub async fn find_visible_to(&self, user_id: Uuid) -> DbErrorResult<Vec<Project>> {
        let user = user_id.to_string();

        let projects_sql = format!(
            "SELECT {} FROM projects WHERE {} ORDER BY created_at, rowid",
            PROJECT_COLUMNS, VISIBLE_PROJECT_FILTER
        );
        let project_rows = sqlx::query(&projects_sql)
            .bind(&user)
            .bind(&user)
            .fetch_all(&self.pool)
            .await?;

        let mut projects = project_rows
            .iter()
            .map(project_from_row)
            .collect::<DbErrorResult<Vec<Project>>>()?;

        if projects.is_empty() {
            return Ok(projects);
        }

        let tasks_sql = format!(
            "SELECT {} FROM tasks WHERE project_id IN (SELECT id FROM projects WHERE {}) \
             ORDER BY created_at, rowid",
            TASK_COLUMNS, VISIBLE_PROJECT_FILTER
        );
        let task_rows = sqlx::query(&tasks_sql)
            .bind(&user)
            .bind(&user)
            .fetch_all(&self.pool)
            .await?;

        let mut tasks_by_project: HashMap<Uuid, Vec<Task>> = HashMap::new();
        for row in &task_rows {
            let task = task_from_row(row)?;
            tasks_by_project
                .entry(task.project_id)
                .or_default()
                .push(task);
        }

        for project in &mut projects {
            project.tasks = tasks_by_project.remove(&project.id).unwrap_or_default();
        }

        Ok(projects)
    }
}
