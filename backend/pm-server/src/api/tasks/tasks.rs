//! Task REST API handlers
//!
//! Every handler resolves the owning project first. A task in a project the
//! caller cannot see is reported as not found, never as forbidden.

use crate::api::validation;
use crate::{ApiError, ApiResult, AppState, CurrentUser, TaskResponse};

use pm_core::{NewTask, Project, Task, TaskChanges};
use pm_db::{ProjectRepository, TaskRepository, UserRepository};

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use chrono::Utc;
use uuid::Uuid;

/// POST /api/v1/tasks
///
/// Create a task. Status defaults to TODO and priority to MEDIUM.
pub async fn create_task(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    payload: Result<Json<NewTask>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<TaskResponse>)> {
    let Json(req) = payload?;

    let title = validation::required_title("title", &req.title, &state.validation)?;
    let description =
        validation::optional_description(req.description.as_deref(), &state.validation)?;

    let project = visible_project(&state, req.project_id, user.id).await?;

    let mut task = Task::new(project.id, title, user.id);
    task.description = description;
    task.status = req.status.unwrap_or_default();
    task.priority = Some(req.priority.unwrap_or_default());

    let repo = TaskRepository::new(state.pool.clone());
    repo.create(&task).await?;

    log::info!(
        "Created task {} in project {} ({})",
        task.id,
        project.id,
        task.status
    );

    Ok((StatusCode::CREATED, Json(TaskResponse { task })))
}

/// PATCH /api/v1/tasks/{id}
///
/// Write only the fields present in the body. An empty description clears it.
pub async fn update_task(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<String>,
    payload: Result<Json<TaskChanges>, JsonRejection>,
) -> ApiResult<Json<TaskResponse>> {
    let task_id = Uuid::parse_str(&id)?;
    let Json(changes) = payload?;

    if changes.is_empty() {
        return Err(ApiError::validation("body", "No fields to update"));
    }

    visible_task(&state, task_id, user.id).await?;

    let mut accepted = TaskChanges {
        status: changes.status,
        priority: changes.priority,
        ..TaskChanges::default()
    };
    if let Some(ref title) = changes.title {
        accepted.title = Some(validation::required_title("title", title, &state.validation)?);
    }
    if let Some(ref description) = changes.description {
        let description =
            validation::optional_description(Some(description.as_str()), &state.validation)?;
        accepted.description = Some(description.unwrap_or_default());
    }
    if let Some(assignee_id) = changes.assigned_to_id {
        let users = UserRepository::new(state.pool.clone());
        if users.find_by_id(assignee_id).await?.is_none() {
            return Err(ApiError::validation(
                "assigned_to_id",
                format!("User {} does not exist", assignee_id),
            ));
        }
        accepted.assigned_to_id = Some(assignee_id);
    }

    let repo = TaskRepository::new(state.pool.clone());
    let task = repo
        .apply_changes(task_id, &accepted, Utc::now())
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Task {} not found", task_id)))?;

    log::info!("Updated task {} (status {})", task.id, task.status);

    Ok(Json(TaskResponse { task }))
}

/// DELETE /api/v1/tasks/{id}
///
/// Remove a task and return it as it was
pub async fn delete_task(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<String>,
) -> ApiResult<Json<TaskResponse>> {
    let task_id = Uuid::parse_str(&id)?;
    let task = visible_task(&state, task_id, user.id).await?;

    let repo = TaskRepository::new(state.pool.clone());
    if !repo.delete(task.id).await? {
        return Err(ApiError::not_found(format!("Task {} not found", task_id)));
    }

    log::info!("Deleted task {}", task.id);

    Ok(Json(TaskResponse { task }))
}

// =============================================================================
// Helper Functions
// =============================================================================

async fn visible_project(
    state: &AppState,
    project_id: Uuid,
    user_id: Uuid,
) -> ApiResult<Project> {
    let repo = ProjectRepository::new(state.pool.clone());
    repo.find_by_id(project_id)
        .await?
        .filter(|project| project.is_visible_to(user_id))
        .ok_or_else(|| ApiError::not_found(format!("Project {} not found", project_id)))
}

async fn visible_task(state: &AppState, task_id: Uuid, user_id: Uuid) -> ApiResult<Task> {
    let not_found = || ApiError::not_found(format!("Task {} not found", task_id));

    let repo = TaskRepository::new(state.pool.clone());
    let task = repo.find_by_id(task_id).await?.ok_or_else(not_found)?;

    let projects = ProjectRepository::new(state.pool.clone());
    let visible = projects
        .find_by_id(task.project_id)
        .await?
        .is_some_and(|project| project.is_visible_to(user_id));

    if !visible {
        return Err(not_found());
    }

    Ok(task)
}
