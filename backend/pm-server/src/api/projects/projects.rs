//! Project REST API handlers

use crate::api::validation;
use crate::{ApiResult, AppState, CurrentUser, ProjectListResponse, ProjectResponse};

use pm_core::{NewProject, Project};
use pm_db::ProjectRepository;

use axum::{Json, extract::State, extract::rejection::JsonRejection, http::StatusCode};

/// GET /api/v1/projects
///
/// Projects the caller created or has at least one task assigned in
pub async fn list_projects(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> ApiResult<Json<ProjectListResponse>> {
    let repo = ProjectRepository::new(state.pool.clone());
    let projects = repo.find_visible_to(user.id).await?;

    log::debug!("User {} sees {} projects", user.id, projects.len());

    Ok(Json(ProjectListResponse { projects }))
}

/// POST /api/v1/projects
///
/// Create a project owned by the caller
pub async fn create_project(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    payload: Result<Json<NewProject>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<ProjectResponse>)> {
    let Json(req) = payload?;

    let name = validation::required_title("name", &req.name, &state.validation)?;
    let description =
        validation::optional_description(req.description.as_deref(), &state.validation)?;

    let project = Project::new(name, description, user.id);

    let repo = ProjectRepository::new(state.pool.clone());
    repo.create(&project).await?;

    log::info!("Created project {} for user {}", project.id, user.id);

    Ok((StatusCode::CREATED, Json(ProjectResponse { project })))
}
