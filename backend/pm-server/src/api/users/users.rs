use crate::{ApiResult, AppState, CurrentUser, UserListResponse};

use pm_db::UserRepository;

use axum::{Json, extract::State};

/// GET /api/v1/users
///
/// Every user, for the assignee picker
pub async fn list_users(
    State(state): State<AppState>,
    CurrentUser(_user): CurrentUser,
) -> ApiResult<Json<UserListResponse>> {
    let repo = UserRepository::new(state.pool.clone());
    let users = repo.find_all().await?;

    Ok(Json(UserListResponse { users }))
}
