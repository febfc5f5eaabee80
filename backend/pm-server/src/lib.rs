pub mod api;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod state;

#[cfg(test)]
mod tests;

pub use api::{
    auth::{
        auth::{sign_in, sign_up},
        session_response::SessionResponse,
        sign_in_request::SignInRequest,
        sign_up_request::SignUpRequest,
    },
    error::ApiError,
    error::Result as ApiResult,
    extractors::current_user::{CurrentUser, USER_ID_HEADER},
    projects::{
        project_list_response::ProjectListResponse,
        project_response::ProjectResponse,
        projects::{create_project, list_projects},
    },
    tasks::{
        task_response::TaskResponse,
        tasks::{create_task, delete_task, update_task},
    },
    users::{user_list_response::UserListResponse, user_response::UserResponse, users::list_users},
};
pub use error::{Result as ServerResult, ServerError};
pub use state::AppState;

pub use crate::routes::build_router;
