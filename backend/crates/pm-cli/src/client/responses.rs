//! Response envelopes of the REST API, as the client reads them.

use pm_core::{Project, Task, User};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub(crate) struct ProjectListResponse {
    pub projects: Vec<Project>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ProjectResponse {
    pub project: Project,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TaskResponse {
    pub task: Task,
}

#[derive(Debug, Deserialize)]
pub(crate) struct UserResponse {
    pub user: User,
}

#[derive(Debug, Deserialize)]
pub(crate) struct UserListResponse {
    pub users: Vec<User>,
}

/// Signed-in user plus a session token when the server has auth enabled
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub user: User,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub code: String,
    pub message: String,
    #[serde(default)]
    pub field: Option<String>,
}
