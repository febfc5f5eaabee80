use pm_core::Project;

use serde::Serialize;

/// Projects visible to the caller, each carrying all of its tasks
#[derive(Debug, Serialize)]
pub struct ProjectListResponse {
    pub projects: Vec<Project>,
}
