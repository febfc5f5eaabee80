use pm_core::Project;

use serde::Serialize;

/// Single project response
#[derive(Debug, Serialize)]
pub struct ProjectResponse {
    pub project: Project,
}
