use pm_core::{NewProject, NewTask, Project, Task, TaskChanges};

use std::panic::Location;
use std::time::Duration;

use async_trait::async_trait;
use error_location::ErrorLocation;
use thiserror::Error;
use uuid::Uuid;

/// The five server operations the board depends on.
///
/// Implementations identify the session user themselves; `fetch_projects`
/// returns only the projects visible to that user, each with all its tasks.
#[async_trait]
pub trait RemoteOperations: Send + Sync {
    async fn create_project(&self, input: NewProject) -> RemoteResult<Project>;

    async fn create_task(&self, input: NewTask) -> RemoteResult<Task>;

    /// Applies only the fields present in `changes`.
    async fn update_task(&self, task_id: Uuid, changes: TaskChanges) -> RemoteResult<Task>;

    /// Returns the task as it was before deletion.
    async fn delete_task(&self, task_id: Uuid) -> RemoteResult<Task>;

    async fn fetch_projects(&self) -> RemoteResult<Vec<Project>>;
}

#[derive(Error, Debug)]
pub enum RemoteError {
    #[error("Server unreachable: {message} {location}")]
    Unavailable {
        message: String,
        location: ErrorLocation,
    },

    #[error("Server rejected request ({status} {code}): {message} {location}")]
    Rejected {
        status: u16,
        code: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("No response within {after:?} {location}")]
    Timeout {
        after: Duration,
        location: ErrorLocation,
    },

    #[error("Unreadable response: {message} {location}")]
    InvalidResponse {
        message: String,
        location: ErrorLocation,
    },
}

impl RemoteError {
    #[track_caller]
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn rejected(status: u16, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Rejected {
            status,
            code: code.into(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn timeout(after: Duration) -> Self {
        Self::Timeout {
            after,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::InvalidResponse {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Server-side error code, when the server answered with one.
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Rejected { code, .. } => Some(code),
            _ => None,
        }
    }
}

pub type RemoteResult<T> = std::result::Result<T, RemoteError>;
