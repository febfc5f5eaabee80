use crate::{MutationKey, RemoteError};

use pm_core::CoreError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum BoardError {
    #[error("Validation error: {field}: {message} {location}")]
    Validation {
        field: &'static str,
        message: String,
        location: ErrorLocation,
    },

    #[error("{source}")]
    Core { source: CoreError },

    #[error("A mutation for {key} is already in flight {location}")]
    MutationInFlight {
        key: MutationKey,
        location: ErrorLocation,
    },

    #[error("Project {project_id} is not on the board {location}")]
    UnknownProject {
        project_id: Uuid,
        location: ErrorLocation,
    },

    #[error("Task {task_id} is not on the board {location}")]
    UnknownTask {
        task_id: Uuid,
        location: ErrorLocation,
    },

    #[error("Remote call failed: {source} {location}")]
    Remote {
        #[source]
        source: RemoteError,
        location: ErrorLocation,
    },
}

impl BoardError {
    #[track_caller]
    pub(crate) fn in_flight(key: MutationKey) -> Self {
        Self::MutationInFlight {
            key,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub(crate) fn unknown_project(project_id: Uuid) -> Self {
        Self::UnknownProject {
            project_id,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub(crate) fn unknown_task(task_id: Uuid) -> Self {
        Self::UnknownTask {
            task_id,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<CoreError> for BoardError {
    fn from(source: CoreError) -> Self {
        match source {
            CoreError::Validation {
                field,
                message,
                location,
            } => Self::Validation {
                field,
                message,
                location,
            },
            other => Self::Core { source: other },
        }
    }
}

impl From<RemoteError> for BoardError {
    #[track_caller]
    fn from(source: RemoteError) -> Self {
        Self::Remote {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, BoardError>;
