//! Inputs of the remote task/project operations.
//!
//! These serialize to exactly the JSON bodies the REST API accepts.

pub mod new_project;
pub mod new_task;
pub mod task_changes;

use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;

/// Trim `value` and reject it if nothing is left.
#[track_caller]
pub fn trimmed_non_empty(field: &'static str, value: &str) -> CoreErrorResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation {
            field,
            message: format!("{} is required", field),
            location: ErrorLocation::from(Location::caller()),
        });
    }
    Ok(trimmed.to_string())
}
