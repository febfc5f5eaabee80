use crate::{CoreError, Result as CoreErrorResult, TaskStatus};

use std::panic::Location;

use error_location::ErrorLocation;
use uuid::Uuid;

/// Build the id of a project's list for `status`.
pub fn list_id_for(project_id: Uuid, status: TaskStatus) -> String {
    format!("{}-{}", project_id, status.slug())
}

/// Split a list id into its project prefix and the status it stands for.
///
/// Only the segment after the last `-` is inspected, so project ids that
/// themselves contain dashes (UUIDs) are fine. An unknown suffix is a defect
/// and is reported, not mapped to a default list.
#[track_caller]
pub fn parse_list_id(list_id: &str) -> CoreErrorResult<(&str, TaskStatus)> {
    let location = Location::caller();
    let invalid = || CoreError::InvalidListId {
        value: list_id.to_string(),
        location: ErrorLocation::from(location),
    };

    let (prefix, suffix) = list_id.rsplit_once('-').ok_or_else(invalid)?;

    if prefix.is_empty() {
        return Err(invalid());
    }

    let status = TaskStatus::from_slug(suffix).map_err(|_| invalid())?;

    Ok((prefix, status))
}

/// Recover the status a list id stands for.
#[track_caller]
pub fn status_from_list_id(list_id: &str) -> CoreErrorResult<TaskStatus> {
    parse_list_id(list_id).map(|(_, status)| status)
}

/// Status of one of `project_id`'s own lists. A well-formed list id that
/// belongs to another project is rejected as well.
#[track_caller]
pub fn project_list_status(project_id: Uuid, list_id: &str) -> CoreErrorResult<TaskStatus> {
    let location = Location::caller();
    let (prefix, status) = parse_list_id(list_id)?;

    if prefix != project_id.to_string() {
        return Err(CoreError::InvalidListId {
            value: list_id.to_string(),
            location: ErrorLocation::from(location),
        });
    }

    Ok(status)
}
