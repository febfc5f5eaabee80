//! Field checks shared by the REST handlers.
//!
//! Limits come from `ValidationConfig`; lengths are counted in characters.

use crate::{ApiError, ApiResult};

use pm_config::ValidationConfig;
use pm_core::trimmed_non_empty;

/// Trimmed, non-empty, and at most `max_title_length` characters.
#[track_caller]
pub fn required_title(
    field: &'static str,
    value: &str,
    limits: &ValidationConfig,
) -> ApiResult<String> {
    let trimmed = trimmed_non_empty(field, value)?;
    check_length(field, &trimmed, limits.max_title_length)?;
    Ok(trimmed)
}

/// Trims the description; blank becomes `None`.
#[track_caller]
pub fn optional_description(
    value: Option<&str>,
    limits: &ValidationConfig,
) -> ApiResult<Option<String>> {
    let Some(trimmed) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(None);
    };
    check_length("description", trimmed, limits.max_description_length)?;
    Ok(Some(trimmed.to_string()))
}

#[track_caller]
pub fn email(value: &str) -> ApiResult<String> {
    let trimmed = trimmed_non_empty("email", value)?;
    if !trimmed.contains('@') {
        return Err(ApiError::validation("email", "Email must contain '@'"));
    }
    Ok(trimmed.to_lowercase())
}

#[track_caller]
pub fn password(value: &str, limits: &ValidationConfig) -> ApiResult<()> {
    if value.chars().count() < limits.min_password_length {
        return Err(ApiError::validation(
            "password",
            format!(
                "Password must be at least {} characters",
                limits.min_password_length
            ),
        ));
    }
    Ok(())
}

#[track_caller]
fn check_length(field: &'static str, value: &str, max: usize) -> ApiResult<()> {
    let len = value.chars().count();
    if len > max {
        return Err(ApiError::validation(
            field,
            format!("{} must be at most {} characters, got {}", field, max, len),
        ));
    }
    Ok(())
}
