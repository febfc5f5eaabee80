//! Axum extractors for REST API authentication

use crate::{ApiError, AppState};

use pm_core::User;
use pm_db::UserRepository;

use std::future::Future;

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use uuid::Uuid;

pub const USER_ID_HEADER: &str = "X-User-Id";

/// The signed-in user making the request
///
/// With auth enabled the user comes from the `Authorization: Bearer` session
/// token; otherwise from the `X-User-Id` header. Either way the user must
/// exist, or the request is rejected with 401.
pub struct CurrentUser(pub User);

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let user_id = match state.jwt_validator.as_deref() {
                Some(validator) => {
                    let header = parts
                        .headers
                        .get(AUTHORIZATION)
                        .and_then(|value| value.to_str().ok());
                    validator.validate_header(header)?.user_id()?
                }
                None => {
                    let raw = parts
                        .headers
                        .get(USER_ID_HEADER)
                        .and_then(|value| value.to_str().ok())
                        .ok_or_else(|| ApiError::unauthorized("Missing X-User-Id header"))?;
                    Uuid::parse_str(raw.trim()).map_err(|_| {
                        log::warn!("Invalid UUID in X-User-Id header: {}", raw);
                        ApiError::unauthorized("X-User-Id must be a UUID")
                    })?
                }
            };

            let user = UserRepository::new(state.pool.clone())
                .find_by_id(user_id)
                .await?
                .ok_or_else(|| ApiError::unauthorized(format!("Unknown user {}", user_id)))?;

            log::debug!("Request from user {}", user.id);
            Ok(CurrentUser(user))
        }
    }
}
