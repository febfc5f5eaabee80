//! Sign-up and sign-in handlers
//!
//! Password hashing is CPU-bound (PBKDF2), so it runs on the blocking pool.

use crate::api::validation;
use crate::{
    ApiError, ApiResult, AppState, SessionResponse, SignInRequest, SignUpRequest, UserResponse,
};

use pm_core::User;
use pm_db::{DbError, UserRepository};

use std::panic::Location;

use axum::{Json, extract::State, extract::rejection::JsonRejection, http::StatusCode};
use error_location::ErrorLocation;
use uuid::Uuid;

const INVALID_CREDENTIALS: &str = "Invalid email or password";

/// POST /api/v1/auth/sign-up
///
/// Register a user with a salted password hash. A taken email is a 409.
pub async fn sign_up(
    State(state): State<AppState>,
    payload: Result<Json<SignUpRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<UserResponse>)> {
    let Json(req) = payload?;

    let name = validation::required_title("name", &req.name, &state.validation)?;
    let email = validation::email(&req.email)?;
    validation::password(&req.password, &state.validation)?;

    let hasher = state.password_hasher;
    let password = req.password;
    let password_hash = tokio::task::spawn_blocking(move || hasher.hash(&password))
        .await
        .map_err(|e| ApiError::internal(format!("Password hashing failed: {}", e)))?;

    let user = User {
        id: Uuid::new_v4(),
        name: Some(name),
        email: Some(email),
        image: None,
    };

    let repo = UserRepository::new(state.pool.clone());
    repo.create(&user, Some(&password_hash))
        .await
        .map_err(|e| match e {
            DbError::UniqueViolation { .. } => ApiError::Conflict {
                message: "Email is already registered".to_string(),
                field: Some("email".to_string()),
                location: ErrorLocation::from(Location::caller()),
            },
            other => ApiError::from(other),
        })?;

    log::info!("Registered user {}", user.id);

    Ok((StatusCode::CREATED, Json(UserResponse { user })))
}

/// POST /api/v1/auth/sign-in
///
/// Verify credentials. Unknown email and wrong password are indistinguishable.
pub async fn sign_in(
    State(state): State<AppState>,
    payload: Result<Json<SignInRequest>, JsonRejection>,
) -> ApiResult<Json<SessionResponse>> {
    let Json(req) = payload?;
    let email = validation::email(&req.email)?;

    let repo = UserRepository::new(state.pool.clone());
    let credentials = repo
        .find_credentials_by_email(&email)
        .await?
        .ok_or_else(|| ApiError::unauthorized(INVALID_CREDENTIALS))?;

    let Some(stored) = credentials.password_hash else {
        return Err(ApiError::unauthorized(INVALID_CREDENTIALS));
    };

    let hasher = state.password_hasher;
    let password = req.password;
    let verified = tokio::task::spawn_blocking(move || hasher.verify(&password, &stored))
        .await
        .map_err(|e| ApiError::internal(format!("Password check failed: {}", e)))??;

    if !verified {
        return Err(ApiError::unauthorized(INVALID_CREDENTIALS));
    }

    let user = credentials.user;
    let (token, expires_at) = match state.token_issuer.as_deref() {
        Some(issuer) => {
            let issued = issuer.issue(user.id)?;
            (Some(issued.token), Some(issued.expires_at))
        }
        None => (None, None),
    };

    log::info!("User {} signed in", user.id);

    Ok(Json(SessionResponse {
        user,
        token,
        expires_at,
    }))
}
