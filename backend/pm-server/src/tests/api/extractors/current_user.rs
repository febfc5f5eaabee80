use crate::{ApiError, AppState, CurrentUser};

use pm_auth::TokenIssuer;
use pm_core::User;
use pm_db::UserRepository;

use axum::{body::Body, extract::FromRequestParts, http::Request};
use uuid::Uuid;

const SECRET: &[u8] = b"test-secret-that-is-long-enough-for-hs256";

async fn create_test_state() -> AppState {
    let pool = pm_db::open_in_memory()
        .await
        .expect("Failed to create test pool");
    AppState::new(pool)
}

async fn create_user(state: &AppState) -> User {
    let user = User {
        id: Uuid::new_v4(),
        name: Some("Ada Lovelace".into()),
        email: Some(format!("{}@test.local", Uuid::new_v4())),
        image: None,
    };
    UserRepository::new(state.pool.clone())
        .create(&user, None)
        .await
        .expect("Failed to create user");
    user
}

async fn extract(
    state: &AppState,
    header: Option<(&str, String)>,
) -> Result<CurrentUser, ApiError> {
    let mut builder = Request::builder();
    if let Some((name, value)) = header {
        builder = builder.header(name, value);
    }
    let (mut parts, _body) = builder.body(Body::empty()).unwrap().into_parts();
    CurrentUser::from_request_parts(&mut parts, state).await
}

#[tokio::test]
async fn test_extractor_with_valid_header() {
    let state = create_test_state().await;
    let user = create_user(&state).await;

    let result = extract(&state, Some(("X-User-Id", user.id.to_string()))).await;

    assert_eq!(result.unwrap().0, user);
}

#[tokio::test]
async fn test_extractor_without_header_is_unauthorized() {
    let state = create_test_state().await;

    let result = extract(&state, None).await;

    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
}

#[tokio::test]
async fn test_extractor_with_invalid_uuid_is_unauthorized() {
    let state = create_test_state().await;

    let result = extract(&state, Some(("X-User-Id", "not-a-valid-uuid".into()))).await;

    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
}

#[tokio::test]
async fn test_extractor_with_unknown_user_is_unauthorized() {
    let state = create_test_state().await;

    let result = extract(&state, Some(("X-User-Id", Uuid::new_v4().to_string()))).await;

    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
}

#[tokio::test]
async fn test_extractor_with_bearer_token() {
    let state = create_test_state().await.with_session_secret(SECRET, 3600);
    let user = create_user(&state).await;
    let issued = TokenIssuer::with_hs256(SECRET, 3600).issue(user.id).unwrap();

    let result = extract(
        &state,
        Some(("Authorization", format!("Bearer {}", issued.token))),
    )
    .await;

    assert_eq!(result.unwrap().0.id, user.id);
}

#[tokio::test]
async fn test_extractor_ignores_user_header_when_auth_enabled() {
    let state = create_test_state().await.with_session_secret(SECRET, 3600);
    let user = create_user(&state).await;

    let result = extract(&state, Some(("X-User-Id", user.id.to_string()))).await;

    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
}

#[tokio::test]
async fn test_extractor_rejects_token_signed_with_other_secret() {
    let state = create_test_state().await.with_session_secret(SECRET, 3600);
    let user = create_user(&state).await;
    let forged = TokenIssuer::with_hs256(b"another-secret-of-sufficient-length!!", 3600)
        .issue(user.id)
        .unwrap();

    let result = extract(
        &state,
        Some(("Authorization", format!("Bearer {}", forged.token))),
    )
    .await;

    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
}
