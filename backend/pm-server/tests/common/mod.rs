#![allow(dead_code)]

//! Test infrastructure for pm-server API tests

use pm_core::User;
use pm_db::UserRepository;
use pm_server::{AppState, build_router};

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

/// Create AppState for testing, in development mode over in-memory SQLite
pub async fn create_test_app_state() -> AppState {
    let pool = pm_db::open_in_memory()
        .await
        .expect("Failed to create test database");

    let mut state = AppState::new(pool);
    // Keep sign-up fast in tests
    state.password_hasher = pm_auth::PasswordHasher::new(1_000);
    state
}

/// Create a test user without a password
pub async fn create_test_user(state: &AppState, name: &str) -> User {
    let user = User {
        id: Uuid::new_v4(),
        name: Some(name.to_string()),
        email: Some(format!("{}@test.local", name.to_lowercase())),
        image: None,
    };

    UserRepository::new(state.pool.clone())
        .create(&user, None)
        .await
        .expect("Failed to create test user");

    user
}

/// One request through a fresh router. `user` goes in the X-User-Id header.
pub async fn send(
    state: &AppState,
    method: &str,
    uri: &str,
    user: Option<Uuid>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(user_id) = user {
        builder = builder.header("X-User-Id", user_id.to_string());
    }

    let request = match body {
        Some(json) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = build_router(state.clone()).oneshot(request).await.unwrap();
    let status = response.status();

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            Value::String(String::from_utf8_lossy(&bytes).into_owned())
        })
    };

    (status, json)
}

/// Create a project through the API and return its id
pub async fn create_test_project(state: &AppState, owner: Uuid, name: &str) -> Uuid {
    let (status, json) = send(
        state,
        "POST",
        "/api/v1/projects",
        Some(owner),
        Some(serde_json::json!({ "name": name })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{json}");

    Uuid::parse_str(json["project"]["id"].as_str().unwrap()).unwrap()
}

/// Create a task through the API and return its id
pub async fn create_test_task(
    state: &AppState,
    owner: Uuid,
    project_id: Uuid,
    title: &str,
) -> Uuid {
    let (status, json) = send(
        state,
        "POST",
        "/api/v1/tasks",
        Some(owner),
        Some(serde_json::json!({ "project_id": project_id, "title": title })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{json}");

    Uuid::parse_str(json["task"]["id"].as_str().unwrap()).unwrap()
}
