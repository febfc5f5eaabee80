use crate::{
    AppState, create_project, create_task, delete_task, health, list_projects, list_users,
    sign_in, sign_up, update_task,
};

use axum::{
    Router,
    routing::{get, patch, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/auth/sign-up", post(sign_up))
        .route("/auth/sign-in", post(sign_in))
        .route("/users", get(list_users))
        .route("/projects", get(list_projects).post(create_project))
        .route("/tasks", post(create_task))
        .route("/tasks/{id}", patch(update_task).delete(delete_task));

    Router::new()
        .nest("/api/v1", api)
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        // Add shared state
        .with_state(state)
        // CORS middleware (browser clients on other origins)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
