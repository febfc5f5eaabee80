use serde::Deserialize;

/// Request body for POST /api/v1/auth/sign-up
#[derive(Debug, Deserialize)]
pub struct SignUpRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}
