use serde::Deserialize;

/// Request body for POST /api/v1/auth/sign-in
#[derive(Debug, Deserialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}
