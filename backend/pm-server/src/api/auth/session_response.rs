use pm_core::User;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Sign-in result. `token` and `expires_at` are only present with auth enabled.
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub user: User,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
}
