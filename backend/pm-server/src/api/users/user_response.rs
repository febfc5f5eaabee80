use pm_core::User;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub user: User,
}
