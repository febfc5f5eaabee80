pub mod auth;
pub mod session_response;
pub mod sign_in_request;
pub mod sign_up_request;
