pub mod auth;
pub mod error;
pub mod extractors;
pub mod projects;
pub mod tasks;
pub mod users;
pub mod validation;
