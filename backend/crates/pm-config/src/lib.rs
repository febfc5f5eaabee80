mod auth_config;
mod client_config;
mod config;
mod database_config;
mod error;
mod log_level;
mod logging_config;
mod server_config;
mod validation_config;

pub use auth_config::AuthConfig;
pub use client_config::ClientConfig;
pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;
pub use validation_config::ValidationConfig;

#[cfg(test)]
mod tests;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const MIN_PORT: u16 = 1024;
const DEFAULT_MAX_CONNECTIONS: usize = 1000;
const MIN_MAX_CONNECTIONS: usize = 1;
const MAX_MAX_CONNECTIONS: usize = 100_000;

const DEFAULT_DATABASE_FILENAME: &str = "board.db";
const DEFAULT_DATABASE_POOL_SIZE: u32 = 5;
const DEFAULT_DATABASE_BUSY_TIMEOUT_SECS: u64 = 5;

const DEFAULT_AUTH_ENABLED: bool = false;
const MIN_JWT_SECRET_LENGTH: usize = 32;
const DEFAULT_SESSION_TTL_SECS: u64 = 30 * 24 * 60 * 60;
const MIN_SESSION_TTL_SECS: u64 = 60;
const DEFAULT_PASSWORD_HASH_ROUNDS: u32 = 100_000;
const MIN_PASSWORD_HASH_ROUNDS: u32 = 1_000;
const MAX_PASSWORD_HASH_ROUNDS: u32 = 10_000_000;

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;

const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8000";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 15;
const MIN_REQUEST_TIMEOUT_SECS: u64 = 1;
const MAX_REQUEST_TIMEOUT_SECS: u64 = 300;
