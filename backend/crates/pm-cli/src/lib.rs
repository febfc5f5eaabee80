//! pm-cli library
//!
//! The typed HTTP client for the board REST API, and the `pm` command
//! dispatcher built on top of it.

pub(crate) mod app;
pub(crate) mod auth_commands;
pub(crate) mod board_commands;
pub(crate) mod cli;
pub(crate) mod client;
pub(crate) mod commands;
pub(crate) mod error;
pub(crate) mod project_commands;
pub(crate) mod task_commands;

#[cfg(test)]
mod tests;

pub use app::run;
pub use cli::Cli;
pub use client::{CliClientResult, Client, ClientError, Identity, Session};
pub use error::{CliError, Result as CliResult};
