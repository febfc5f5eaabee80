use crate::ClientError;

use pm_board::BoardError;
use pm_config::ConfigError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("{source}")]
    Client {
        #[from]
        source: ClientError,
    },

    /// `summary` is the board's user-facing error message when one was set
    #[error("{summary}: {source}")]
    Board {
        summary: String,
        #[source]
        source: BoardError,
    },

    #[error("{source}")]
    Config {
        #[from]
        source: ConfigError,
    },

    #[error("Failed to serialize output: {source}")]
    Output {
        #[from]
        source: serde_json::Error,
    },

    #[error("{message} {location}")]
    Usage {
        message: String,
        location: ErrorLocation,
    },
}

impl CliError {
    #[track_caller]
    pub fn usage(message: impl Into<String>) -> Self {
        Self::Usage {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn board(summary: Option<String>, source: BoardError) -> Self {
        Self::Board {
            summary: summary.unwrap_or_else(|| "Request not sent".to_string()),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
