use crate::{
    auth_commands::AuthCommands, board_commands::BoardCommands, project_commands::ProjectCommands,
    task_commands::TaskCommands,
};

use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Sign up or sign in
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },

    /// Project operations
    Project {
        #[command(subcommand)]
        action: ProjectCommands,
    },

    /// Show a project's board
    Board {
        #[command(subcommand)]
        action: BoardCommands,
    },

    /// Task operations
    Task {
        #[command(subcommand)]
        action: TaskCommands,
    },
}
