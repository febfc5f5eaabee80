use clap::Subcommand;
use uuid::Uuid;

#[derive(Subcommand)]
pub enum BoardCommands {
    /// Print the To Do, In Progress and Done lists of a project
    Show {
        /// Project ID (UUID)
        project_id: Uuid,
    },
}
