use clap::Subcommand;

#[derive(Subcommand)]
pub enum ProjectCommands {
    /// List projects visible to you
    List,

    /// Create a project
    Create {
        /// Project name
        #[arg(long)]
        name: String,

        /// Project description
        #[arg(long)]
        description: Option<String>,
    },
}
