use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "pm")]
#[command(about = "Kanban board CLI")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// Server URL (default: client.server_url from config)
    #[arg(long, global = true, env = "PM_SERVER_URL")]
    pub(crate) server: Option<String>,

    /// Session token from `pm auth sign-in` (servers with auth enabled)
    #[arg(long, global = true, env = "PM_TOKEN", conflicts_with = "user_id")]
    pub(crate) token: Option<String>,

    /// Act as this user id (servers running without auth)
    #[arg(long, global = true, env = "PM_USER_ID")]
    pub(crate) user_id: Option<String>,

    /// Print raw JSON instead of the text views
    #[arg(long, global = true)]
    pub(crate) json: bool,
}
