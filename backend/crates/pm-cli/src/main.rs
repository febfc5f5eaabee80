//! pm - Kanban board CLI
//!
//! # Examples
//!
//! ```bash
//! # Sign in and keep the token for later commands
//! pm auth sign-in --email ada@example.com --password ...
//!
//! # Show a board
//! pm board show <project-id>
//!
//! # Move a card
//! pm task move <task-id> --to done
//! ```

use pm_cli::{Cli, CliResult, run};
use pm_config::Config;

use std::process::ExitCode;

use clap::Parser;

#[tokio::main]
async fn main() -> ExitCode {
    // .env has to be loaded before clap reads PM_* variables
    if let Err(e) = Config::load_dotenv() {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    let cli = Cli::parse();

    match try_main(cli).await {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn try_main(cli: Cli) -> CliResult<String> {
    let config = Config::load()?;
    config.client.validate()?;

    run(cli, &config.client).await
}
