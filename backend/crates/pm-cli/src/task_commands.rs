use pm_core::{TaskPriority, TaskStatus};

use clap::Subcommand;
use uuid::Uuid;

#[derive(Subcommand)]
pub enum TaskCommands {
    /// Add a card to one of a project's lists
    Create {
        /// Project ID (UUID)
        #[arg(long)]
        project_id: Uuid,

        /// Target list: todo, inprogress or done
        #[arg(long, default_value = "todo", value_parser = parse_status)]
        list: TaskStatus,

        /// Task title
        #[arg(long)]
        title: String,

        /// Task description
        #[arg(long)]
        description: Option<String>,
    },

    /// Move a task to another list
    Move {
        /// Task ID (UUID)
        id: Uuid,

        /// Target list: todo, inprogress or done
        #[arg(long, value_parser = parse_status)]
        to: TaskStatus,
    },

    /// Change one or more fields of a task
    Update {
        /// Task ID (UUID)
        id: Uuid,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        description: Option<String>,

        /// low, medium or high
        #[arg(long, value_parser = parse_priority)]
        priority: Option<TaskPriority>,

        /// Assignee user ID (UUID)
        #[arg(long)]
        assignee: Option<Uuid>,
    },

    /// Delete a task
    Delete {
        /// Task ID (UUID)
        id: Uuid,
    },

    /// Show all fields of a task
    Show {
        /// Task ID (UUID)
        id: Uuid,
    },
}

/// List names as typed on the command line (`todo`, `inprogress`, `in_progress`, `done`)
pub(crate) fn parse_status(value: &str) -> Result<TaskStatus, String> {
    TaskStatus::from_slug(value).map_err(|_| {
        format!(
            "unknown list '{}' (expected todo, inprogress or done)",
            value
        )
    })
}

pub(crate) fn parse_priority(value: &str) -> Result<TaskPriority, String> {
    value
        .to_uppercase()
        .parse()
        .map_err(|_| format!("unknown priority '{}' (expected low, medium or high)", value))
}
