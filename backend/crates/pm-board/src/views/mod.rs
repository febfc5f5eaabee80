//! Plain-text renderings of the three board screens.
//!
//! Each view borrows what it shows and implements `Display`.

mod board;
mod project_list;
mod task_detail;

pub use board::BoardView;
pub use project_list::ProjectListView;
pub use task_detail::TaskDetailView;

use pm_core::Task;

/// One-line card summary shared by the board and list views.
pub(crate) fn card_line(task: &Task) -> String {
    match task.priority {
        Some(priority) => format!("{} [{}] ({})", task.title, priority, task.id),
        None => format!("{} ({})", task.title, task.id),
    }
}
