pub mod board;
pub mod error;
pub mod input;
pub mod models;

#[cfg(test)]
mod tests;

pub use board::board_list::BoardList;
pub use board::list_id::{list_id_for, parse_list_id, project_list_status, status_from_list_id};
pub use board::partition::partition;
pub use board::project_board::ProjectBoard;
pub use error::{CoreError, Result};
pub use error_location::ErrorLocation;
pub use input::new_project::NewProject;
pub use input::new_task::NewTask;
pub use input::task_changes::TaskChanges;
pub use input::trimmed_non_empty;
pub use models::project::Project;
pub use models::task::Task;
pub use models::task_priority::TaskPriority;
pub use models::task_status::TaskStatus;
pub use models::user::User;
