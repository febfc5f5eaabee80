pub mod connection;
pub mod error;
pub mod repositories;

pub use connection::{MIGRATOR, open, open_in_memory};
pub use error::{DbError, Result};
pub use repositories::project_repository::ProjectRepository;
pub use repositories::task_repository::TaskRepository;
pub use repositories::user_repository::{UserCredentials, UserRepository};
