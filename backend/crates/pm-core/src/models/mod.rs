pub mod project;
pub mod task;
pub mod task_priority;
pub mod task_status;
pub mod user;
