pub mod task_response;
pub mod tasks;
