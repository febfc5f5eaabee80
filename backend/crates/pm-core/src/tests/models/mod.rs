mod project;
mod task_priority;
mod task_status;
mod user;
