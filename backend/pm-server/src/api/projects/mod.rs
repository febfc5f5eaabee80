pub mod project_list_response;
pub mod project_response;
pub mod projects;
