pub mod user_list_response;
pub mod user_response;
pub mod users;
