// Requests
pub mod bulk_create_todo_request;
pub mod create_todo_request;
pub mod update_todo_request;

// Responses
pub mod health_response;
pub mod purge_response;
pub mod todo_delete_response;
pub mod todo_list_response;
