use serde::Serialize;

use crate::todo::TodoRecord;

/// Shared by list and bulk create, both of which return an ordered set of
/// records plus its size.
#[derive(Debug, Serialize)]
pub struct TodoListResponse {
    pub todos: Vec<TodoRecord>,
    pub count: usize,
}

impl TodoListResponse {
    pub fn new(todos: Vec<TodoRecord>) -> Self {
        let count = todos.len();
        TodoListResponse { todos, count }
    }
}
