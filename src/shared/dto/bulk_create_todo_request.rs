use serde::Deserialize;

use crate::api_error::FieldError;
use crate::create_todo_request::CreateTodoRequest;

#[derive(Debug, Deserialize)]
pub struct BulkCreateTodoRequest {
    pub todos: Vec<CreateTodoRequest>,
}

impl BulkCreateTodoRequest {
    /// All-or-nothing: a single bad element rejects the whole batch before
    /// anything reaches the store.
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        if self.todos.is_empty() {
            return Err(vec![FieldError::new("todos", "must not be empty")]);
        }
        let mut errors = Vec::new();
        for (i, todo) in self.todos.iter().enumerate() {
            todo.collect_errors(&format!("todos[{i}]."), &mut errors);
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_batch_is_rejected() {
        let request: BulkCreateTodoRequest = serde_json::from_str(r#"{"todos": []}"#).unwrap();
        let errors = request.validate().unwrap_err();
        assert_eq!(errors[0].field, "todos");
    }

    #[test]
    fn invalid_element_is_reported_with_its_index() {
        let request: BulkCreateTodoRequest = serde_json::from_str(
            r#"{"todos": [{"description": "ok"}, {"description": "", "priority": 9}]}"#,
        )
        .unwrap();
        let errors = request.validate().unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].field, "todos[1].description");
        assert_eq!(errors[1].field, "todos[1].priority");
    }
}
