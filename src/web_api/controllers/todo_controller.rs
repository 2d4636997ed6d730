use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use crate::{
    api_error::{ApiError, FieldError},
    app_state::SharedState,
    bulk_create_todo_request::BulkCreateTodoRequest,
    create_todo_request::CreateTodoRequest,
    todo::TodoRecord,
    todo_delete_response::TodoDeleteResponse,
    todo_list_response::TodoListResponse,
    todo_status::TodoStatus,
    update_todo_request::UpdateTodoRequest,
};

#[derive(Debug, Deserialize)]
pub struct ListTodosQuery {
    pub status: Option<String>,
    pub priority: Option<i64>,
}

pub struct TodoController {}

impl TodoController {
    pub async fn create(
        State(state): State<SharedState>,
        Json(body): Json<CreateTodoRequest>,
    ) -> Result<(StatusCode, Json<TodoRecord>), ApiError> {
        body.validate().map_err(ApiError::Validation)?;
        let todo = state.data_context.create_todo(&body)?;
        Ok((StatusCode::CREATED, Json(todo)))
    }

    pub async fn create_bulk(
        State(state): State<SharedState>,
        Json(body): Json<BulkCreateTodoRequest>,
    ) -> Result<(StatusCode, Json<TodoListResponse>), ApiError> {
        body.validate().map_err(ApiError::Validation)?;
        let todos = state.data_context.create_todos(&body.todos)?;
        Ok((StatusCode::CREATED, Json(TodoListResponse::new(todos))))
    }

    pub async fn get_all(
        State(state): State<SharedState>,
        Query(query): Query<ListTodosQuery>,
    ) -> Result<Json<TodoListResponse>, ApiError> {
        let mut errors = Vec::new();

        let status = match query.status.as_deref() {
            None => None,
            Some("pending") => Some(TodoStatus::Pending),
            Some("completed") => Some(TodoStatus::Completed),
            Some(_) => {
                errors.push(FieldError::new("status", "must be one of: pending, completed"));
                None
            }
        };
        if let Some(priority) = query.priority {
            if !(1..=4).contains(&priority) {
                errors.push(FieldError::new("priority", "must be between 1 and 4"));
            }
        }
        if !errors.is_empty() {
            return Err(ApiError::Validation(errors));
        }

        let todos = state.data_context.list_todos(status, query.priority)?;
        Ok(Json(TodoListResponse::new(todos)))
    }

    pub async fn get(
        State(state): State<SharedState>,
        Path(id): Path<i64>,
    ) -> Result<Json<TodoRecord>, ApiError> {
        state
            .data_context
            .get_todo(id)?
            .map(Json)
            .ok_or(ApiError::NotFound)
    }

    pub async fn edit(
        State(state): State<SharedState>,
        Path(id): Path<i64>,
        Json(body): Json<UpdateTodoRequest>,
    ) -> Result<Json<TodoRecord>, ApiError> {
        body.validate().map_err(ApiError::Validation)?;
        state
            .data_context
            .update_todo(id, &body)?
            .map(Json)
            .ok_or(ApiError::NotFound)
    }

    pub async fn delete(
        State(state): State<SharedState>,
        Path(id): Path<i64>,
    ) -> Result<Json<TodoDeleteResponse>, ApiError> {
        if state.data_context.delete_todo(id)? {
            Ok(Json(TodoDeleteResponse {
                message: "TODO deleted".to_string(),
                id,
            }))
        } else {
            Err(ApiError::NotFound)
        }
    }

    pub async fn complete(
        State(state): State<SharedState>,
        Path(id): Path<i64>,
    ) -> Result<Json<TodoRecord>, ApiError> {
        state
            .data_context
            .complete_todo(id)?
            .map(Json)
            .ok_or(ApiError::NotFound)
    }

    pub async fn reopen(
        State(state): State<SharedState>,
        Path(id): Path<i64>,
    ) -> Result<Json<TodoRecord>, ApiError> {
        state
            .data_context
            .reopen_todo(id)?
            .map(Json)
            .ok_or(ApiError::NotFound)
    }
}
