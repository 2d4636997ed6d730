use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// One offending field in a rejected request body.
#[derive(Debug, Clone, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        FieldError {
            field: field.into(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not authenticated")]
    NotAuthenticated,
    #[error("Invalid authentication token")]
    InvalidToken,
    #[error("TODO not found")]
    NotFound,
    #[error("validation failed")]
    Validation(Vec<FieldError>),
    #[error(transparent)]
    Database(#[from] rusqlite::Error),
    #[error("{0}")]
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody<T: Serialize> {
    detail: T,
}

fn detail(status: StatusCode, message: String) -> Response {
    (status, Json(ErrorBody { detail: message })).into_response()
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotAuthenticated => detail(StatusCode::FORBIDDEN, self.to_string()),
            ApiError::InvalidToken => detail(StatusCode::UNAUTHORIZED, self.to_string()),
            ApiError::NotFound => detail(StatusCode::NOT_FOUND, self.to_string()),
            ApiError::Validation(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ErrorBody { detail: errors }),
            )
                .into_response(),
            ApiError::Database(e) => {
                tracing::error!("database error: {e}");
                detail(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
            ApiError::Internal(msg) => {
                tracing::error!("internal error: {msg}");
                detail(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        }
    }
}
