use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::constants::ERR_NOT_FOUND;
use crate::models::ValidationErrors;

/// Failures the in-memory API reports to clients.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    NotFound,
    /// 422 with a `{ "errors": [...] }` body.
    Validation(Vec<String>),
    Conflict(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound => (StatusCode::NOT_FOUND, ERR_NOT_FOUND).into_response(),
            ApiError::Validation(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ValidationErrors { errors }),
            )
                .into_response(),
            ApiError::Conflict(message) => (StatusCode::CONFLICT, message).into_response(),
        }
    }
}
