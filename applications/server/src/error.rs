/// Server error types
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use encore_core::{CoreError, ValidationError};
use serde_json::json;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ServerError>;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Validation failed")]
    Validation(Vec<ValidationError>),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error(transparent)]
    Core(#[from] CoreError),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ServerError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ServerError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ServerError::Validation(errors) => {
                let body = Json(json!({ "errors": errors }));
                return (StatusCode::UNPROCESSABLE_ENTITY, body).into_response();
            }
            ServerError::Internal(ref msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            ServerError::Core(err) => return core_error_response(err),
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

fn core_error_response(err: CoreError) -> Response {
    let (status, error_message) = match err {
        CoreError::MappingNotFound => {
            tracing::error!("Property mapping misconfiguration: {}", err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Property mapping configuration error".to_string(),
            )
        }
        CoreError::InvalidSortField(_) | CoreError::UnknownField(_) => {
            (StatusCode::BAD_REQUEST, err.to_string())
        }
        CoreError::Validation(errors) => {
            let body = Json(json!({ "errors": errors }));
            return (StatusCode::UNPROCESSABLE_ENTITY, body).into_response();
        }
        CoreError::NotFound { .. } => (StatusCode::NOT_FOUND, err.to_string()),
        CoreError::Database(ref msg) => {
            tracing::error!("Database error: {}", msg);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Database error".to_string(),
            )
        }
    };

    let body = Json(json!({
        "error": error_message,
    }));

    (status, body).into_response()
}
