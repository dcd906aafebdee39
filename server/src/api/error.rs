use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::error;

use crate::{db::interface::DatabaseError, password::PasswordError};

const NO_CHANGES: &str = "update contains no changes";

/// Error returned by every API handler.
///
/// This is the single place where failures are translated into HTTP responses.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request was well-formed but its contents were rejected.
    #[error("{0}")]
    Validation(&'static str),

    #[error("malformatted id")]
    MalformedId,

    #[error("{}", .0.body_text())]
    MalformedBody(#[from] JsonRejection),

    #[error("Not found")]
    NotFound,

    #[error("Internal server error: {0}")]
    InternalServerError(Box<dyn std::error::Error + Send + Sync>),
}

impl From<DatabaseError> for ApiError {
    fn from(error: DatabaseError) -> Self {
        match error {
            DatabaseError::NotFound => ApiError::NotFound,
            DatabaseError::EmptyUpdate => ApiError::Validation(NO_CHANGES),
            _ => ApiError::InternalServerError(error.into()),
        }
    }
}

impl From<PasswordError> for ApiError {
    fn from(error: PasswordError) -> Self {
        ApiError::InternalServerError(error.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND.into_response(),
            ApiError::InternalServerError(ref err) => {
                error!("request failed: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "internal server error" })),
                )
                    .into_response()
            }
            ApiError::Validation(_) | ApiError::MalformedId | ApiError::MalformedBody(_) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": self.to_string() })),
            )
                .into_response(),
        }
    }
}
