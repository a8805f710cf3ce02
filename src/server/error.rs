use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

pub const UPSTREAM_FAILURE: &str = "Failed to fetch data from LeetCode";

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// A query or path parameter the route needs is missing or unusable.
    #[error("{error}")]
    InvalidParameter {
        error: &'static str,
        solution: &'static str,
        example: &'static str,
    },
    /// The request itself could not be read (e.g. a malformed query string).
    #[error("{0}")]
    BadRequest(String),
    /// The upstream answered with a GraphQL `errors` list.
    #[error("{0}")]
    Upstream(String),
    /// Anything that went wrong on our side of the call. Only `message`
    /// reaches the client; `cause` is logged.
    #[error("{message}")]
    Internal {
        message: &'static str,
        cause: anyhow::Error,
    },
}

impl ApiError {
    pub fn internal(message: &'static str) -> impl FnOnce(anyhow::Error) -> Self {
        move |cause| Self::Internal { message, cause }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::InvalidParameter {
                error,
                solution,
                example,
            } => (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "error": error,
                    "solution": solution,
                    "example": example,
                })),
            )
                .into_response(),
            ApiError::BadRequest(message) | ApiError::Upstream(message) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "error": message }))).into_response()
            }
            ApiError::Internal { message, cause } => {
                tracing::error!(error = ?cause, "{message}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": message })),
                )
                    .into_response()
            }
        }
    }
}
