//! Error types.
//!
//! Two layers, deliberately separate. [`Error`] surfaces infrastructure
//! failures: binding to a port, opening the database. [`ApiError`] is the
//! request-scoped taxonomy — every variant maps to an HTTP status and a
//! `{"message": "..."}` body, and handlers bubble them up with `?`.

use http::StatusCode;
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::response::{IntoResponse, Response};

/// Startup and infrastructure errors.
///
/// Application-level errors (404, 422, etc.) are expressed as [`ApiError`]
/// and rendered as HTTP responses, never as `Error`.
#[derive(Debug, Error)]
pub enum Error {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("database: {0}")]
    Database(#[from] sqlx::Error),
}

/// A request that cannot be served as asked.
///
/// The `#[error]` strings double as the wire-visible `message` text, so they
/// are part of the API contract — clients match on them.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The `Accept` header does not admit `application/json`.
    #[error("Request must accept application/json data")]
    NotAcceptable,

    /// A write carried a `Content-Type` other than `application/json`.
    #[error("Request must contain application/json data")]
    UnsupportedMediaType,

    /// The body failed to parse or to validate; the payload describes the
    /// first violation.
    #[error("{0}")]
    Validation(String),

    /// No post with this id (get and update).
    #[error("Could not find post with id {0}")]
    PostNotFound(i64),

    /// No post with this id (delete keeps its own wording).
    #[error("Post with id {0} requested for deletion does not exist.")]
    DeleteTargetMissing(i64),

    #[error(transparent)]
    Database(#[from] sqlx::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotAcceptable => StatusCode::NOT_ACCEPTABLE,
            Self::UnsupportedMediaType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::PostNotFound(_) | Self::DeleteTargetMissing(_) => StatusCode::NOT_FOUND,
            Self::Database(_) | Self::Json(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        // 5xx details stay in the log; the client gets a generic body.
        if status.is_server_error() {
            error!("request failed: {self}");
            return Response::builder()
                .status(status)
                .json(message_json("internal server error"));
        }
        Response::builder()
            .status(status)
            .json(message_json(&self.to_string()))
    }
}

/// Lets handlers return `Result<Response, ApiError>` and lean on `?`.
impl<T: IntoResponse> IntoResponse for Result<T, ApiError> {
    fn into_response(self) -> Response {
        match self {
            Ok(value) => value.into_response(),
            Err(e) => e.into_response(),
        }
    }
}

/// Serializes `{"message": <text>}` — the shape of every non-2xx body.
pub(crate) fn message_json(text: &str) -> Vec<u8> {
    serde_json::to_vec(&json!({ "message": text })).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_match_the_taxonomy() {
        assert_eq!(ApiError::NotAcceptable.status(), StatusCode::NOT_ACCEPTABLE);
        assert_eq!(
            ApiError::UnsupportedMediaType.status(),
            StatusCode::UNSUPPORTED_MEDIA_TYPE
        );
        assert_eq!(
            ApiError::Validation("x".into()).status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(ApiError::PostNotFound(7).status(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::DeleteTargetMissing(7).status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn not_found_wording_differs_between_get_and_delete() {
        assert_eq!(
            ApiError::PostNotFound(1).to_string(),
            "Could not find post with id 1"
        );
        assert_eq!(
            ApiError::DeleteTargetMissing(2).to_string(),
            "Post with id 2 requested for deletion does not exist."
        );
    }

    #[test]
    fn message_body_is_json() {
        assert_eq!(message_json("hi"), br#"{"message":"hi"}"#.to_vec());
    }
}
