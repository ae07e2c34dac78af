use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use shared::ErrorResponse;
use thiserror::Error;
use tracing::{error, warn};

use crate::domain::{BookmarkError, ValidationError};
use crate::storage::StorageError;

/// Every failure a bookmark endpoint can answer with.
///
/// All variants render as `{"error": {"message": ...}}`.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("{0}")]
    MalformedBody(String),

    #[error("Bookmark doesn't exist")]
    NotFound,

    #[error("Resource not found")]
    UnknownRoute,

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("An internal storage error occurred")]
    Storage(#[source] StorageError),
}

impl From<BookmarkError> for ApiError {
    fn from(err: BookmarkError) -> Self {
        match err {
            BookmarkError::NotFound(_) => ApiError::NotFound,
            BookmarkError::Storage(storage_err) => ApiError::Storage(storage_err),
        }
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound | ApiError::UnknownRoute => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Storage(storage_err) => {
                error!(error = ?storage_err, "Storage failure while handling bookmark request");
            }
            ApiError::Validation(_) | ApiError::MalformedBody(_) => {
                warn!("Rejected bookmark request: {}", self);
            }
            ApiError::NotFound | ApiError::UnknownRoute | ApiError::MethodNotAllowed => {}
        }

        let body = ErrorResponse::new(self.to_string());
        (self.status(), Json(body)).into_response()
    }
}
