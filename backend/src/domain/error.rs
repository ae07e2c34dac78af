use thiserror::Error;

use crate::storage::StorageError;

/// A rejected request payload. The `Display` text is sent to the client as-is.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing '{0}' in request body")]
    MissingField(&'static str),

    #[error("'{0}' must not be empty")]
    EmptyField(&'static str),

    #[error("'{0}' must be a string")]
    InvalidText(&'static str),

    #[error("'url' must be a valid http(s) URL")]
    InvalidUrl,

    #[error("Invalid rating value")]
    InvalidRating,

    #[error("Request body must contain either 'title', 'description', 'url' or 'rating'")]
    EmptyUpdate,
}

/// Errors surfaced by the bookmark service
#[derive(Error, Debug)]
pub enum BookmarkError {
    #[error("Bookmark with id {0} not found")]
    NotFound(i64),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

pub type BookmarkResult<T> = Result<T, BookmarkError>;
