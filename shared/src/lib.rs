use serde::{Deserialize, Serialize};

/// A bookmark as it travels over the wire.
///
/// Free-text fields in responses have already been escaped by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bookmark {
    /// Storage-assigned identifier, never reused after deletion
    pub id: i64,
    pub title: String,
    /// Rendered as `null` when the bookmark has no description
    pub description: Option<String>,
    pub url: String,
    /// Integer rating between 1 and 5 inclusive
    pub rating: u8,
}

/// Body a client sends to `POST /api/bookmarks`.
///
/// The server does not deserialize into this type: it validates the raw JSON
/// object so it can name the first missing field and ignore unknown keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateBookmarkRequest {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub url: String,
    pub rating: u8,
}

/// Body a client sends to `PATCH /api/bookmarks/:id`.
///
/// Only fields that are `Some` are serialized, so the server sees exactly the
/// fields the client meant to change.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateBookmarkRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
}

/// Error envelope returned by every failing request: `{"error": {"message": ...}}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorMessage,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorMessage {
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: ErrorMessage {
                message: message.into(),
            },
        }
    }
}
