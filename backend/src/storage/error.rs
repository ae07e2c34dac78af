use thiserror::Error;

/// Failures raised by a storage collaborator.
///
/// These are opaque to API clients; the REST layer reports them as a 500.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Stored bookmark {id} is corrupt: {reason}")]
    Corrupt { id: i64, reason: String },
}
