//! # Storage Traits
//!
//! This module defines the storage abstraction that lets the domain layer work
//! against SQLite or the in-memory store without knowing which one it has.

use async_trait::async_trait;

use crate::domain::models::bookmark::{Bookmark, BookmarkPatch, NewBookmark};
use crate::storage::error::StorageError;

pub type StorageResult<T> = Result<T, StorageError>;

/// Trait defining the interface for bookmark storage operations
///
/// Each call is expected to be atomic on its own; callers never hold a
/// transaction open across calls.
#[async_trait]
pub trait BookmarkStorage: Send + Sync {
    /// List every bookmark ordered by id
    async fn list_bookmarks(&self) -> StorageResult<Vec<Bookmark>>;

    /// Retrieve a specific bookmark by ID
    async fn get_bookmark(&self, id: i64) -> StorageResult<Option<Bookmark>>;

    /// Store a new bookmark and return it with its assigned id
    async fn insert_bookmark(&self, bookmark: &NewBookmark) -> StorageResult<Bookmark>;

    /// Apply the supplied fields of `patch` to a bookmark.
    /// Returns the number of rows matched (0 when the id does not exist)
    async fn update_bookmark(&self, id: i64, patch: &BookmarkPatch) -> StorageResult<u64>;

    /// Delete a bookmark.
    /// Returns the number of rows removed (0 when the id does not exist)
    async fn delete_bookmark(&self, id: i64) -> StorageResult<u64>;
}
