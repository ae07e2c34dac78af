use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::error::{BookmarkError, BookmarkResult};
use crate::domain::models::bookmark::{Bookmark, BookmarkPatch, NewBookmark};
use crate::storage::BookmarkStorage;

/// Service for managing bookmarks.
///
/// Input is expected to be validated already; this layer only talks to
/// storage and turns "no such row" into [`BookmarkError::NotFound`].
#[derive(Clone)]
pub struct BookmarkService {
    storage: Arc<dyn BookmarkStorage>,
}

impl BookmarkService {
    /// Create a new BookmarkService on top of the given storage
    pub fn new(storage: Arc<dyn BookmarkStorage>) -> Self {
        Self { storage }
    }

    /// List all bookmarks
    pub async fn list_bookmarks(&self) -> BookmarkResult<Vec<Bookmark>> {
        let bookmarks = self.storage.list_bookmarks().await?;
        info!("Found {} bookmarks", bookmarks.len());
        Ok(bookmarks)
    }

    /// Get a bookmark by ID
    pub async fn get_bookmark(&self, id: i64) -> BookmarkResult<Bookmark> {
        match self.storage.get_bookmark(id).await? {
            Some(bookmark) => Ok(bookmark),
            None => {
                warn!("Bookmark with id {} not found", id);
                Err(BookmarkError::NotFound(id))
            }
        }
    }

    /// Create a new bookmark
    pub async fn create_bookmark(&self, bookmark: NewBookmark) -> BookmarkResult<Bookmark> {
        let created = self.storage.insert_bookmark(&bookmark).await?;
        info!("Bookmark with id {} created", created.id);
        Ok(created)
    }

    /// Overwrite the supplied fields of an existing bookmark
    pub async fn update_bookmark(&self, id: i64, patch: BookmarkPatch) -> BookmarkResult<()> {
        let affected = self.storage.update_bookmark(id, &patch).await?;
        if affected == 0 {
            warn!("Bookmark with id {} not found", id);
            return Err(BookmarkError::NotFound(id));
        }

        info!("Bookmark with id {} updated", id);
        Ok(())
    }

    /// Permanently delete a bookmark
    pub async fn delete_bookmark(&self, id: i64) -> BookmarkResult<()> {
        let affected = self.storage.delete_bookmark(id).await?;
        if affected == 0 {
            warn!("Bookmark with id {} not found", id);
            return Err(BookmarkError::NotFound(id));
        }

        info!("Bookmark with id {} deleted", id);
        Ok(())
    }
}
