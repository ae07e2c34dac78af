use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::models::bookmark::{Bookmark, BookmarkPatch, NewBookmark};
use crate::storage::traits::{BookmarkStorage, StorageResult};

#[derive(Debug)]
struct MemoryState {
    next_id: i64,
    bookmarks: BTreeMap<i64, Bookmark>,
}

/// In-process bookmark store.
///
/// Nothing survives a restart. Ids come from a counter that only moves forward,
/// so a deleted id is never handed out again.
#[derive(Debug)]
pub struct MemoryBookmarkStorage {
    state: RwLock<MemoryState>,
}

impl MemoryBookmarkStorage {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(MemoryState {
                next_id: 1,
                bookmarks: BTreeMap::new(),
            }),
        }
    }
}

impl Default for MemoryBookmarkStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BookmarkStorage for MemoryBookmarkStorage {
    async fn list_bookmarks(&self) -> StorageResult<Vec<Bookmark>> {
        let state = self.state.read().await;
        Ok(state.bookmarks.values().cloned().collect())
    }

    async fn get_bookmark(&self, id: i64) -> StorageResult<Option<Bookmark>> {
        let state = self.state.read().await;
        Ok(state.bookmarks.get(&id).cloned())
    }

    async fn insert_bookmark(&self, bookmark: &NewBookmark) -> StorageResult<Bookmark> {
        let mut state = self.state.write().await;
        let id = state.next_id;
        state.next_id += 1;

        let stored = bookmark.clone().into_bookmark(id);
        state.bookmarks.insert(id, stored.clone());
        Ok(stored)
    }

    async fn update_bookmark(&self, id: i64, patch: &BookmarkPatch) -> StorageResult<u64> {
        let mut state = self.state.write().await;
        match state.bookmarks.get_mut(&id) {
            Some(bookmark) => {
                patch.apply_to(bookmark);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete_bookmark(&self, id: i64) -> StorageResult<u64> {
        let mut state = self.state.write().await;
        Ok(state.bookmarks.remove(&id).map_or(0, |_| 1))
    }
}
