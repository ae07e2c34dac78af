//! Shared fixtures for storage, service and REST tests.

use crate::domain::models::bookmark::{Bookmark, NewBookmark};
use crate::storage::traits::BookmarkStorage;

/// The four bookmarks every endpoint test starts from
pub fn make_bookmarks_array() -> Vec<NewBookmark> {
    vec![
        NewBookmark {
            title: "Bookmark 1".to_string(),
            description: Some("description 1".to_string()),
            url: "https://google.com".to_string(),
            rating: 5,
        },
        NewBookmark {
            title: "Google".to_string(),
            description: Some("The ultimate search engine".to_string()),
            url: "https://google.com".to_string(),
            rating: 4,
        },
        NewBookmark {
            title: "Bookmark 3".to_string(),
            description: Some("description 3".to_string()),
            url: "https://youtube.com".to_string(),
            rating: 4,
        },
        NewBookmark {
            title: "Bookmark 4".to_string(),
            description: Some("description 4".to_string()),
            url: "https://etsy.com".to_string(),
            rating: 2,
        },
    ]
}

/// Insert the fixtures in order and return them as stored
pub async fn seed(storage: &dyn BookmarkStorage) -> Vec<Bookmark> {
    let mut stored = Vec::new();
    for bookmark in make_bookmarks_array() {
        let inserted = storage
            .insert_bookmark(&bookmark)
            .await
            .expect("Failed to insert fixture bookmark");
        stored.push(inserted);
    }
    stored
}
