/// Lowest rating a bookmark may carry
pub const MIN_RATING: u8 = 1;
/// Highest rating a bookmark may carry
pub const MAX_RATING: u8 = 5;

/// A persisted bookmark.
///
/// `title` and `url` are never empty and `rating` is always within
/// `MIN_RATING..=MAX_RATING`; the validator guarantees it on the way in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bookmark {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub url: String,
    pub rating: u8,
}

/// A validated bookmark that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBookmark {
    pub title: String,
    pub description: Option<String>,
    pub url: String,
    pub rating: u8,
}

impl NewBookmark {
    pub fn into_bookmark(self, id: i64) -> Bookmark {
        Bookmark {
            id,
            title: self.title,
            description: self.description,
            url: self.url,
            rating: self.rating,
        }
    }
}

/// The explicitly supplied fields of a partial update.
///
/// `description` is doubly optional: `None` leaves it untouched while
/// `Some(None)` clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookmarkPatch {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub url: Option<String>,
    pub rating: Option<u8>,
}

impl BookmarkPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.url.is_none()
            && self.rating.is_none()
    }

    /// Overwrite the supplied fields of `bookmark`, leaving the rest alone
    pub fn apply_to(&self, bookmark: &mut Bookmark) {
        if let Some(title) = &self.title {
            bookmark.title = title.clone();
        }
        if let Some(description) = &self.description {
            bookmark.description = description.clone();
        }
        if let Some(url) = &self.url {
            bookmark.url = url.clone();
        }
        if let Some(rating) = self.rating {
            bookmark.rating = rating;
        }
    }
}
