use crate::domain::models::bookmark::Bookmark as DomainBookmark;
use crate::domain::sanitizer::sanitize_bookmark;
use shared::Bookmark as SharedBookmark;

/// Mapper from domain bookmarks to the wire DTO.
///
/// Every outbound bookmark goes through here, which is where sanitization
/// happens.
pub struct BookmarkMapper;

impl BookmarkMapper {
    /// Converts a domain Bookmark to a sanitized shared Bookmark DTO.
    pub fn to_dto(domain: &DomainBookmark) -> SharedBookmark {
        let clean = sanitize_bookmark(domain);
        SharedBookmark {
            id: clean.id,
            title: clean.title,
            description: clean.description,
            url: clean.url,
            rating: clean.rating,
        }
    }

    pub fn to_dto_list(domain_bookmarks: &[DomainBookmark]) -> Vec<SharedBookmark> {
        domain_bookmarks.iter().map(Self::to_dto).collect()
    }
}
