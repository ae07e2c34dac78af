//! Output sanitization for bookmark text fields.
//!
//! Records are stored exactly as submitted and only escaped on their way out.
//! `&` is not escaped, so sanitizing already-sanitized text is a no-op.

use crate::domain::models::bookmark::Bookmark;

/// Escape the characters that let text break out into markup
pub fn sanitize_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Return a copy of `bookmark` with `title`, `description` and `url` escaped
pub fn sanitize_bookmark(bookmark: &Bookmark) -> Bookmark {
    Bookmark {
        id: bookmark.id,
        title: sanitize_text(&bookmark.title),
        description: bookmark.description.as_deref().map(sanitize_text),
        url: sanitize_text(&bookmark.url),
        rating: bookmark.rating,
    }
}
