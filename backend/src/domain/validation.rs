//! Payload validation for bookmark requests.
//!
//! Both the create and the update path are driven by [`BOOKMARK_SCHEMA`]. A
//! field is "supplied" when its key is present in the payload, whatever its
//! value; a falsy value such as `0` or `""` is validated, never ignored.
//! Keys outside the schema are dropped.

use serde_json::{Map, Value};
use url::Url;

use crate::domain::error::ValidationError;
use crate::domain::models::bookmark::{BookmarkPatch, NewBookmark, MAX_RATING, MIN_RATING};

/// A request body decoded as a JSON object
pub type Payload = Map<String, Value>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Description,
    Url,
    Rating,
}

impl Field {
    pub fn name(self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Description => "description",
            Field::Url => "url",
            Field::Rating => "rating",
        }
    }
}

/// How a field's raw value is checked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Url,
    Rating,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    pub field: Field,
    pub required: bool,
    pub kind: FieldKind,
}

/// Declared payload order. On create, the first missing required field in this
/// order is the one reported.
pub const BOOKMARK_SCHEMA: [FieldRule; 4] = [
    FieldRule { field: Field::Title, required: true, kind: FieldKind::Text },
    FieldRule { field: Field::Description, required: false, kind: FieldKind::Text },
    FieldRule { field: Field::Url, required: true, kind: FieldKind::Url },
    FieldRule { field: Field::Rating, required: true, kind: FieldKind::Rating },
];

enum FieldValue {
    Text(Option<String>),
    Rating(u8),
}

/// Validate a create payload into a bookmark ready for insertion
pub fn validate_new_bookmark(payload: &Payload) -> Result<NewBookmark, ValidationError> {
    for rule in BOOKMARK_SCHEMA.iter().filter(|rule| rule.required) {
        let name = rule.field.name();
        if payload.get(name).map_or(true, Value::is_null) {
            return Err(ValidationError::MissingField(name));
        }
    }

    let patch = collect_supplied(payload)?;

    Ok(NewBookmark {
        title: patch.title.ok_or(ValidationError::MissingField(Field::Title.name()))?,
        description: patch.description.flatten(),
        url: patch.url.ok_or(ValidationError::MissingField(Field::Url.name()))?,
        rating: patch.rating.ok_or(ValidationError::MissingField(Field::Rating.name()))?,
    })
}

/// Validate an update payload into the set of fields to overwrite
pub fn validate_bookmark_patch(payload: &Payload) -> Result<BookmarkPatch, ValidationError> {
    let patch = collect_supplied(payload)?;
    if patch.is_empty() {
        return Err(ValidationError::EmptyUpdate);
    }
    Ok(patch)
}

fn collect_supplied(payload: &Payload) -> Result<BookmarkPatch, ValidationError> {
    let mut patch = BookmarkPatch::default();

    for rule in &BOOKMARK_SCHEMA {
        let Some(raw) = payload.get(rule.field.name()) else {
            continue;
        };

        match (rule.field, parse_value(rule, raw)?) {
            (Field::Title, FieldValue::Text(text)) => patch.title = text,
            (Field::Description, FieldValue::Text(text)) => patch.description = Some(text),
            (Field::Url, FieldValue::Text(text)) => patch.url = text,
            (Field::Rating, FieldValue::Rating(rating)) => patch.rating = Some(rating),
            _ => {}
        }
    }

    Ok(patch)
}

fn parse_value(rule: &FieldRule, raw: &Value) -> Result<FieldValue, ValidationError> {
    let name = rule.field.name();
    match rule.kind {
        FieldKind::Rating => parse_rating(raw).map(FieldValue::Rating),
        FieldKind::Text | FieldKind::Url => {
            let text = match raw {
                Value::Null if rule.required => return Err(ValidationError::EmptyField(name)),
                Value::Null => return Ok(FieldValue::Text(None)),
                Value::String(text) => text,
                _ => return Err(ValidationError::InvalidText(name)),
            };

            if rule.required && text.trim().is_empty() {
                return Err(ValidationError::EmptyField(name));
            }
            if rule.kind == FieldKind::Url && !is_http_url(text) {
                return Err(ValidationError::InvalidUrl);
            }

            Ok(FieldValue::Text(Some(text.clone())))
        }
    }
}

/// Ratings must be integral JSON numbers; `4.0` is accepted, `4.5` and `"4"` are not
fn parse_rating(raw: &Value) -> Result<u8, ValidationError> {
    let rating = match raw {
        Value::Number(number) => number.as_i64().or_else(|| {
            number
                .as_f64()
                .filter(|value| value.fract() == 0.0)
                .map(|value| value as i64)
        }),
        _ => None,
    }
    .ok_or(ValidationError::InvalidRating)?;

    if (i64::from(MIN_RATING)..=i64::from(MAX_RATING)).contains(&rating) {
        Ok(rating as u8)
    } else {
        Err(ValidationError::InvalidRating)
    }
}

fn is_http_url(text: &str) -> bool {
    if text.chars().any(char::is_whitespace) {
        return false;
    }

    match Url::parse(text) {
        Ok(url) => {
            matches!(url.scheme(), "http" | "https")
                && url.host_str().is_some_and(|host| !host.is_empty())
        }
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(value: Value) -> Payload {
        match value {
            Value::Object(map) => map,
            other => panic!("expected a JSON object, got {other}"),
        }
    }

    fn amazon() -> Payload {
        payload(json!({
            "title": "Amazon",
            "description": "online everything store",
            "url": "https://amazon.com",
            "rating": 5
        }))
    }

    #[test]
    fn test_valid_create_payload() {
        let bookmark = validate_new_bookmark(&amazon()).unwrap();
        assert_eq!(
            bookmark,
            NewBookmark {
                title: "Amazon".to_string(),
                description: Some("online everything store".to_string()),
                url: "https://amazon.com".to_string(),
                rating: 5,
            }
        );
    }

    #[test]
    fn test_description_is_optional() {
        let mut body = amazon();
        body.remove("description");
        assert_eq!(validate_new_bookmark(&body).unwrap().description, None);

        body.insert("description".to_string(), Value::Null);
        assert_eq!(validate_new_bookmark(&body).unwrap().description, None);
    }

    #[test]
    fn test_each_missing_required_field() {
        for field in ["title", "url", "rating"] {
            let mut body = amazon();
            body.remove(field);
            assert_eq!(
                validate_new_bookmark(&body),
                Err(ValidationError::MissingField(field)),
                "removing '{}'",
                field
            );
        }
    }

    #[test]
    fn test_null_counts_as_missing_on_create() {
        let mut body = amazon();
        body.insert("url".to_string(), Value::Null);
        assert_eq!(validate_new_bookmark(&body), Err(ValidationError::MissingField("url")));
    }

    #[test]
    fn test_first_missing_field_wins() {
        let body = payload(json!({ "description": "only this" }));
        assert_eq!(validate_new_bookmark(&body), Err(ValidationError::MissingField("title")));

        let body = payload(json!({ "title": "Amazon" }));
        assert_eq!(validate_new_bookmark(&body), Err(ValidationError::MissingField("url")));

        let body = payload(json!({ "title": "Amazon", "url": "https://amazon.com" }));
        assert_eq!(validate_new_bookmark(&body), Err(ValidationError::MissingField("rating")));
    }

    #[test]
    fn test_missing_field_reported_before_invalid_rating() {
        let body = payload(json!({ "title": "Amazon", "rating": 9 }));
        assert_eq!(validate_new_bookmark(&body), Err(ValidationError::MissingField("url")));
    }

    #[test]
    fn test_rating_range_and_type() {
        for rating in [json!(0), json!(6), json!(7), json!(-1), json!(4.5), json!("5"), json!(true)] {
            let mut body = amazon();
            body.insert("rating".to_string(), rating.clone());
            assert_eq!(
                validate_new_bookmark(&body),
                Err(ValidationError::InvalidRating),
                "rating {}",
                rating
            );
        }

        for (rating, expected) in [(json!(1), 1), (json!(5), 5), (json!(3.0), 3)] {
            let mut body = amazon();
            body.insert("rating".to_string(), rating);
            assert_eq!(validate_new_bookmark(&body).unwrap().rating, expected);
        }
    }

    #[test]
    fn test_blank_title_is_rejected() {
        let mut body = amazon();
        body.insert("title".to_string(), json!("   "));
        assert_eq!(validate_new_bookmark(&body), Err(ValidationError::EmptyField("title")));
    }

    #[test]
    fn test_non_string_text_is_rejected() {
        let mut body = amazon();
        body.insert("description".to_string(), json!(42));
        assert_eq!(
            validate_new_bookmark(&body),
            Err(ValidationError::InvalidText("description"))
        );
    }

    #[test]
    fn test_url_shape() {
        for url in [
            "amazon.com",
            "ftp://amazon.com",
            "https://",
            "https://amazon .com",
            "https://:80",
            "https://@/",
            "mailto:someone@amazon.com",
        ] {
            let mut body = amazon();
            body.insert("url".to_string(), json!(url));
            assert_eq!(validate_new_bookmark(&body), Err(ValidationError::InvalidUrl), "url {}", url);
        }

        let mut body = amazon();
        body.insert("url".to_string(), json!("http://localhost:8000/path?q=1#top"));
        assert!(validate_new_bookmark(&body).is_ok());
    }

    #[test]
    fn test_unrecognized_fields_are_ignored() {
        let mut body = amazon();
        body.insert("id".to_string(), json!(999));
        body.insert("color".to_string(), json!("red"));
        assert!(validate_new_bookmark(&body).is_ok());
    }

    #[test]
    fn test_update_requires_a_recognized_field() {
        let body = payload(json!({}));
        assert_eq!(validate_bookmark_patch(&body), Err(ValidationError::EmptyUpdate));

        let body = payload(json!({ "irrelevantField": "foo" }));
        assert_eq!(validate_bookmark_patch(&body), Err(ValidationError::EmptyUpdate));
    }

    #[test]
    fn test_update_with_subset_ignores_extra_fields() {
        let body = payload(json!({
            "title": "updated bookmark title",
            "fieldToIgnore": "should not be in GET response"
        }));

        assert_eq!(
            validate_bookmark_patch(&body).unwrap(),
            BookmarkPatch {
                title: Some("updated bookmark title".to_string()),
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_update_falsy_values_are_validated_not_skipped() {
        let body = payload(json!({ "rating": 0 }));
        assert_eq!(validate_bookmark_patch(&body), Err(ValidationError::InvalidRating));

        let body = payload(json!({ "title": "" }));
        assert_eq!(validate_bookmark_patch(&body), Err(ValidationError::EmptyField("title")));

        let body = payload(json!({ "url": null }));
        assert_eq!(validate_bookmark_patch(&body), Err(ValidationError::EmptyField("url")));
    }

    #[test]
    fn test_update_null_description_clears_it() {
        let body = payload(json!({ "description": null }));
        assert_eq!(
            validate_bookmark_patch(&body).unwrap(),
            BookmarkPatch {
                description: Some(None),
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            ValidationError::MissingField("title").to_string(),
            "Missing 'title' in request body"
        );
        assert_eq!(ValidationError::InvalidRating.to_string(), "Invalid rating value");
        assert_eq!(
            ValidationError::EmptyUpdate.to_string(),
            "Request body must contain either 'title', 'description', 'url' or 'rating'"
        );
    }
}
