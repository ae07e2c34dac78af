//! # REST API for Bookmark Management
//!
//! Endpoints for listing, creating, retrieving, updating, and deleting
//! bookmarks. Every request runs validation (if it has a body), at most one
//! existence check, one storage operation, and then answers.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        OriginalUri, Path, State,
    },
    http::{header, Method, StatusCode},
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use serde_json::Value;
use tracing::info;

use crate::domain::validation::{validate_bookmark_patch, validate_new_bookmark, Payload};
use crate::io::rest::error::ApiError;
use crate::io::rest::mappers::bookmark_mapper::BookmarkMapper;
use crate::AppState;

/// Create a router for bookmark related APIs
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(list_bookmarks)
                .post(create_bookmark)
                .fallback(method_not_allowed),
        )
        .route(
            "/:id",
            get(get_bookmark)
                .patch(update_bookmark)
                .delete(delete_bookmark)
                .fallback(method_not_allowed),
        )
}

/// Answer requests that match no route
pub async fn unknown_route(method: Method, OriginalUri(uri): OriginalUri) -> ApiError {
    info!("{} {} matched no route", method, uri.path());
    ApiError::UnknownRoute
}

async fn method_not_allowed(method: Method, OriginalUri(uri): OriginalUri) -> ApiError {
    info!("{} {} is not supported", method, uri.path());
    ApiError::MethodNotAllowed
}

/// A path id that is not an integer can never name an existing bookmark
fn bookmark_id(path: Result<Path<i64>, PathRejection>) -> Result<i64, ApiError> {
    path.map(|Path(id)| id).map_err(|_| ApiError::NotFound)
}

/// Decode the request body into a JSON object.
///
/// A request without a JSON content type (typically an empty body) is treated
/// as `{}` so that the validator reports which field is missing.
fn payload(body: Result<Json<Value>, JsonRejection>) -> Result<Payload, ApiError> {
    match body {
        Ok(Json(Value::Object(map))) => Ok(map),
        Ok(Json(_)) => Err(ApiError::MalformedBody(
            "Request body must be a JSON object".to_string(),
        )),
        Err(JsonRejection::MissingJsonContentType(_)) => Ok(Payload::new()),
        Err(rejection) => Err(ApiError::MalformedBody(rejection.body_text())),
    }
}

/// List all bookmarks
pub async fn list_bookmarks(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
) -> Result<impl IntoResponse, ApiError> {
    info!("GET {}", uri.path());

    let bookmarks = state.bookmark_service.list_bookmarks().await?;
    Ok((StatusCode::OK, Json(BookmarkMapper::to_dto_list(&bookmarks))))
}

/// Create a new bookmark
pub async fn create_bookmark(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    info!("POST {}", uri.path());

    let payload = payload(body)?;
    let new_bookmark = validate_new_bookmark(&payload)?;
    let created = state.bookmark_service.create_bookmark(new_bookmark).await?;

    let location = format!("{}/{}", uri.path(), created.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(BookmarkMapper::to_dto(&created)),
    ))
}

/// Get a bookmark by ID
pub async fn get_bookmark(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    path: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, ApiError> {
    info!("GET {}", uri.path());

    let id = bookmark_id(path)?;
    let bookmark = state.bookmark_service.get_bookmark(id).await?;
    Ok((StatusCode::OK, Json(BookmarkMapper::to_dto(&bookmark))))
}

/// Update the supplied fields of a bookmark
pub async fn update_bookmark(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    path: Result<Path<i64>, PathRejection>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    info!("PATCH {}", uri.path());

    let id = bookmark_id(path)?;
    state.bookmark_service.get_bookmark(id).await?;

    let payload = payload(body)?;
    let patch = validate_bookmark_patch(&payload)?;
    state.bookmark_service.update_bookmark(id, patch).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Delete a bookmark
pub async fn delete_bookmark(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    path: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, ApiError> {
    info!("DELETE {}", uri.path());

    let id = bookmark_id(path)?;
    state.bookmark_service.delete_bookmark(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
