//! # Bookmarks Backend
//!
//! A small REST service that stores bookmarks (title, optional description,
//! URL and a 1 to 5 rating) and lets clients list, create, read, partially
//! update and delete them.
//!
//! ## Architecture
//!
//! The backend follows a layered architecture:
//! ```text
//! HTTP clients
//!     ↓
//! IO Layer (REST handlers, error responses, output sanitization)
//!     ↓
//! Domain Layer (validation, bookmark service)
//!     ↓
//! Storage Layer (SQLite or in-memory)
//! ```
//!
//! ## Key Responsibilities
//!
//! - Initialize the storage backend selected in configuration
//! - Set up the REST router with CORS and request tracing
//! - Keep HTTP concerns out of the domain and storage layers

pub mod config;
pub mod domain;
pub mod io;
pub mod logging;
pub mod storage;

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    http::{HeaderValue, Method},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::normalize_path::NormalizePath;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::{ApiSettings, StorageBackend, StorageSettings};
use crate::domain::BookmarkService;
use crate::storage::{BookmarkStorage, DbConnection, MemoryBookmarkStorage, SqliteBookmarkRepository};

/// The router wrapped so that a trailing `/` is dropped before routing
pub type BookmarksApp = NormalizePath<Router>;

/// Application state shared by every handler
#[derive(Clone)]
pub struct AppState {
    pub bookmark_service: BookmarkService,
}

/// Initialize the backend on top of the configured storage
pub async fn initialize_backend(settings: &StorageSettings) -> Result<AppState> {
    let storage: Arc<dyn BookmarkStorage> = match settings.backend {
        StorageBackend::Sqlite => {
            info!("Setting up database");
            let db_conn = DbConnection::init(settings)
                .await
                .context("Failed to open bookmarks database")?;
            Arc::new(SqliteBookmarkRepository::new(db_conn))
        }
        StorageBackend::Memory => {
            info!("Using in-memory bookmark storage; data is lost on shutdown");
            Arc::new(MemoryBookmarkStorage::new())
        }
    };

    info!("Setting up application state");
    Ok(AppState {
        bookmark_service: BookmarkService::new(storage),
    })
}

/// Create the Axum router with the bookmark routes mounted under `api.mount_path`.
///
/// Requests that match no route get a JSON 404, and `/api/bookmarks/` is
/// served like `/api/bookmarks`.
pub fn create_router(app_state: AppState, api: &ApiSettings) -> Result<BookmarksApp> {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE])
        .allow_headers(Any);

    let cors = match &api.cors_origin {
        Some(origin) => {
            let origin = origin
                .parse::<HeaderValue>()
                .with_context(|| format!("Invalid CORS origin '{}'", origin))?;
            cors.allow_origin(origin)
        }
        None => cors.allow_origin(Any),
    };

    let router = Router::new()
        .nest(&api.mount_path, io::rest::bookmark_apis::router())
        .fallback(io::rest::bookmark_apis::unknown_route)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state);

    Ok(NormalizePath::trim_trailing_slash(router))
}
