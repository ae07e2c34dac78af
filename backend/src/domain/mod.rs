//! # Domain Module
//!
//! Contains the business rules for bookmarks, independent of HTTP and of the
//! storage backend.
//!
//! ## Module Organization
//!
//! - **models**: The bookmark entity, a validated new bookmark, and a partial update
//! - **validation**: Schema-driven checks for create and update payloads
//! - **sanitizer**: Escaping of free-text fields for outbound representations
//! - **bookmark_service**: CRUD orchestration over a storage collaborator
//! - **error**: Validation and service error types
//!
//! ## Business Rules
//!
//! - `title` and `url` are required and never empty
//! - `rating` is an integer between 1 and 5
//! - Updates only change the fields that were supplied
//! - Deletion is permanent
//! - Stored text is never altered; sanitization applies to output only

pub mod bookmark_service;
pub mod error;
pub mod models;
pub mod sanitizer;
pub mod validation;

pub use bookmark_service::BookmarkService;
pub use error::{BookmarkError, BookmarkResult, ValidationError};
