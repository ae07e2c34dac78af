//! # SQLite Storage Module
//!
//! SQLite-backed implementation of [`BookmarkStorage`](crate::storage::BookmarkStorage).
//! The connection and schema live in [`crate::storage::connection`].

pub mod bookmark_repository;

pub use bookmark_repository::BookmarkRepository as SqliteBookmarkRepository;
