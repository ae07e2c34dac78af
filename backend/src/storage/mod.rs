//! # Storage Module
//!
//! Handles all data persistence for the bookmarks service.
//!
//! The domain layer only sees the [`BookmarkStorage`] trait, so the concrete
//! backend can be swapped without touching validation or the REST layer.
//!
//! ## Current Implementation
//!
//! - **Primary Storage**: SQLite through SQLx, one `bookmarks` table
//! - **Memory Storage**: an in-memory map behind the same trait, for local runs and tests
//!
//! ## Design Principles
//!
//! - **Repository Pattern**: Clean separation between domain and data access
//! - **Dependency Inversion**: Domain depends on the storage trait, not implementations
//! - **Statement Atomicity**: Each trait call is a single insert/update/delete

pub mod connection;
pub mod error;
pub mod memory;
pub mod sqlite;
pub mod traits;

#[cfg(test)]
pub mod test_utils;

pub use connection::DbConnection;
pub use error::StorageError;
pub use memory::MemoryBookmarkStorage;
pub use sqlite::SqliteBookmarkRepository;
pub use traits::{BookmarkStorage, StorageResult};
