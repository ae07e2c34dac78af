//! # In-Memory Storage Module
//!
//! A process-local store with the same contract as the SQLite repository.
//! Selected with `storage.backend = "memory"`; handy for demos and tests.

pub mod bookmark_repository;

pub use bookmark_repository::MemoryBookmarkStorage;
