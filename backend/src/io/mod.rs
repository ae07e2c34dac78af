//! # IO Module
//!
//! The interface layer between HTTP clients and the bookmark domain.
//!
//! Handlers translate requests into domain calls and domain results into
//! JSON responses. Nothing in here knows which storage backend is active.
//!
//! ## Current Implementation
//!
//! - **Web Framework**: Axum, with services injected through `State`
//! - **Serialization**: Serde JSON, using the DTOs from the `shared` crate
//! - **Error Handling**: One `{"error": {"message": ...}}` shape for every failure

pub mod rest;
