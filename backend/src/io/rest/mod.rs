//! # REST API Interface Layer
//!
//! HTTP endpoints for the bookmark collection.
//!
//! ## Key Responsibilities
//!
//! - **API Endpoints**: `GET`/`POST` on the collection, `GET`/`PATCH`/`DELETE` on a member
//! - **Error Handling**: Converting domain errors to HTTP status codes
//! - **Output Sanitization**: Escaping markup in every bookmark that leaves the service
//! - **Logging**: One line per handled request

pub mod bookmark_apis;
pub mod error;
pub mod mappers;

pub use error::ApiError;
