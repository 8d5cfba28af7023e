//! Error types for the movie catalog client.
//!
//! # Design
//! Every way an operation can fail lands in one enum, and the application
//! state later collapses all of it into a single failure signal.
//! `NotFound` gets a dedicated variant because callers frequently distinguish
//! "the record does not exist" from "the server returned an unexpected
//! status."

use std::fmt;

/// Errors returned by `CatalogClient` operations and `Transport` executions.
#[derive(Debug)]
pub enum ApiError {
    /// The request could not be executed at all (connect failure, DNS,
    /// broken stream). No response was obtained.
    Transport(String),

    /// The server returned 404 — the requested movie does not exist.
    NotFound,

    /// The server returned a non-2xx status other than 404.
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    SerializationError(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Transport(msg) => write!(f, "transport failed: {msg}"),
            ApiError::NotFound => write!(f, "movie not found"),
            ApiError::HttpError { status, body } => {
                write!(f, "HTTP {status}: {body}")
            }
            ApiError::DeserializationError(msg) => {
                write!(f, "deserialization failed: {msg}")
            }
            ApiError::SerializationError(msg) => {
                write!(f, "serialization failed: {msg}")
            }
        }
    }
}

impl std::error::Error for ApiError {}
