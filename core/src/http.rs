//! HTTP transport types and the host-does-IO seam.
//!
//! # Design
//! These types describe HTTP requests and responses as plain data. The core
//! crate builds `HttpRequest` values and parses `HttpResponse` values without
//! ever touching the network — a `Transport` implementation supplied by the
//! host executes the actual round-trip. This separation keeps the core
//! deterministic: unit tests script responses, the reference host runs ureq.
//!
//! All fields use owned types (`String`, `Vec`) so values can be moved across
//! threads and stored freely.

use crate::error::ApiError;

/// HTTP method for a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

/// An HTTP request described as plain data.
///
/// Built by `CatalogClient::build_*` methods and handed to a [`Transport`]
/// for execution.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
///
/// Produced by a [`Transport`], then passed to `CatalogClient::parse_*`
/// methods for status interpretation and deserialization.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

/// Executes built requests against the network (or a test double).
///
/// Implementations must return non-2xx statuses as an `HttpResponse`, not an
/// error — status interpretation belongs to the client's `parse_*` methods.
/// `ApiError::Transport` is reserved for failures where no response was
/// obtained at all.
pub trait Transport {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}
