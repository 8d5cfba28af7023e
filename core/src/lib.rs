//! Client-side core for the movie catalog application.
//!
//! # Overview
//! Holds everything the presentation layer renders from: the catalog client
//! (request building and response parsing for the REST API), the form draft,
//! the collection view with its derived search filter, and the owned
//! application state tying them together.
//!
//! # Design
//! - `CatalogClient` is stateless — it holds only `base_url`. Each CRUD
//!   operation is split into `build_*` (produces a request) and `parse_*`
//!   (consumes a response); a host-supplied `Transport` executes the
//!   round-trip, so the core never touches the network itself.
//! - `AppState` owns all mutable UI state and orchestrates the
//!   write-then-refetch flow; the server stays the sole source of truth.
//! - All failures are logged and collapsed into a single success flag —
//!   nothing propagates to the presentation layer.

pub mod client;
pub mod error;
pub mod form;
pub mod http;
pub mod list;
pub mod state;
pub mod types;

pub use client::CatalogClient;
pub use error::ApiError;
pub use form::{Field, MovieForm};
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport};
pub use list::MovieList;
pub use state::AppState;
pub use types::{Director, Movie, MovieDraft};
