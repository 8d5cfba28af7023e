//! Domain DTOs for the movie catalog API.
//!
//! # Design
//! These types mirror the catalog service's schema but are defined
//! independently of the mock-server crate. Integration tests catch any
//! schema drift between the two. The `id` is opaque text assigned by the
//! server — the client never mints or inspects one, so it stays a `String`
//! rather than a parsed identifier type.

use serde::{Deserialize, Serialize};

/// Director credit embedded in a movie record.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Director {
    #[serde(default)]
    pub firstname: String,
    #[serde(default)]
    pub lastname: String,
}

/// A single movie record returned by the API.
///
/// The server may send `"director": null` or omit the field entirely;
/// both deserialize to `None`. Use the accessor methods when a missing
/// director should read as empty names.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Movie {
    pub id: String,
    pub title: String,
    pub isbn: String,
    #[serde(default)]
    pub director: Option<Director>,
}

impl Movie {
    /// Director first name, or the empty string when the record carries no
    /// director.
    pub fn director_firstname(&self) -> &str {
        self.director.as_ref().map_or("", |d| d.firstname.as_str())
    }

    /// Director last name, or the empty string when the record carries no
    /// director.
    pub fn director_lastname(&self) -> &str {
        self.director.as_ref().map_or("", |d| d.lastname.as_str())
    }
}

/// Request payload for creating or updating a movie.
///
/// The server assigns the id on create and preserves it on update, so the
/// draft never carries one. Unlike a fetched record, a draft always has a
/// concrete director sub-object (possibly with empty names).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MovieDraft {
    pub title: String,
    pub isbn: String,
    #[serde(default)]
    pub director: Director,
}
