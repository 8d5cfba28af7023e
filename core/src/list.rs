//! Collection snapshot and derived search view.
//!
//! The collection is `None` until the first successful fetch completes, so a
//! renderer can tell "still loading" from "loaded with zero records". After
//! that it is only ever replaced wholesale — the server is the source of
//! truth and this is just the cache of the last successful fetch.

use crate::types::Movie;

/// The fetched collection plus a free-text search term.
#[derive(Debug, Clone, Default)]
pub struct MovieList {
    movies: Option<Vec<Movie>>,
    search: String,
}

impl MovieList {
    pub fn new() -> Self {
        Self::default()
    }

    /// True before the first successful fetch.
    pub fn is_loading(&self) -> bool {
        self.movies.is_none()
    }

    /// Replace the whole collection with a fresh snapshot.
    pub fn replace(&mut self, movies: Vec<Movie>) {
        self.movies = Some(movies);
    }

    /// The unfiltered collection; empty while still loading.
    pub fn movies(&self) -> &[Movie] {
        self.movies.as_deref().unwrap_or(&[])
    }

    pub fn find(&self, id: &str) -> Option<&Movie> {
        self.movies().iter().find(|m| m.id == id)
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, term: &str) {
        self.search = term.to_string();
    }

    /// The records whose title or director name contains the search term as
    /// a case-insensitive substring, in collection order. An empty term
    /// matches everything; a missing director never matches.
    ///
    /// Recomputed on every call; never mutates the collection.
    pub fn filtered(&self) -> Vec<&Movie> {
        let needle = self.search.to_lowercase();
        self.movies()
            .iter()
            .filter(|movie| matches(movie, &needle))
            .collect()
    }
}

fn matches(movie: &Movie, needle: &str) -> bool {
    movie.title.to_lowercase().contains(needle)
        || movie.director_firstname().to_lowercase().contains(needle)
        || movie.director_lastname().to_lowercase().contains(needle)
}
