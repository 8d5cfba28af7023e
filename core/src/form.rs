//! Editable draft state for the create/edit form.
//!
//! The draft is an owned value, populated by cloning out of the collection,
//! so edits can never alias a record the list is still displaying. Whether a
//! submit becomes a create or an update is decided by `editing`: the id of
//! the record being edited, absent when composing a new one.

use crate::types::{Movie, MovieDraft};

/// Leaf fields of the draft, addressable one at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Isbn,
    DirectorFirstname,
    DirectorLastname,
}

/// Draft of a movie record plus the edit-vs-create mode flag.
///
/// Performs no validation — fields are marked required at the input boundary
/// only.
#[derive(Debug, Clone, Default)]
pub struct MovieForm {
    draft: MovieDraft,
    editing: Option<String>,
}

impl MovieForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all fields to empty and clear the edit reference.
    pub fn open_for_create(&mut self) {
        self.reset();
    }

    /// Populate the draft from an existing record, defaulting a missing
    /// director to empty names, and remember the record's id.
    pub fn open_for_edit(&mut self, movie: &Movie) {
        self.draft = MovieDraft {
            title: movie.title.clone(),
            isbn: movie.isbn.clone(),
            director: movie.director.clone().unwrap_or_default(),
        };
        self.editing = Some(movie.id.clone());
    }

    /// Update exactly one leaf field, preserving all others.
    pub fn set_field(&mut self, field: Field, value: &str) {
        let value = value.to_string();
        match field {
            Field::Title => self.draft.title = value,
            Field::Isbn => self.draft.isbn = value,
            Field::DirectorFirstname => self.draft.director.firstname = value,
            Field::DirectorLastname => self.draft.director.lastname = value,
        }
    }

    pub fn draft(&self) -> &MovieDraft {
        &self.draft
    }

    /// Id of the record being edited, or `None` when creating.
    pub fn editing(&self) -> Option<&str> {
        self.editing.as_deref()
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    /// Clear the draft and the edit reference. Called after a successful
    /// submit; a failed submit leaves everything in place so the user can
    /// retry or correct.
    pub fn reset(&mut self) {
        self.draft = MovieDraft::default();
        self.editing = None;
    }
}
