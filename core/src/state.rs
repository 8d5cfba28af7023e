//! The owned application state and its CRUD orchestration.
//!
//! # Design
//! `AppState` composes the catalog client, the collection view, the form
//! draft, and the editor-open flag into one explicit value a presentation
//! layer renders from; there is no ambient shared state. Every operation
//! takes the host's `Transport`, executes synchronously, and collapses any
//! failure into a logged `false`: no error crosses into the presentation
//! layer, nothing is retried, and a failed operation leaves every piece of
//! state exactly as it was.
//!
//! Every successful write triggers exactly one follow-up list fetch. The
//! server is the sole source of truth; the collection is only ever replaced
//! wholesale, never patched.

use crate::client::CatalogClient;
use crate::form::{Field, MovieForm};
use crate::http::Transport;
use crate::list::MovieList;

/// Client-side state of the whole application.
#[derive(Debug, Clone)]
pub struct AppState {
    client: CatalogClient,
    list: MovieList,
    form: MovieForm,
    editor_open: bool,
}

impl AppState {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: CatalogClient::new(base_url),
            list: MovieList::new(),
            form: MovieForm::new(),
            editor_open: false,
        }
    }

    pub fn list(&self) -> &MovieList {
        &self.list
    }

    pub fn form(&self) -> &MovieForm {
        &self.form
    }

    /// Whether the editing surface (the create/edit form) is open.
    pub fn editor_open(&self) -> bool {
        self.editor_open
    }

    pub fn set_search(&mut self, term: &str) {
        self.list.set_search(term);
    }

    /// Fetch the full collection and replace the local snapshot. On failure
    /// the prior snapshot stays untouched.
    pub fn refresh(&mut self, transport: &impl Transport) -> bool {
        let request = self.client.build_list_movies();
        match transport
            .execute(request)
            .and_then(|response| self.client.parse_list_movies(response))
        {
            Ok(movies) => {
                self.list.replace(movies);
                true
            }
            Err(err) => {
                tracing::error!("failed to fetch movies: {err}");
                false
            }
        }
    }

    /// Open the editor with an empty draft.
    pub fn open_create(&mut self) {
        self.form.open_for_create();
        self.editor_open = true;
    }

    /// Open the editor populated from the record with the given id. Returns
    /// false (editor stays closed) when the id is not in the collection.
    pub fn open_edit(&mut self, id: &str) -> bool {
        let Some(movie) = self.list.find(id).cloned() else {
            return false;
        };
        self.form.open_for_edit(&movie);
        self.editor_open = true;
        true
    }

    pub fn close_editor(&mut self) {
        self.editor_open = false;
    }

    pub fn set_field(&mut self, field: Field, value: &str) {
        self.form.set_field(field, value);
    }

    /// Submit the draft: update when editing, create otherwise. On success
    /// the draft is cleared, the editor closes, and the collection is
    /// re-fetched; on failure the editor stays open with the draft intact.
    ///
    /// The returned flag reports the write itself — if the follow-up fetch
    /// fails the previous snapshot simply remains in place.
    pub fn submit(&mut self, transport: &impl Transport) -> bool {
        let draft = self.form.draft().clone();
        let result = match self.form.editing() {
            Some(id) => self
                .client
                .build_update_movie(id, &draft)
                .and_then(|request| transport.execute(request))
                .and_then(|response| self.client.parse_update_movie(response).map(|_| ())),
            None => self
                .client
                .build_create_movie(&draft)
                .and_then(|request| transport.execute(request))
                .and_then(|response| self.client.parse_create_movie(response).map(|_| ())),
        };

        match result {
            Ok(()) => {
                self.form.reset();
                self.editor_open = false;
                self.refresh(transport);
                true
            }
            Err(err) => {
                let action = if self.form.is_editing() { "update" } else { "create" };
                tracing::error!("failed to {action} movie: {err}");
                false
            }
        }
    }

    /// Delete the record with the given id, then re-fetch the collection.
    /// On failure the collection stays untouched.
    pub fn remove(&mut self, transport: &impl Transport, id: &str) -> bool {
        let request = self.client.build_delete_movie(id);
        match transport
            .execute(request)
            .and_then(|response| self.client.parse_delete_movie(response))
        {
            Ok(()) => {
                self.refresh(transport);
                true
            }
            Err(err) => {
                tracing::error!("failed to delete movie: {err}");
                false
            }
        }
    }
}
