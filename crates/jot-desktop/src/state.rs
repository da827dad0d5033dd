//! Application state management
//!
//! All UI state lives in this container, constructed by the root component
//! and handed down via context. There are no ambient globals.

use dioxus::prelude::*;

use jot_core::host::{Connectivity, InstallPrompt};
use jot_core::{Note, NoteId};

use crate::services::NotebookService;

/// Global application state
#[derive(Clone, Copy)]
pub struct AppState {
    /// All notes in display order
    pub notes: Signal<Vec<Note>>,
    /// Text currently in the composer input
    pub draft_text: Signal<String>,
    /// Note shown in the viewer modal, if any
    pub selected_note_id: Signal<Option<NoteId>>,
    /// Last probed reachability
    pub connectivity: Signal<Connectivity>,
    /// Install capability, held until spent
    pub install_prompt: Signal<Option<InstallPrompt>>,
    /// Notebook service once opened
    pub notebook: Signal<Option<NotebookService>>,
}

impl AppState {
    /// Get the note shown in the viewer
    #[must_use]
    pub fn selected_note(&self) -> Option<Note> {
        let selected = (self.selected_note_id)()?;
        (self.notes)().into_iter().find(|note| note.id == selected)
    }

    /// Append the draft as a new note and clear the composer.
    ///
    /// A blank draft is ignored and stays in the input.
    pub fn add_note(&mut self) {
        let Some(service) = self.notebook.read().clone() else {
            return;
        };
        let draft = self.draft_text.read().clone();
        match service.add(&draft) {
            Ok(Some(id)) => {
                tracing::debug!("Added note {id}");
                self.notes.set(service.snapshot());
                self.draft_text.set(String::new());
            }
            Ok(None) => {}
            Err(error) => tracing::error!("Failed to save note: {error}"),
        }
    }

    /// Delete a note.
    ///
    /// The viewer is closed only when it was showing that note.
    pub fn delete_note(&mut self, id: NoteId) {
        let Some(service) = self.notebook.read().clone() else {
            return;
        };
        match service.delete(id) {
            Ok(true) => {
                self.notes.set(service.snapshot());
                let selection = selection_after_delete((self.selected_note_id)(), id);
                self.selected_note_id.set(selection);
            }
            Ok(false) => {}
            Err(error) => tracing::error!("Failed to delete note: {error}"),
        }
    }

    /// Run the install flow, spending the capability.
    pub fn install_app(&mut self) {
        let Some(prompt) = self.install_prompt.write().take() else {
            return;
        };
        match prompt.prompt() {
            Ok(choice) => tracing::info!("Install prompt result: {choice:?}"),
            Err(error) => tracing::error!("Install failed: {error}"),
        }
    }
}

/// Viewer selection after a successful delete: cleared only when the deleted
/// note was the one on screen.
fn selection_after_delete(selected: Option<NoteId>, deleted: NoteId) -> Option<NoteId> {
    match selected {
        Some(current) if current == deleted => None,
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn deleting_the_selected_note_clears_the_viewer() {
        let deleted = NoteId::from_millis(10);
        assert_eq!(selection_after_delete(Some(deleted), deleted), None);
    }

    #[test]
    fn deleting_another_note_keeps_the_viewer() {
        let selected = NoteId::from_millis(10);
        let deleted = NoteId::from_millis(20);
        assert_eq!(
            selection_after_delete(Some(selected), deleted),
            Some(selected)
        );
    }

    #[test]
    fn deleting_with_no_viewer_open_stays_closed() {
        assert_eq!(selection_after_delete(None, NoteId::from_millis(10)), None);
    }
}
