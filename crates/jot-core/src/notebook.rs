//! The note list state container.

use crate::error::Result;
use crate::models::{Note, NoteId, NoteIdGenerator};
use crate::store::NoteStore;

/// Owns the in-memory note list and mirrors every mutation to its store.
///
/// When a mutating call returns `Ok`, the persisted document and the
/// in-memory list are equal.
#[derive(Debug)]
pub struct Notebook<S: NoteStore> {
    notes: Vec<Note>,
    ids: NoteIdGenerator,
    store: S,
}

impl<S: NoteStore> Notebook<S> {
    /// Open a notebook, reading the initial list from the store.
    pub fn load(store: S) -> Self {
        let notes = store.load();
        tracing::debug!("Loaded {} notes", notes.len());
        let ids = NoteIdGenerator::seeded(&notes);
        Self { notes, ids, store }
    }

    /// Notes in display order
    #[must_use]
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Look up a note by id
    #[must_use]
    pub fn get(&self, id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|note| note.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Append a note with the given text and persist the list.
    ///
    /// Whitespace-only text is a no-op: nothing is stored and `Ok(None)` is
    /// returned. The stored text keeps its original whitespace.
    pub fn add(&mut self, text: impl Into<String>) -> Result<Option<NoteId>> {
        let text = text.into();
        if text.trim().is_empty() {
            return Ok(None);
        }

        let note = Note::new(self.ids.next_id(), text);
        let id = note.id;
        self.notes.push(note);
        self.store.save(&self.notes)?;
        tracing::debug!("Added note {id}");
        Ok(Some(id))
    }

    /// Remove the note with the given id and persist the list.
    ///
    /// Returns whether a note was removed; an unknown id is a no-op.
    pub fn delete(&mut self, id: NoteId) -> Result<bool> {
        let before = self.notes.len();
        self.notes.retain(|note| note.id != id);
        if self.notes.len() == before {
            return Ok(false);
        }

        self.store.save(&self.notes)?;
        tracing::debug!("Deleted note {id}");
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::store::{JsonNoteStore, NoteStore};

    use super::*;

    fn open_notebook(dir: &tempfile::TempDir) -> Notebook<JsonNoteStore> {
        Notebook::load(JsonNoteStore::new(dir.path().join("notes.json")))
    }

    fn reload(dir: &tempfile::TempDir) -> Vec<Note> {
        JsonNoteStore::new(dir.path().join("notes.json")).load()
    }

    #[test]
    fn store_matches_memory_after_every_mutation() {
        let dir = tempfile::tempdir().unwrap();
        let mut notebook = open_notebook(&dir);

        let first = notebook.add("first").unwrap().unwrap();
        assert_eq!(reload(&dir), notebook.notes());

        notebook.add("second").unwrap().unwrap();
        assert_eq!(reload(&dir), notebook.notes());

        notebook.delete(first).unwrap();
        assert_eq!(reload(&dir), notebook.notes());
    }

    #[test]
    fn add_blank_text_is_a_no_op() {
        let dir = tempfile::tempdir().unwrap();
        let mut notebook = open_notebook(&dir);

        assert_eq!(notebook.add("   \t\n").unwrap(), None);
        assert!(notebook.is_empty());
        // Nothing was written either
        assert_eq!(reload(&dir), Vec::new());
    }

    #[test]
    fn add_keeps_original_whitespace() {
        let dir = tempfile::tempdir().unwrap();
        let mut notebook = open_notebook(&dir);

        let id = notebook.add("  padded  ").unwrap().unwrap();
        assert_eq!(notebook.get(id).unwrap().text, "  padded  ");
    }

    #[test]
    fn delete_unknown_id_is_a_no_op() {
        let dir = tempfile::tempdir().unwrap();
        let mut notebook = open_notebook(&dir);

        notebook.add("keep me").unwrap();
        let removed = notebook.delete(NoteId::from_millis(1)).unwrap();
        assert!(!removed);
        assert_eq!(notebook.len(), 1);
    }

    #[test]
    fn capture_then_blank_then_delete_scenario() {
        let dir = tempfile::tempdir().unwrap();
        let mut notebook = open_notebook(&dir);

        let id = notebook.add("Buy milk").unwrap().unwrap();
        assert_eq!(notebook.len(), 1);
        assert_eq!(notebook.notes()[0].text, "Buy milk");

        assert_eq!(notebook.add("  ").unwrap(), None);
        assert_eq!(notebook.len(), 1);

        assert!(notebook.delete(id).unwrap());
        assert!(notebook.is_empty());
        assert_eq!(reload(&dir), Vec::new());
    }

    #[test]
    fn reopened_notebook_issues_ids_after_existing_notes() {
        let dir = tempfile::tempdir().unwrap();
        let mut notebook = open_notebook(&dir);
        let first = notebook.add("one").unwrap().unwrap();
        drop(notebook);

        let mut reopened = open_notebook(&dir);
        let second = reopened.add("two").unwrap().unwrap();
        assert!(second > first);
        assert_eq!(reopened.len(), 2);
    }

    #[test]
    fn ids_are_strictly_increasing_across_rapid_adds() {
        let dir = tempfile::tempdir().unwrap();
        let mut notebook = open_notebook(&dir);

        let mut previous = None;
        for n in 0..50 {
            let id = notebook.add(format!("note {n}")).unwrap().unwrap();
            if let Some(previous) = previous {
                assert!(id > previous);
            }
            previous = Some(id);
        }
    }
}
