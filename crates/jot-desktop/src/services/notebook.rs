//! Notebook service for the desktop application

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use jot_core::config::AppConfig;
use jot_core::store::JsonNoteStore;
use jot_core::{Note, NoteId, Notebook, Result};

/// Shared handle over the core notebook.
///
/// Mutations persist synchronously before returning, so callers can refresh
/// their view right away.
#[derive(Clone)]
pub struct NotebookService {
    inner: Arc<Mutex<Notebook<JsonNoteStore>>>,
}

impl NotebookService {
    /// Open the notebook at the configured data path
    #[must_use]
    pub fn open(config: &AppConfig) -> Self {
        let store = JsonNoteStore::new(config.notes_path());
        Self {
            inner: Arc::new(Mutex::new(Notebook::load(store))),
        }
    }

    /// Current notes in display order
    #[must_use]
    pub fn snapshot(&self) -> Vec<Note> {
        self.lock().notes().to_vec()
    }

    pub fn add(&self, text: &str) -> Result<Option<NoteId>> {
        self.lock().add(text)
    }

    pub fn delete(&self, id: NoteId) -> Result<bool> {
        self.lock().delete(id)
    }

    fn lock(&self) -> MutexGuard<'_, Notebook<JsonNoteStore>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn test_config(dir: &tempfile::TempDir) -> AppConfig {
        AppConfig {
            data_dir: dir.path().join("data"),
            cache_dir: dir.path().join("cache"),
            shell_base_url: "http://127.0.0.1:1".to_string(),
            shell_version: "test".to_string(),
        }
    }

    #[test]
    fn service_round_trips_notes() {
        let dir = tempfile::tempdir().unwrap();
        let service = NotebookService::open(&test_config(&dir));

        let id = service.add("from the desktop").unwrap().unwrap();
        assert_eq!(service.snapshot().len(), 1);

        // A second handle over the same file sees the persisted note
        let reopened = NotebookService::open(&test_config(&dir));
        assert_eq!(reopened.snapshot()[0].text, "from the desktop");

        assert!(service.delete(id).unwrap());
        assert_eq!(service.snapshot(), Vec::new());
    }
}
