//! Note list persistence.
//!
//! The whole note list lives in one serialized document, rewritten in display
//! order on every mutation. There is no incremental diffing.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::models::Note;

/// Persistence seam for the note list.
pub trait NoteStore {
    /// Load the persisted note list.
    ///
    /// An absent document yields an empty list. A corrupt document is logged
    /// and also yields an empty list; the caller never sees the failure.
    fn load(&self) -> Vec<Note>;

    /// Persist the full note list, replacing the previous document.
    fn save(&self, notes: &[Note]) -> Result<()>;
}

/// File-backed store holding the list as a single JSON array.
#[derive(Debug, Clone)]
pub struct JsonNoteStore {
    path: PathBuf,
}

impl JsonNoteStore {
    /// Store backed by the given file path
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing document
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl NoteStore for JsonNoteStore {
    fn load(&self) -> Vec<Note> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => return Vec::new(),
            Err(error) => {
                tracing::warn!(
                    "Failed to read note store {}: {error}",
                    self.path.display()
                );
                return Vec::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(notes) => notes,
            Err(error) => {
                tracing::warn!(
                    "Corrupt note store {}, starting empty: {error}",
                    self.path.display()
                );
                Vec::new()
            }
        }
    }

    fn save(&self, notes: &[Note]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let serialized = serde_json::to_string(notes)?;
        fs::write(&self.path, serialized)?;
        Ok(())
    }
}
