use std::path::Path;

use serde::Serialize;

use jot_core::config::AppConfig;
use jot_core::store::JsonNoteStore;
use jot_core::{Note, NoteId, Notebook};

use crate::error::CliError;

/// Characters of note text shown per list line
const LIST_PREVIEW_CHARS: usize = 30;

#[derive(Debug, Serialize)]
pub struct NoteListItem {
    pub id: i64,
    pub preview: String,
    pub text: String,
    pub created_at_iso: String,
}

/// Open the notebook, honoring an explicit `--notes-path` override.
pub fn open_notebook(notes_path: Option<&Path>) -> Result<Notebook<JsonNoteStore>, CliError> {
    let path = match notes_path {
        Some(path) => path.to_path_buf(),
        None => AppConfig::from_env()?.notes_path(),
    };
    tracing::debug!("Opening note document at {}", path.display());
    Ok(Notebook::load(JsonNoteStore::new(path)))
}

/// Join argument words into one capture, rejecting blank input.
///
/// Only the emptiness check trims; the returned text keeps the user's
/// original whitespace.
pub fn resolve_note_content(parts: &[String]) -> Result<String, CliError> {
    let joined = parts.join(" ");
    if joined.trim().is_empty() {
        return Err(CliError::EmptyContent);
    }
    Ok(joined)
}

pub fn parse_note_id(raw: &str) -> Result<NoteId, CliError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CliError::EmptyNoteId);
    }
    trimmed
        .parse()
        .map_err(|_| CliError::InvalidNoteId(trimmed.to_string()))
}

pub fn note_to_list_item(note: &Note) -> NoteListItem {
    NoteListItem {
        id: note.id.as_millis(),
        preview: note.preview(LIST_PREVIEW_CHARS),
        text: note.text.clone(),
        created_at_iso: format_note_timestamp(note.id),
    }
}

/// ISO-8601 creation time derived from the id
pub fn format_note_timestamp(id: NoteId) -> String {
    chrono::DateTime::from_timestamp_millis(id.as_millis())
        .map_or_else(|| "unknown".to_string(), |ts| ts.to_rfc3339())
}

pub fn format_note_lines(notes: &[Note]) -> Vec<String> {
    notes
        .iter()
        .map(|note| {
            format!(
                "{}  {}  {}",
                note.id,
                format_note_timestamp(note.id),
                note.preview(LIST_PREVIEW_CHARS)
            )
        })
        .collect()
}
