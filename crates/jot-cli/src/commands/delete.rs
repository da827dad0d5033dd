use std::path::Path;

use crate::commands::common::{open_notebook, parse_note_id};
use crate::error::CliError;

pub fn run_delete(id: &str, notes_path: Option<&Path>) -> Result<(), CliError> {
    let note_id = parse_note_id(id)?;

    let mut notebook = open_notebook(notes_path)?;
    if !notebook.delete(note_id)? {
        return Err(CliError::NoteNotFound(note_id.to_string()));
    }

    println!("{note_id}");
    Ok(())
}
