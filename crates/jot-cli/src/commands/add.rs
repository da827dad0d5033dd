use std::path::Path;

use crate::commands::common::{open_notebook, resolve_note_content};
use crate::error::CliError;

pub fn run_add(content_parts: &[String], notes_path: Option<&Path>) -> Result<(), CliError> {
    let content = resolve_note_content(content_parts)?;

    let mut notebook = open_notebook(notes_path)?;
    let id = notebook.add(content)?.ok_or(CliError::EmptyContent)?;

    println!("{id}");
    Ok(())
}
