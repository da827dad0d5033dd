use std::path::Path;

use crate::commands::common::{format_note_lines, note_to_list_item, open_notebook, NoteListItem};
use crate::error::CliError;

pub fn run_list(limit: usize, as_json: bool, notes_path: Option<&Path>) -> Result<(), CliError> {
    let notebook = open_notebook(notes_path)?;
    let notes: Vec<_> = notebook.notes().iter().take(limit).cloned().collect();

    if as_json {
        let json_items = notes
            .iter()
            .map(note_to_list_item)
            .collect::<Vec<NoteListItem>>();
        println!("{}", serde_json::to_string_pretty(&json_items)?);
    } else {
        for line in format_note_lines(&notes) {
            println!("{line}");
        }
    }

    Ok(())
}
