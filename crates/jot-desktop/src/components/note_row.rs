//! Note row component

use dioxus::prelude::*;

use jot_core::Note;

use crate::state::AppState;

/// Characters of text shown in the list before the full view takes over
const PREVIEW_CHARS: usize = 30;

/// A single note row: truncated preview plus a delete affordance.
///
/// Clicking the row opens the viewer; the delete button swallows the click so
/// it never doubles as a select.
#[component]
pub fn NoteRow(note: Note) -> Element {
    let mut state = use_context::<AppState>();
    let note_id = note.id;
    let preview = note.preview(PREVIEW_CHARS);

    rsx! {
        div {
            class: "note-row",
            style: "
                display: flex;
                justify-content: space-between;
                align-items: center;
                padding: 10px;
                border: 1px solid #ccc;
                border-radius: 6px;
                cursor: pointer;
                background: #fff;
            ",
            onclick: move |_| state.selected_note_id.set(Some(note_id)),

            span {
                style: "flex: 1; overflow: hidden; text-overflow: ellipsis; white-space: nowrap;",
                "{preview}"
            }

            button {
                style: "color: red; margin-left: 10px;",
                onclick: move |evt| {
                    evt.stop_propagation();
                    state.delete_note(note_id);
                },
                "Delete"
            }
        }
    }
}
