//! Note list component

use dioxus::prelude::*;

use super::NoteRow;
use crate::state::AppState;

/// Vertically stacked list of notes
#[component]
pub fn NoteList() -> Element {
    let state = use_context::<AppState>();
    let notes = (state.notes)();

    rsx! {
        div {
            class: "note-list",
            style: "display: flex; flex-direction: column; gap: 10px;",

            if notes.is_empty() {
                div {
                    style: "padding: 20px; text-align: center; color: #888;",
                    "No notes yet"
                }
            } else {
                for note in notes {
                    NoteRow { key: "{note.id}", note }
                }
            }
        }
    }
}
