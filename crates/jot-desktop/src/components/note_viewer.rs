//! Note viewer modal

use dioxus::prelude::*;

use jot_core::Note;

use crate::state::AppState;

/// Full-text detail view, shown as a modal over the list.
///
/// Clicking the backdrop closes it; clicks inside the panel stay inside.
#[component]
pub fn NoteViewer(note: Note) -> Element {
    let mut state = use_context::<AppState>();

    rsx! {
        div {
            class: "note-viewer-backdrop",
            style: "
                position: fixed;
                top: 0;
                left: 0;
                width: 100vw;
                height: 100vh;
                background: rgba(0, 0, 0, 0.5);
                display: flex;
                align-items: center;
                justify-content: center;
                z-index: 1000;
            ",
            onclick: move |_| state.selected_note_id.set(None),

            div {
                class: "note-viewer",
                style: "
                    background: #fff;
                    color: #111;
                    padding: 20px;
                    border-radius: 10px;
                    max-width: 400px;
                    width: 90%;
                    box-shadow: 0 0 10px rgba(0, 0, 0, 0.3);
                ",
                onclick: move |evt| evt.stop_propagation(),

                h2 { style: "margin-bottom: 10px;", "Note" }
                p { style: "white-space: pre-wrap;", "{note.text}" }
                button {
                    style: "margin-top: 15px;",
                    onclick: move |_| state.selected_note_id.set(None),
                    "Close"
                }
            }
        }
    }
}
