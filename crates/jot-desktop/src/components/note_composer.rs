//! Note composer - text input plus add button

use dioxus::prelude::*;

use crate::state::AppState;

#[component]
pub fn NoteComposer() -> Element {
    let mut state = use_context::<AppState>();

    rsx! {
        div {
            class: "note-composer",
            style: "display: flex; gap: 10px; margin-bottom: 20px;",

            input {
                r#type: "text",
                style: "flex: 1; padding: 8px;",
                placeholder: "Write a note",
                value: "{state.draft_text}",
                oninput: move |evt| state.draft_text.set(evt.value()),
                onkeydown: move |evt| {
                    if evt.key() == Key::Enter {
                        state.add_note();
                    }
                },
            }

            button {
                style: "padding: 8px 12px;",
                onclick: move |_| state.add_note(),
                "Add"
            }
        }
    }
}
