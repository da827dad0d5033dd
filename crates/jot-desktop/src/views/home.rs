//! Home view - main application screen

use dioxus::prelude::*;

use crate::components::{InstallButton, NoteComposer, NoteList, NoteViewer, OfflineBanner};
use crate::state::AppState;

/// Home view component - the single screen of the app
#[component]
pub fn Home() -> Element {
    let state = use_context::<AppState>();
    let offline = (state.connectivity)().is_offline();
    let installable = state.install_prompt.read().is_some();
    let selected = state.selected_note();

    rsx! {
        div {
            class: "home-container",
            style: "max-width: 500px; margin: 0 auto; padding: 20px;",

            if offline {
                OfflineBanner {}
            }

            h1 {
                style: "font-size: 1.5rem; font-weight: bold; margin-bottom: 10px;",
                "Notes"
            }

            NoteComposer {}
            NoteList {}

            {selected.map(|note| rsx! {
                NoteViewer { note }
            })}

            if installable {
                InstallButton {}
            }
        }
    }
}
