//! Install button component

use dioxus::prelude::*;

use crate::state::AppState;

/// Rendered only while the install capability is held; one click spends it
#[component]
pub fn InstallButton() -> Element {
    let mut state = use_context::<AppState>();

    rsx! {
        button {
            id: "install-btn",
            style: "
                margin-top: 20px;
                padding: 10px 20px;
                background: #4caf50;
                color: white;
                border: none;
                border-radius: 5px;
                cursor: pointer;
            ",
            onclick: move |_| state.install_app(),
            "Install Jot"
        }
    }
}
