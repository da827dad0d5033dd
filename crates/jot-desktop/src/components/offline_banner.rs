//! Offline banner component

use dioxus::prelude::*;

/// Fixed banner shown while the network is unreachable
#[component]
pub fn OfflineBanner() -> Element {
    rsx! {
        div {
            class: "offline-banner",
            style: "
                position: fixed;
                top: 0;
                left: 0;
                width: 100%;
                background: #ff4d4f;
                color: #fff;
                text-align: center;
                padding: 10px;
                z-index: 9999;
                font-weight: bold;
            ",
            "You are offline - notes stay on this device"
        }
    }
}
