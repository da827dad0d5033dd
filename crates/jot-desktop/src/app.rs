//! Main application component

use dioxus::prelude::*;

use jot_core::cache::AssetCache;
use jot_core::config::AppConfig;
use jot_core::host::{connectivity_channel, Connectivity};

use crate::services::{connectivity, installer, NotebookService};
use crate::state::AppState;
use crate::views::Home;

/// Root application component
#[component]
pub fn App() -> Element {
    // State signals
    let mut notes = use_signal(Vec::new);
    let draft_text = use_signal(String::new);
    let selected_note_id = use_signal(|| None);
    let mut connectivity_state = use_signal(|| Connectivity::Online);
    let mut install_prompt = use_signal(|| None);
    let mut notebook: Signal<Option<NotebookService>> = use_signal(|| None);
    let mut shell_css = use_signal(|| None::<String>);
    let mut initialized = use_signal(|| false);

    // Open the notebook and bring up the asset cache (only once)
    use_effect(move || {
        if initialized() {
            return;
        }
        initialized.set(true); // Mark immediately to prevent double init

        let config = match AppConfig::from_env() {
            Ok(config) => config,
            Err(error) => {
                tracing::error!("Failed to resolve configuration: {error}");
                return;
            }
        };

        let service = NotebookService::open(&config);
        notes.set(service.snapshot());
        notebook.set(Some(service));

        // The install capability is granted at most once per run
        install_prompt.set(installer::installability());

        let cache = AssetCache::new(config.cache_dir.clone(), config.shell_manifest());
        spawn(async move {
            if let Err(error) = cache.install().await {
                tracing::error!("Asset cache install failed: {error}");
            }
            if let Err(error) = cache.activate().await {
                tracing::error!("Asset cache activation failed: {error}");
            }
            // The shell stylesheet goes through the cache, so styling
            // survives a fully offline start
            match cache.fetch("/static/css/main.css").await {
                Ok(asset) => {
                    tracing::debug!("Shell stylesheet served from {:?}", asset.source);
                    shell_css.set(Some(String::from_utf8_lossy(&asset.bytes).into_owned()));
                }
                Err(error) => tracing::warn!("Shell stylesheet unavailable: {error}"),
            }
        });
    });

    // Watch reachability for the lifetime of the root component
    use_future(move || async move {
        let (publisher, mut watcher) = connectivity_channel(Connectivity::Online);
        spawn(async move {
            while let Some(state) = watcher.changed().await {
                tracing::info!("Connectivity changed: {state:?}");
                connectivity_state.set(state);
            }
        });
        connectivity::probe_loop(publisher).await;
    });

    use_context_provider(|| AppState {
        notes,
        draft_text,
        selected_note_id,
        connectivity: connectivity_state,
        install_prompt,
        notebook,
    });

    rsx! {
        div {
            class: "app-container",
            style: "
                min-height: 100vh;
                font-family: system-ui, -apple-system, sans-serif;
                background: #fafafa;
                color: #1a1a1a;
            ",
            {shell_css().map(|css| rsx! {
                style { "{css}" }
            })}
            Home {}
        }
    }
}
