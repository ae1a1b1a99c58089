//! Root Dioxus application component
//!
//! This module contains the main App component and the state shared with every page.

use crate::ollama::{OllamaApi, OllamaClient};
use crate::prompt::ResponseBuffer;
use crate::storage::settings::{load_settings, AppSettings};
use crate::types::model::ModelList;
use crate::ui::Layout;
use dioxus::prelude::*;
use std::sync::Arc;

const STYLE: &str = include_str!("../assets/main.css");

/// Global application state shared across components
#[derive(Clone, Copy)]
pub struct AppState {
    pub settings: Signal<AppSettings>,
    /// `None` while the configured host is not a usable URL
    pub client: Signal<Option<Arc<dyn OllamaApi>>>,
    pub models: Signal<ModelList>,
    /// Text shown in the result area; every run appends to it
    pub output: Signal<ResponseBuffer>,
    /// Message for the blocking alert dialog
    pub alert: Signal<Option<String>>,
}

impl AppState {
    pub fn new() -> Self {
        let settings = load_settings();
        let client = build_client(settings.effective_host());
        tracing::info!("AppState initialized (host: {})", settings.effective_host());

        Self {
            settings: Signal::new(settings),
            client: Signal::new(client),
            models: Signal::new(ModelList::default()),
            output: Signal::new(ResponseBuffer::new()),
            alert: Signal::new(None),
        }
    }
}

/// Build the API client for `host`, logging instead of failing on a bad URL.
pub fn build_client(host: &str) -> Option<Arc<dyn OllamaApi>> {
    match OllamaClient::new(host) {
        Ok(client) => Some(Arc::new(client)),
        Err(e) => {
            tracing::error!("Cannot create Ollama client: {}", e);
            None
        }
    }
}

#[component]
pub fn App() -> Element {
    let app_state = use_context_provider(AppState::new);
    let theme = app_state.settings.read().theme.clone();

    rsx! {
        style { {STYLE} }
        div {
            class: "app theme-{theme}",
            Layout {}
        }
    }
}
