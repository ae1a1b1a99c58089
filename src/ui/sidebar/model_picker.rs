use crate::app::AppState;
use crate::ollama::refresh_models;
use crate::types::model::ModelList;
use dioxus::prelude::*;

/// Reload the model list from the server into `AppState::models`.
fn spawn_refresh(app_state: AppState) {
    let api = app_state.client.read().clone();
    let mut models = app_state.models;
    spawn(async move {
        let mut list = ModelList::default();
        match api {
            Some(api) => refresh_models(api.as_ref(), &mut list).await,
            None => tracing::error!("Error loading models: no valid Ollama host configured"),
        }
        models.set(list);
    });
}

#[component]
pub fn ModelPicker() -> Element {
    let app_state = use_context::<AppState>();

    // Runs on mount, i.e. each time the chat page is activated
    use_effect(move || spawn_refresh(app_state));

    let handle_refresh = move |_| spawn_refresh(app_state);
    let host = app_state.settings.read().effective_host().to_string();

    let options: Vec<(String, bool)> = {
        let list = app_state.models.read();
        let options = list
            .names()
            .into_iter()
            .map(|name| (name.to_string(), list.selected() == Some(name)))
            .collect();
        options
    };

    rsx! {
        div {
            class: "model-picker",

            // Header with Refresh
            div {
                class: "model-picker-header",
                span { class: "section-title", "Model" }
                button {
                    onclick: handle_refresh,
                    class: "icon-button",
                    title: "Reload models",
                    svg {
                        view_box: "0 0 24 24",
                        fill: "none",
                        stroke: "currentColor",
                        stroke_width: "2",
                        stroke_linecap: "round",
                        stroke_linejoin: "round",
                        path { d: "M23 4v6h-6" }
                        path { d: "M1 20v-6h6" }
                        path { d: "M3.51 9a9 9 0 0 1 14.85-3.36L23 10M1 14l4.64 4.36A9 9 0 0 0 20.49 15" }
                    }
                }
            }

            if options.is_empty() {
                div {
                    class: "empty-state",
                    span { "No models found" }
                    span { class: "hint", "Is Ollama running at {host}?" }
                }
            } else {
                div {
                    id: "radio-container",
                    class: "model-options",
                    for (name, checked) in options {
                        ModelOption { name: name, checked: checked }
                    }
                }
            }
        }
    }
}

#[component]
fn ModelOption(name: String, checked: bool) -> Element {
    let app_state = use_context::<AppState>();
    let mut models = app_state.models;
    let value = name.clone();

    rsx! {
        label {
            class: "model-option",
            input {
                r#type: "radio",
                name: "model-selection",
                value: "{name}",
                checked: checked,
                onchange: move |_| {
                    if let Err(e) = models.write().select(&value) {
                        tracing::warn!("{}", e);
                    }
                },
            }
            span { "{name}" }
        }
    }
}
