#![allow(non_snake_case)]

use crate::app::{build_client, AppState};
use crate::storage::settings::save_settings;
use dioxus::prelude::*;

pub fn Settings() -> Element {
    rsx! {
        div {
            class: "settings",
            ConnectionSettings {}
            AppearanceSettings {}
        }
    }
}

fn ConnectionSettings() -> Element {
    let mut app_state = use_context::<AppState>();
    let mut host = use_signal(|| app_state.settings.read().effective_host().to_string());
    let mut saved = use_signal(|| false);

    let handle_save = move |_| {
        let mut settings = app_state.settings.read().clone();
        settings.ollama_host = host();
        // A host saved here replaces the environment one for this session too
        settings.host_override = None;
        settings.validate();

        if let Err(error) = save_settings(&settings) {
            tracing::error!("Failed to save settings: {}", error);
        }

        tracing::info!("Ollama host set to {}", settings.ollama_host);
        host.set(settings.ollama_host.clone());
        app_state.client.set(build_client(&settings.ollama_host));
        app_state.models.write().replace(Vec::new());
        app_state.settings.set(settings);
        saved.set(true);
    };

    rsx! {
        div {
            class: "card",

            h3 { class: "card-title", "Connection" }

            label {
                class: "field-label",
                r#for: "ollama-host",
                "Ollama host"
            }
            div {
                class: "field-hint",
                "Base URL of the inference server. OLLAMA_HOST overrides it at startup."
            }
            div {
                class: "field-row",
                input {
                    id: "ollama-host",
                    r#type: "text",
                    class: "text-input",
                    value: "{host}",
                    placeholder: "http://127.0.0.1:11434",
                    oninput: move |evt| {
                        host.set(evt.value());
                        saved.set(false);
                    },
                }
                button {
                    class: "btn-primary",
                    onclick: handle_save,
                    "Save"
                }
            }
            if saved() {
                div { class: "field-success", "Saved" }
            }
        }
    }
}

fn AppearanceSettings() -> Element {
    let mut app_state = use_context::<AppState>();
    let dark_mode = app_state.settings.read().theme == "dark";

    rsx! {
        div {
            class: "card",

            h3 { class: "card-title", "Theme" }

            div {
                class: "field-row spread",
                div {
                    div { class: "field-label", "Dark Mode" }
                    div { class: "field-hint", "Switch between light and dark theme" }
                }
                button {
                    onclick: move |_| {
                        let mut settings = app_state.settings.write();
                        settings.theme = if dark_mode { "light".to_string() } else { "dark".to_string() };
                        if let Err(error) = save_settings(&settings) {
                            tracing::error!("Failed to save settings: {}", error);
                        }
                    },
                    class: if dark_mode { "toggle-switch active" } else { "toggle-switch" },
                    div { class: "toggle-switch-knob" }
                }
            }
        }
    }
}
