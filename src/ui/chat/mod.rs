//! Chat page
//!
//! Model picker, the four prompt sections and the streaming result area.

pub mod input;
pub mod output;

use crate::app::AppState;
use crate::prompt::{prepare, PromptRunner, PromptSections};
use crate::ui::sidebar::model_picker::ModelPicker;
use dioxus::prelude::*;
use input::PromptField;
use output::ResultArea;

#[component]
pub fn ChatView() -> Element {
    let app_state = use_context::<AppState>();

    let goal = use_signal(String::new);
    let return_format = use_signal(String::new);
    let warning = use_signal(String::new);
    let context = use_signal(String::new);

    let handle_submit = move |_| {
        let mut app_state = app_state;
        tracing::debug!("Prompt button clicked");

        let sections = PromptSections {
            goal: goal(),
            return_format: return_format(),
            warning: warning(),
            context: context(),
        };
        let selected = app_state.models.read().selected().map(String::from);

        let request = match prepare(selected.as_deref(), &sections) {
            Ok(request) => request,
            Err(e) => {
                app_state.alert.set(Some(e.to_string()));
                return;
            }
        };

        let Some(api) = app_state.client.read().clone() else {
            tracing::error!("Error: no valid Ollama host configured");
            return;
        };

        // Not guarded: a second click starts a second stream into the same area
        let mut output = app_state.output;
        output.write().clear();
        // Outlives this page so leaving Chat does not cut the stream off
        spawn_forever(async move {
            let mut runner = PromptRunner::new(api);
            let result = runner
                .run(&request, |delta| output.write().append(delta))
                .await;
            if let Err(e) = result {
                tracing::error!("Error: {}", e);
            }
        });
    };

    rsx! {
        div {
            class: "chat",

            aside {
                class: "sidebar",
                ModelPicker {}
            }

            section {
                class: "prompt-panel",

                PromptField {
                    id: "goal-prompt",
                    label: "Goal",
                    placeholder: "What should the model do?",
                    value: goal,
                }
                PromptField {
                    id: "return-format-prompt",
                    label: "Return Format",
                    placeholder: "How should the answer be shaped?",
                    value: return_format,
                }
                PromptField {
                    id: "warning-prompt",
                    label: "Warning",
                    placeholder: "What should it avoid?",
                    value: warning,
                }
                PromptField {
                    id: "context-prompt",
                    label: "Context",
                    placeholder: "Background the model needs",
                    value: context,
                }

                button {
                    id: "button-prompt",
                    class: "btn-primary",
                    onclick: handle_submit,
                    "Prompt"
                }

                ResultArea {}
            }
        }
    }
}
