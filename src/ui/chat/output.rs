//! Streaming result area

use crate::app::AppState;
use dioxus::prelude::*;

pub const RESULT_AREA_ID: &str = "result-streaming";

/// Keep the newest streamed text in view.
async fn scroll_to_end() {
    let script = format!(
        "const el = document.getElementById('{RESULT_AREA_ID}'); if (el) {{ el.scrollTop = el.scrollHeight; }} return true;"
    );
    if let Err(e) = document::eval(&script).await {
        tracing::debug!("Failed to scroll result area: {}", e);
    }
}

#[component]
pub fn ResultArea() -> Element {
    let app_state = use_context::<AppState>();
    let text = app_state.output.read().as_str().to_string();

    // Effects run after the render, so the new text is already in the DOM
    use_effect(move || {
        if !app_state.output.read().is_empty() {
            spawn(scroll_to_end());
        }
    });

    rsx! {
        div {
            class: "result",
            span { class: "section-title", "Response" }
            pre {
                id: RESULT_AREA_ID,
                class: "result-text",
                "{text}"
            }
        }
    }
}
