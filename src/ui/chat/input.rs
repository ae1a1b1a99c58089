//! Labeled prompt section inputs

use dioxus::prelude::*;

/// Rows for a section textarea: grows with content, capped at 8
pub fn compute_rows(text: &str) -> usize {
    let newlines = text.chars().filter(|&c| c == '\n').count();
    // Each visual line ~ 70 chars for our input width
    let wrap_lines: usize = text
        .lines()
        .map(|line| line.chars().count().saturating_sub(1) / 70)
        .sum();
    (newlines + wrap_lines + 1).clamp(2, 8)
}

#[component]
pub fn PromptField(
    id: &'static str,
    label: &'static str,
    placeholder: &'static str,
    value: Signal<String>,
) -> Element {
    let mut value = value;
    let rows = compute_rows(&value.read());

    rsx! {
        div {
            class: "prompt-field",
            label { class: "field-label", r#for: "{id}", "{label}" }
            textarea {
                id: "{id}",
                class: "text-input",
                placeholder: "{placeholder}",
                rows: "{rows}",
                value: "{value}",
                oninput: move |evt| value.set(evt.value()),
            }
        }
    }
}
