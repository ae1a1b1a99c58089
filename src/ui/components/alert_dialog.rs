//! Blocking alert dialog
//!
//! Shows the message in `AppState::alert` over the whole window until dismissed.

use crate::app::AppState;
use dioxus::prelude::*;

#[component]
pub fn AlertDialog() -> Element {
    let mut app_state = use_context::<AppState>();
    let message = app_state.alert.read().clone();

    let Some(message) = message else {
        return rsx! {};
    };

    rsx! {
        // Backdrop swallows clicks so the page underneath is blocked
        div {
            class: "dialog-backdrop",

            div {
                class: "dialog",
                role: "alertdialog",

                div {
                    class: "dialog-header",
                    div {
                        class: "dialog-icon",
                        svg {
                            view_box: "0 0 24 24",
                            fill: "none",
                            stroke: "currentColor",
                            stroke_width: "2",
                            stroke_linecap: "round",
                            stroke_linejoin: "round",
                            path { d: "M10.29 3.86L1.82 18a2 2 0 0 0 1.71 3h16.94a2 2 0 0 0 1.71-3L13.71 3.86a2 2 0 0 0-3.42 0z" }
                            line { x1: "12", y1: "9", x2: "12", y2: "13" }
                            line { x1: "12", y1: "17", x2: "12.01", y2: "17" }
                        }
                    }
                    p { class: "dialog-message", "{message}" }
                }

                div {
                    class: "dialog-footer",
                    button {
                        class: "btn-primary",
                        autofocus: true,
                        onclick: move |_| app_state.alert.set(None),
                        "OK"
                    }
                }
            }
        }
    }
}
