//! UI components for promptdeck
//!
//! This module contains all user interface components built with Dioxus.

#![allow(non_snake_case)]

pub mod chat;
pub mod components;
pub mod settings;
pub mod sidebar;

use crate::ui::chat::ChatView;
use crate::ui::components::alert_dialog::AlertDialog;
use crate::ui::settings::Settings;
use dioxus::prelude::*;

/// Top-level pages reachable from the header buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Chat,
    Settings,
}

impl Page {
    pub const ALL: [Page; 2] = [Page::Chat, Page::Settings];

    pub fn label(self) -> &'static str {
        match self {
            Page::Chat => "Chat",
            Page::Settings => "Settings",
        }
    }
}

#[component]
pub fn Layout() -> Element {
    let mut active_page = use_signal(|| Page::Chat);

    rsx! {
        div {
            class: "layout",

            header {
                class: "page-bar",
                span { class: "brand", "promptdeck" }
                nav {
                    class: "page-buttons",
                    for page in Page::ALL {
                        PageButton {
                            active: active_page() == page,
                            onclick: move |_| {
                                tracing::debug!("Switching to page {:?}", page);
                                active_page.set(page);
                            },
                            label: page.label(),
                        }
                    }
                }
            }

            // Chat is remounted on every switch, which reloads the model list
            main {
                class: "content",
                match active_page() {
                    Page::Chat => rsx! { ChatView {} },
                    Page::Settings => rsx! { Settings {} },
                }
            }

            AlertDialog {}
        }
    }
}

#[component]
fn PageButton(active: bool, onclick: EventHandler<MouseEvent>, label: &'static str) -> Element {
    let classes = if active { "page-button active" } else { "page-button" };

    rsx! {
        button {
            class: "{classes}",
            onclick: onclick,
            "{label}"
        }
    }
}
