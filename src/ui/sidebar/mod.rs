//! Sidebar of the chat page

pub mod model_picker;
