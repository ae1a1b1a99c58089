//! Shared UI components

pub mod alert_dialog;
