//! promptdeck library
//!
//! Core library for the promptdeck desktop front-end to a local Ollama server.

pub mod app;
pub mod ollama;
pub mod prompt;
pub mod storage;
pub mod types;
pub mod ui;
