//! Shared type definitions
//!
//! Data types used by both the Ollama client and the UI.

pub mod model;
