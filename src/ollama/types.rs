//! Ollama wire types
//!
//! Only the fields this app reads are modeled; serde ignores the rest
//! (`modified_at`, `digest`, `eval_count`, timings, ...).

use crate::types::model::ModelDescriptor;
use serde::{Deserialize, Serialize};

/// `GET /api/tags` response body
#[derive(Debug, Clone, Deserialize)]
pub struct TagsResponse {
    pub models: Vec<ModelDescriptor>,
}

/// `POST /api/generate` request body
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerateRequest {
    pub model: String,
    pub prompt: String,
}

/// One NDJSON object from the generate stream.
///
/// The terminal object usually carries no `response`, so both fields default.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GenerateChunk {
    #[serde(default)]
    pub response: String,
    #[serde(default)]
    pub done: bool,
}
