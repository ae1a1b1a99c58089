//! Ollama HTTP API
//!
//! The [`OllamaApi`] trait is the seam between the UI and the network; the
//! real implementation is [`OllamaClient`].

pub mod client;
pub mod error;
pub mod stream;
pub mod types;

pub use client::{OllamaClient, DEFAULT_HOST};
pub use error::OllamaError;
pub use stream::{ByteStream, Utf8StreamDecoder};
pub use types::{GenerateChunk, GenerateRequest};

use crate::types::model::{ModelDescriptor, ModelList};
use async_trait::async_trait;

/// Operations the front-end needs from an inference server
#[async_trait]
pub trait OllamaApi: Send + Sync {
    /// `GET /api/tags`
    async fn list_models(&self) -> Result<Vec<ModelDescriptor>, OllamaError>;

    /// `POST /api/generate`, returning the raw NDJSON body as it arrives
    async fn generate(&self, request: &GenerateRequest) -> Result<ByteStream, OllamaError>;
}

/// Reload the model list from the discovery endpoint.
///
/// On any failure the list is left empty and the error is only logged.
pub async fn refresh_models(api: &dyn OllamaApi, list: &mut ModelList) {
    match api.list_models().await {
        Ok(models) => {
            tracing::info!("Loaded {} models", models.len());
            list.replace(models);
        }
        Err(e) => {
            tracing::error!("Error loading models: {}", e);
            list.replace(Vec::new());
        }
    }
}
