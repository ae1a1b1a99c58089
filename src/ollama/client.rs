//! HTTP client for a local Ollama server

use crate::ollama::error::{check_status, OllamaError};
use crate::ollama::stream::ByteStream;
use crate::ollama::types::{GenerateRequest, TagsResponse};
use crate::ollama::OllamaApi;
use crate::types::model::ModelDescriptor;
use async_trait::async_trait;
use futures::TryStreamExt;

/// Default Ollama endpoint
pub const DEFAULT_HOST: &str = "http://127.0.0.1:11434";

/// Client for the `/api/tags` and `/api/generate` endpoints.
///
/// No timeout is configured: generation can legitimately run for minutes.
#[derive(Debug, Clone)]
pub struct OllamaClient {
    base_url: String,
    http: reqwest::Client,
}

impl OllamaClient {
    /// Build a client for `host`, e.g. `http://127.0.0.1:11434`.
    pub fn new(host: &str) -> Result<Self, OllamaError> {
        let base_url = host.trim().trim_end_matches('/').to_string();
        reqwest::Url::parse(&base_url).map_err(|e| OllamaError::InvalidUrl(format!("{base_url}: {e}")))?;
        Ok(Self {
            base_url,
            http: reqwest::Client::new(),
        })
    }

    pub fn host(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl OllamaApi for OllamaClient {
    async fn list_models(&self) -> Result<Vec<ModelDescriptor>, OllamaError> {
        let url = self.endpoint("/api/tags");
        tracing::debug!("GET {}", url);

        let response = check_status(self.http.get(&url).send().await?).await?;
        let body = response.bytes().await?;
        let tags: TagsResponse = serde_json::from_slice(&body)?;
        Ok(tags.models)
    }

    async fn generate(&self, request: &GenerateRequest) -> Result<ByteStream, OllamaError> {
        let url = self.endpoint("/api/generate");
        tracing::debug!("POST {} (model: {})", url, request.model);

        let response = self.http.post(&url).json(request).send().await?;
        let response = check_status(response).await?;
        Ok(Box::pin(response.bytes_stream().map_err(OllamaError::from)))
    }
}
