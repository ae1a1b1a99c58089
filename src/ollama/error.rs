//! Ollama client errors

use thiserror::Error;

/// Errors raised while talking to the Ollama HTTP API
#[derive(Debug, Error)]
pub enum OllamaError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Ollama returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("Invalid Ollama host: {0}")]
    InvalidUrl(String),
}

/// Turn a non-2xx response into [`OllamaError::Status`], keeping the body for the log.
pub(crate) async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, OllamaError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(OllamaError::Status { status, body })
}
