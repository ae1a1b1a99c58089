//! Streaming prompt runner
//!
//! [`prepare`] validates a submission synchronously so the UI can reject it
//! before anything touches the network. [`PromptRunner::run`] then sends the
//! request and pulls the NDJSON body slice by slice into its buffer.

use crate::ollama::stream::{parse_chunk, Utf8StreamDecoder};
use crate::ollama::{GenerateRequest, OllamaApi, OllamaError};
use crate::prompt::buffer::ResponseBuffer;
use crate::prompt::sections::PromptSections;
use bytes::Bytes;
use futures::{Stream, StreamExt};
use std::sync::Arc;
use thiserror::Error;

/// A submission rejected before any request is sent.
///
/// The messages are shown to the user as-is.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("Please select a model first.")]
    NoModelSelected,
    #[error("Please enter a question or statement.")]
    EmptyPrompt,
}

/// Check the selection and prompt, and build the generate request.
pub fn prepare(
    selected_model: Option<&str>,
    sections: &PromptSections,
) -> Result<GenerateRequest, SubmitError> {
    let model = selected_model.ok_or(SubmitError::NoModelSelected)?;
    if sections.is_empty() {
        return Err(SubmitError::EmptyPrompt);
    }
    Ok(GenerateRequest {
        model: model.to_string(),
        prompt: sections.assemble(),
    })
}

/// What happened during one streamed generation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreamSummary {
    /// Byte slices pulled from the body
    pub chunks: usize,
    /// Slices that did not parse as a single JSON object
    pub dropped: usize,
    /// Whether a chunk with `done: true` arrived
    pub done: bool,
}

/// Pull `stream` to completion, appending generated text to `buffer`.
///
/// Each slice is decoded with one long-lived UTF-8 decoder and parsed as a
/// whole JSON object. Slices that fail to parse are logged and skipped; they
/// are not stitched back together. After a `done` chunk nothing more is
/// appended, but the body is still read until it ends.
///
/// `on_update` receives each appended piece of text, never the whole buffer,
/// so a display shared between overlapping runs only ever grows.
pub async fn consume_stream<S, F>(
    mut stream: S,
    buffer: &mut ResponseBuffer,
    mut on_update: F,
) -> Result<StreamSummary, OllamaError>
where
    S: Stream<Item = Result<Bytes, OllamaError>> + Unpin,
    F: FnMut(&str),
{
    let mut decoder = Utf8StreamDecoder::new();
    let mut summary = StreamSummary::default();

    while let Some(slice) = stream.next().await {
        let slice = slice?;
        summary.chunks += 1;

        let text = decoder.decode(&slice);
        let chunk = match parse_chunk(&text) {
            Ok(chunk) => chunk,
            Err(e) => {
                tracing::warn!("Error parsing response: {} ({} bytes dropped)", e, slice.len());
                summary.dropped += 1;
                continue;
            }
        };

        if chunk.done {
            summary.done = true;
        } else if !summary.done {
            buffer.append(&chunk.response);
            on_update(&chunk.response);
        }
    }

    if decoder.pending_len() > 0 {
        tracing::debug!(
            "Stream ended inside a UTF-8 sequence, {} bytes discarded",
            decoder.pending_len()
        );
    }

    Ok(summary)
}

/// Runs one generation and owns the text it produces
pub struct PromptRunner {
    api: Arc<dyn OllamaApi>,
    buffer: ResponseBuffer,
}

impl PromptRunner {
    pub fn new(api: Arc<dyn OllamaApi>) -> Self {
        Self {
            api,
            buffer: ResponseBuffer::new(),
        }
    }

    pub fn buffer(&self) -> &ResponseBuffer {
        &self.buffer
    }

    pub fn into_buffer(self) -> ResponseBuffer {
        self.buffer
    }

    /// Clear the buffer, send `request` and stream the answer into the buffer.
    ///
    /// `on_update` gets each appended piece as in [`consume_stream`]. Text
    /// appended before a transport error stays in the buffer.
    pub async fn run<F>(
        &mut self,
        request: &GenerateRequest,
        on_update: F,
    ) -> Result<StreamSummary, OllamaError>
    where
        F: FnMut(&str),
    {
        self.buffer.clear();

        let stream = self.api.generate(request).await?;
        let summary = consume_stream(stream, &mut self.buffer, on_update).await?;
        tracing::debug!(
            "Generation finished: {} chunks, {} dropped, done={}",
            summary.chunks,
            summary.dropped,
            summary.done
        );
        Ok(summary)
    }
}
