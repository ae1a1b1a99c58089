//! Prompt submission
//!
//! Builds the prompt from its labeled sections, validates a submission and
//! streams the generated text into a [`ResponseBuffer`].

pub mod buffer;
pub mod runner;
pub mod sections;

pub use buffer::ResponseBuffer;
pub use runner::{prepare, PromptRunner, StreamSummary, SubmitError};
pub use sections::PromptSections;
