//! Byte-level plumbing for the generate stream
//!
//! The HTTP body arrives as arbitrary byte slices. [`Utf8StreamDecoder`] turns
//! them into text without splitting code points, and [`parse_chunk`] reads one
//! decoded slice as a single NDJSON object.

use crate::ollama::error::OllamaError;
use crate::ollama::types::GenerateChunk;
use bytes::Bytes;
use futures::Stream;
use std::pin::Pin;

/// Response body as a pull-based sequence of byte slices
pub type ByteStream = Pin<Box<dyn Stream<Item = Result<Bytes, OllamaError>> + Send>>;

/// Incremental UTF-8 decoder.
///
/// A multi-byte sequence cut at a slice boundary is held back and completed by
/// the next call. Invalid sequences decode to U+FFFD.
#[derive(Debug, Default)]
pub struct Utf8StreamDecoder {
    pending: Vec<u8>,
}

impl Utf8StreamDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode the next slice, carrying any incomplete trailing sequence forward.
    pub fn decode(&mut self, bytes: &[u8]) -> String {
        let mut input = std::mem::take(&mut self.pending);
        input.extend_from_slice(bytes);

        let mut out = String::with_capacity(input.len());
        let mut rest: &[u8] = &input;
        loop {
            match std::str::from_utf8(rest) {
                Ok(text) => {
                    out.push_str(text);
                    break;
                }
                Err(e) => {
                    let (valid, tail) = rest.split_at(e.valid_up_to());
                    out.push_str(&String::from_utf8_lossy(valid));
                    match e.error_len() {
                        Some(len) => {
                            out.push(char::REPLACEMENT_CHARACTER);
                            rest = &tail[len..];
                        }
                        None => {
                            self.pending = tail.to_vec();
                            break;
                        }
                    }
                }
            }
        }
        out
    }

    /// Bytes of an unfinished sequence waiting for the next slice
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }
}

/// Parse one decoded slice as a complete generate chunk.
///
/// No reassembly happens here: a slice holding half an object, or two
/// objects, is an error and the caller drops it.
pub fn parse_chunk(text: &str) -> Result<GenerateChunk, serde_json::Error> {
    serde_json::from_str(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_passthrough() {
        let mut decoder = Utf8StreamDecoder::new();
        assert_eq!(decoder.decode(b"hello"), "hello");
        assert_eq!(decoder.pending_len(), 0);
    }

    #[test]
    fn test_split_codepoint_is_carried() {
        let bytes = "héllo 🦀".as_bytes();
        // Split inside the two-byte 'é' and inside the four-byte crab
        let e_start = 1;
        let crab_start = bytes.len() - 4;

        let mut decoder = Utf8StreamDecoder::new();
        let mut text = String::new();
        text.push_str(&decoder.decode(&bytes[..e_start + 1]));
        assert_eq!(decoder.pending_len(), 1);
        text.push_str(&decoder.decode(&bytes[e_start + 1..crab_start + 2]));
        assert_eq!(decoder.pending_len(), 2);
        text.push_str(&decoder.decode(&bytes[crab_start + 2..]));
        assert_eq!(decoder.pending_len(), 0);
        assert_eq!(text, "héllo 🦀");
    }

    #[test]
    fn test_every_split_point() {
        let source = "Ça va? 日本語 ok 🦀🦀";
        let bytes = source.as_bytes();
        for cut in 0..=bytes.len() {
            let mut decoder = Utf8StreamDecoder::new();
            let mut text = decoder.decode(&bytes[..cut]);
            text.push_str(&decoder.decode(&bytes[cut..]));
            assert_eq!(text, source, "split at byte {cut}");
        }
    }

    #[test]
    fn test_byte_at_a_time() {
        let source = "naïve → 😀";
        let mut decoder = Utf8StreamDecoder::new();
        let text: String = source
            .as_bytes()
            .iter()
            .map(|b| decoder.decode(std::slice::from_ref(b)))
            .collect();
        assert_eq!(text, source);
    }

    #[test]
    fn test_invalid_bytes_become_replacement() {
        let mut decoder = Utf8StreamDecoder::new();
        assert_eq!(decoder.decode(b"a\xFFb"), "a\u{FFFD}b");
        assert_eq!(decoder.pending_len(), 0);
    }

    #[test]
    fn test_parse_chunk_accepts_trailing_newline() {
        let chunk = parse_chunk("{\"response\":\"Hi\",\"done\":false}\n").unwrap();
        assert_eq!(chunk.response, "Hi");
        assert!(!chunk.done);
    }

    #[test]
    fn test_parse_chunk_rejects_fragments() {
        assert!(parse_chunk("{\"response\":\"Hi\",\"do").is_err());
        assert!(parse_chunk("").is_err());
        // Two objects in one slice are not split apart
        assert!(parse_chunk("{\"response\":\"a\",\"done\":false}\n{\"response\":\"b\",\"done\":false}\n").is_err());
    }
}
