//! Backup recognition path.
//!
//! When spectral detection comes up empty for a frame, a text recognizer can
//! fill the gap: it turns audio into partial text and the extractor turns the
//! text delta into vowel labels.

pub mod extractor;

pub use extractor::VowelExtractor;

use crate::error::{Result, VowelscopeError};
use std::sync::Arc;

/// Trait for incremental speech recognition.
///
/// This trait allows swapping implementations (a real engine vs mock).
pub trait Recognizer: Send + Sync {
    /// Feed audio samples and return the current partial text.
    ///
    /// # Arguments
    /// * `audio` - Audio samples as 16-bit PCM at 16kHz mono
    ///
    /// # Returns
    /// The recognizer's running partial transcript, or error
    fn feed(&mut self, audio: &[i16]) -> Result<String>;

    /// Reset the recognizer's internal state for a new utterance.
    fn reset(&mut self);
}

/// Parse partial-result JSON of the form `{"partial": "..."}` or
/// `{"text": "..."}` as emitted by common recognition engines.
pub fn parse_partial_json(raw: &str) -> Result<String> {
    let value: serde_json::Value =
        serde_json::from_str(raw).map_err(|e| VowelscopeError::Recognition {
            message: format!("malformed recognizer output: {e}"),
        })?;
    let text = value
        .get("partial")
        .or_else(|| value.get("text"))
        .and_then(|v| v.as_str())
        .unwrap_or("");
    Ok(text.to_string())
}

/// Implement Recognizer for boxed trait objects so pipelines can hold one.
impl Recognizer for Box<dyn Recognizer> {
    fn feed(&mut self, audio: &[i16]) -> Result<String> {
        (**self).feed(audio)
    }

    fn reset(&mut self) {
        (**self).reset()
    }
}

/// Mock recognizer for testing.
#[derive(Debug, Clone)]
pub struct MockRecognizer {
    responses: Arc<Vec<String>>,
    cursor: usize,
    should_fail: bool,
}

impl MockRecognizer {
    /// Create a mock that returns an empty partial forever.
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Vec::new()),
            cursor: 0,
            should_fail: false,
        }
    }

    /// Configure the mock to return these partials in order, then repeat
    /// the last one.
    pub fn with_partials(mut self, partials: &[&str]) -> Self {
        self.responses = Arc::new(partials.iter().map(|s| s.to_string()).collect());
        self
    }

    /// Configure the mock to fail on feed.
    pub fn with_failure(mut self) -> Self {
        self.should_fail = true;
        self
    }
}

impl Default for MockRecognizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Recognizer for MockRecognizer {
    fn feed(&mut self, _audio: &[i16]) -> Result<String> {
        if self.should_fail {
            return Err(VowelscopeError::Recognition {
                message: "mock recognition failure".to_string(),
            });
        }
        if self.responses.is_empty() {
            return Ok(String::new());
        }
        let index = self.cursor.min(self.responses.len() - 1);
        self.cursor += 1;
        Ok(self.responses[index].clone())
    }

    fn reset(&mut self) {
        self.cursor = 0;
    }
}
