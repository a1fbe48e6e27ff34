use crate::error::{Result, VowelscopeError};

/// Trait for audio frame sources.
///
/// This trait allows swapping implementations (real audio device vs mock).
pub trait AudioSource: Send {
    /// Start producing audio.
    fn start(&mut self) -> Result<()>;

    /// Stop producing audio.
    fn stop(&mut self) -> Result<()>;

    /// Read the next batch of samples.
    ///
    /// # Returns
    /// 16-bit PCM samples at 16kHz mono. An empty vector means no samples
    /// are available right now (live capture) or the source is exhausted
    /// (file playback).
    fn read_samples(&mut self) -> Result<Vec<i16>>;

    /// Whether an empty read means the source is exhausted rather than
    /// momentarily idle.
    fn is_finite(&self) -> bool {
        false
    }
}

/// Mock audio source for testing
#[derive(Debug, Clone)]
pub struct MockAudioSource {
    is_started: bool,
    frames: Vec<Vec<i16>>,
    cursor: usize,
    finite: bool,
    should_fail_start: bool,
    should_fail_read: bool,
    error_message: String,
}

impl MockAudioSource {
    pub fn new() -> Self {
        Self {
            is_started: false,
            frames: Vec::new(),
            cursor: 0,
            finite: false,
            should_fail_start: false,
            should_fail_read: false,
            error_message: "mock audio error".to_string(),
        }
    }

    /// Configure the mock to return these frames in order, then empty reads.
    pub fn with_frames(mut self, frames: Vec<Vec<i16>>) -> Self {
        self.frames = frames;
        self
    }

    /// Configure the mock to report exhaustion after its frames run out
    pub fn with_finite(mut self) -> Self {
        self.finite = true;
        self
    }

    /// Configure the mock to fail on start
    pub fn with_start_failure(mut self) -> Self {
        self.should_fail_start = true;
        self
    }

    /// Configure the mock to fail on read
    pub fn with_read_failure(mut self) -> Self {
        self.should_fail_read = true;
        self
    }

    /// Configure the error message for failures
    pub fn with_error_message(mut self, message: &str) -> Self {
        self.error_message = message.to_string();
        self
    }

    pub fn is_started(&self) -> bool {
        self.is_started
    }
}

impl Default for MockAudioSource {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioSource for MockAudioSource {
    fn start(&mut self) -> Result<()> {
        if self.should_fail_start {
            Err(VowelscopeError::AudioCapture {
                message: self.error_message.clone(),
            })
        } else {
            self.is_started = true;
            Ok(())
        }
    }

    fn stop(&mut self) -> Result<()> {
        self.is_started = false;
        Ok(())
    }

    fn read_samples(&mut self) -> Result<Vec<i16>> {
        if self.should_fail_read {
            return Err(VowelscopeError::AudioCapture {
                message: self.error_message.clone(),
            });
        }
        let frame = self.frames.get(self.cursor).cloned().unwrap_or_default();
        self.cursor += 1;
        Ok(frame)
    }

    fn is_finite(&self) -> bool {
        self.finite
    }
}
