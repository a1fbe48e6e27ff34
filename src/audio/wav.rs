//! WAV file audio source for offline analysis.

use crate::audio::source::AudioSource;
use crate::defaults;
use crate::error::{Result, VowelscopeError};
use std::io::Read;
use std::path::Path;

/// Audio source that replays WAV file data in analysis-sized frames.
///
/// Arbitrary sample rates and channel counts are accepted; content is
/// downmixed to mono and resampled to 16kHz before playback.
pub struct WavAudioSource {
    samples: Vec<i16>,
    position: usize,
    frame_size: usize,
}

impl WavAudioSource {
    /// Create from any reader.
    pub fn from_reader(reader: Box<dyn Read + Send>) -> Result<Self> {
        let mut wav_reader = hound::WavReader::new(reader).map_err(|e| {
            VowelscopeError::WavDecode {
                message: format!("failed to parse WAV data: {e}"),
            }
        })?;

        let spec = wav_reader.spec();
        let raw_samples: Vec<i16> = wav_reader
            .samples::<i16>()
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| VowelscopeError::WavDecode {
                message: format!("failed to read WAV samples: {e}"),
            })?;

        let mono = downmix(&raw_samples, spec.channels);
        let samples = if spec.sample_rate != defaults::SAMPLE_RATE {
            resample(&mono, spec.sample_rate, defaults::SAMPLE_RATE)
        } else {
            mono
        };

        Ok(Self {
            samples,
            position: 0,
            frame_size: defaults::MIN_FRAME_SAMPLES,
        })
    }

    /// Open a WAV file from disk.
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(Box::new(file))
    }

    /// Total number of 16kHz mono samples after conversion.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

impl AudioSource for WavAudioSource {
    fn start(&mut self) -> Result<()> {
        Ok(())
    }

    fn stop(&mut self) -> Result<()> {
        Ok(())
    }

    fn read_samples(&mut self) -> Result<Vec<i16>> {
        if self.position >= self.samples.len() {
            return Ok(Vec::new());
        }
        let end = (self.position + self.frame_size).min(self.samples.len());
        let frame = self.samples[self.position..end].to_vec();
        self.position = end;
        Ok(frame)
    }

    fn is_finite(&self) -> bool {
        true
    }
}

/// Average interleaved channels down to one.
fn downmix(samples: &[i16], channels: u16) -> Vec<i16> {
    if channels <= 1 {
        return samples.to_vec();
    }
    let n = channels as usize;
    samples
        .chunks_exact(n)
        .map(|frame| {
            let sum: i32 = frame.iter().map(|&s| s as i32).sum();
            (sum / n as i32) as i16
        })
        .collect()
}

/// Linear-interpolation resampling.
pub(crate) fn resample(samples: &[i16], from_rate: u32, to_rate: u32) -> Vec<i16> {
    if from_rate == to_rate || samples.is_empty() {
        return samples.to_vec();
    }

    let ratio = from_rate as f64 / to_rate as f64;
    let output_len = (samples.len() as f64 / ratio).ceil() as usize;

    (0..output_len)
        .map(|i| {
            let pos = i as f64 * ratio;
            let idx = pos.floor() as usize;
            let fraction = pos - idx as f64;
            if idx + 1 >= samples.len() {
                samples[samples.len() - 1]
            } else {
                let left = samples[idx] as f64;
                let right = samples[idx + 1] as f64;
                (left + (right - left) * fraction) as i16
            }
        })
        .collect()
}
