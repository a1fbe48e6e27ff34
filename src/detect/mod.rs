//! Per-frame vowel detection: gate → transform → formants → score → smooth.

pub mod scorer;
pub mod smoother;

use crate::defaults;
use crate::dsp::{FormantEstimator, FrameGate, magnitude_spectrum};
use crate::vowel::Vowel;

pub use scorer::{VOWEL_TABLE, VowelRegion, best_vowel};
pub use smoother::TemporalSmoother;

/// Tuning knobs for the detection pipeline.
#[derive(Debug, Clone, Copy)]
pub struct DetectorConfig {
    /// Frames shorter than this are skipped entirely.
    pub min_frame_samples: usize,
    /// Windowed-energy silence floor.
    pub min_energy: f64,
    /// Relative peak-detection floor (fraction of spectrum maximum).
    pub peak_floor: f64,
    /// Relative confidence floor (fraction of spectrum maximum).
    pub confidence_floor: f64,
    /// Smoothing history capacity.
    pub history: usize,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            min_frame_samples: defaults::MIN_FRAME_SAMPLES,
            min_energy: defaults::MIN_ENERGY,
            peak_floor: defaults::PEAK_FLOOR,
            confidence_floor: defaults::CONFIDENCE_FLOOR,
            history: defaults::HISTORY_CAPACITY,
        }
    }
}

/// Stateful vowel detector for a stream of audio frames.
///
/// Owns the smoothing history; everything upstream of it is recomputed per
/// frame. One instance per audio stream, driven from a single thread.
#[derive(Debug)]
pub struct VowelDetector {
    config: DetectorConfig,
    gate: FrameGate,
    estimator: FormantEstimator,
    smoother: TemporalSmoother,
}

impl Default for VowelDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl VowelDetector {
    pub fn new() -> Self {
        Self::with_config(DetectorConfig::default())
    }

    pub fn with_config(config: DetectorConfig) -> Self {
        Self {
            config,
            gate: FrameGate::new(config.min_frame_samples, config.min_energy),
            estimator: FormantEstimator::new(config.peak_floor),
            smoother: TemporalSmoother::new(config.history),
        }
    }

    /// Process one frame and return the consolidated label.
    ///
    /// Frames below the minimum length return `None` without touching the
    /// history. Quiet frames record a `None` outcome and still consolidate,
    /// so an isolated silent frame does not erase a recent label; it only
    /// ages the window by one entry.
    pub fn detect(&mut self, frame: &[i16], sample_rate: u32) -> Option<Vowel> {
        if frame.len() < self.config.min_frame_samples {
            return None;
        }

        let outcome = match self.gate.window(frame) {
            Some(windowed) => {
                let spectrum = magnitude_spectrum(&windowed.samples);
                self.classify(&spectrum, sample_rate)
            }
            None => None,
        };

        self.smoother.push(outcome);
        self.smoother.consolidated()
    }

    /// Classify a magnitude spectrum without touching detection history.
    fn classify(&self, spectrum: &[f64], sample_rate: u32) -> Option<Vowel> {
        let pair = self.estimator.estimate(spectrum, sample_rate)?;
        let peak = spectrum.iter().cloned().fold(0.0_f64, f64::max);
        best_vowel(&pair, peak * self.config.confidence_floor)
    }

    /// Drop accumulated smoothing history.
    pub fn reset(&mut self) {
        self.smoother.clear();
    }

    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }
}
