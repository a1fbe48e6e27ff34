//! Frame gating: windowing and the silence energy floor.
//!
//! The gate is not a classifier. It only prevents wasted spectral work and
//! spurious peak picking on near-silent frames.

use crate::defaults;
use std::f64::consts::PI;

/// A windowed analysis frame with its total energy.
#[derive(Debug, Clone)]
pub struct WindowedSignal {
    /// Hamming-windowed samples of the central sub-frame.
    pub samples: Vec<f64>,
    /// Sum of squared windowed samples, raw i16 amplitude scale.
    pub energy: f64,
}

/// Windows incoming frames and rejects those too quiet to analyze.
#[derive(Debug, Clone, Copy)]
pub struct FrameGate {
    /// Frames shorter than this are not classified at all.
    pub min_samples: usize,
    /// Total windowed energy below this counts as silence.
    pub min_energy: f64,
}

impl Default for FrameGate {
    fn default() -> Self {
        Self {
            min_samples: defaults::MIN_FRAME_SAMPLES,
            min_energy: defaults::MIN_ENERGY,
        }
    }
}

impl FrameGate {
    pub fn new(min_samples: usize, min_energy: f64) -> Self {
        Self {
            min_samples,
            min_energy,
        }
    }

    /// Window the central half of `frame` and compute its energy.
    ///
    /// Takes samples from 25% to 75% of the frame to avoid edge transients
    /// introduced by consecutive buffer reads, then applies a Hamming window.
    /// Returns `None` when the frame is too short or too quiet; `None` here
    /// is a normal outcome, not an error.
    pub fn window(&self, frame: &[i16]) -> Option<WindowedSignal> {
        if frame.len() < self.min_samples {
            return None;
        }

        let start = frame.len() / 4;
        let end = frame.len() * 3 / 4;
        let sub = &frame[start..end];
        if sub.len() < 2 {
            return None;
        }

        let len = sub.len();
        let mut samples = Vec::with_capacity(len);
        let mut energy = 0.0;
        for (i, &s) in sub.iter().enumerate() {
            let w = 0.54 - 0.46 * (2.0 * PI * i as f64 / (len as f64 - 1.0)).cos();
            let v = s as f64 * w;
            energy += v * v;
            samples.push(v);
        }

        if energy < self.min_energy {
            return None;
        }

        Some(WindowedSignal { samples, energy })
    }
}
