//! Default tuning constants for vowelscope.
//!
//! This module provides shared constants used across configuration types
//! to ensure consistency and eliminate duplication. The detection thresholds
//! are fixed heuristics tuned for a single speaker/microphone setup; they are
//! deliberately not learned from data.

/// Default audio sample rate in Hz.
///
/// 16kHz is the standard for speech processing and provides enough bandwidth
/// to resolve the first two vowel formants (F2 tops out around 3.5kHz).
pub const SAMPLE_RATE: u32 = 16000;

/// Minimum number of samples a frame must carry to be classified.
///
/// Shorter frames lack the frequency resolution to separate F1 from F2
/// and are skipped without touching detection state.
pub const MIN_FRAME_SAMPLES: usize = 2048;

/// Minimum total windowed energy for a frame to be analyzed.
///
/// Energy is the sum of squared windowed samples on the raw i16 amplitude
/// scale. Frames below this floor are near-silence; analyzing them would only
/// produce spurious peaks.
pub const MIN_ENERGY: f64 = 50_000.0;

/// Relative amplitude floor for spectral peak detection.
///
/// A local maximum counts as a peak only if it exceeds this fraction of the
/// spectrum's largest magnitude.
pub const PEAK_FLOOR: f64 = 0.05;

/// Relative confidence floor for accepting the best-scoring vowel.
///
/// The winning score must reach this fraction of the frame's peak spectral
/// magnitude, otherwise the frame classifies as none.
pub const CONFIDENCE_FLOOR: f64 = 0.02;

/// Admissible band for any spectral peak, in Hz.
///
/// Peaks outside this range cannot be voice formants at speech sample rates.
pub const VOICE_BAND_HZ: (f64, f64) = (150.0, 4000.0);

/// Search band for the first formant (F1), in Hz.
pub const F1_BAND_HZ: (f64, f64) = (200.0, 1000.0);

/// Search band for the second formant (F2), in Hz.
///
/// Overlaps the F1 band on purpose: a single strong peak between 800 and
/// 1000 Hz may be selected as both F1 and F2.
pub const F2_BAND_HZ: (f64, f64) = (800.0, 3500.0);

/// Number of strongest spectral peaks considered for formant selection.
pub const MAX_PEAKS: usize = 4;

/// Capacity of the recent-detection history used for temporal smoothing.
pub const HISTORY_CAPACITY: usize = 4;

/// How long a displayed label is held without re-affirmation, in milliseconds.
///
/// Short enough that the display returns to silence promptly, long enough to
/// bridge the gap between consecutive analysis frames.
pub const HOLD_MS: u64 = 100;

/// Idle sleep between capture-loop cycles, in milliseconds.
pub const POLL_INTERVAL_MS: u64 = 5;
