//! Signal-processing stages of the detection pipeline.
//!
//! Windowing/energy gating, the spectral transform, and formant estimation.
//! Everything here is stateless per frame; stateful smoothing lives in
//! [`crate::detect`].

pub mod formant;
pub mod spectrum;
pub mod window;

pub use formant::{Formant, FormantEstimator, FormantPair, SpectralPeak};
pub use spectrum::{bin_hz, magnitude_spectrum};
pub use window::{FrameGate, WindowedSignal};
