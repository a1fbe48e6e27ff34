//! Audio input: the source abstraction, live capture and WAV files.

pub mod source;
pub mod wav;

#[cfg(feature = "cpal-audio")]
pub mod capture;

pub use source::{AudioSource, MockAudioSource};
pub use wav::WavAudioSource;

#[cfg(feature = "cpal-audio")]
pub use capture::CpalAudioSource;
