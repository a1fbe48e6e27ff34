//! vowelscope - real-time vowel recognition from streamed audio
//!
//! Classifies 16kHz mono PCM frames into vowel labels using classical
//! formant analysis, with an optional text-recognizer backup path.

#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
#![warn(clippy::let_underscore_must_use)]

pub mod audio;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod defaults;
pub mod detect;
pub mod display;
pub mod dsp;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod recognize;
pub mod vowel;

#[cfg(feature = "cli")]
pub mod app;

// Core traits (source → detect → display)
pub use audio::source::AudioSource;
pub use display::{Clock, SystemClock};
pub use recognize::Recognizer;

// Pipeline
pub use detect::VowelDetector;
pub use pipeline::{CycleReport, Pipeline};

// Error handling
pub use error::{Result, VowelscopeError};

// Config
pub use config::Config;

pub use vowel::Vowel;
