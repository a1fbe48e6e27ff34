//! Error types for vowelscope.
//!
//! Classification shortfalls (quiet frame, missing formants, low confidence)
//! are not errors; they are ordinary `None` outcomes. The variants here cover
//! operational failures only.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum VowelscopeError {
    // Configuration errors
    #[error("Configuration file not found at {path}")]
    ConfigFileNotFound { path: String },

    #[error("Invalid configuration value for {key}: {message}")]
    ConfigInvalidValue { key: String, message: String },

    #[error("Configuration error: {0}")]
    Config(#[from] toml::de::Error),

    // Audio capture errors
    #[error("Audio device not found: {device}")]
    AudioDeviceNotFound { device: String },

    #[error("Audio capture failed: {message}")]
    AudioCapture { message: String },

    // WAV input errors
    #[error("Failed to decode WAV input: {message}")]
    WavDecode { message: String },

    // Backup recognizer errors
    #[error("Speech recognition failed: {message}")]
    Recognition { message: String },

    // General I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Generic error for cases not covered above
    #[error("{0}")]
    Other(String),
}

// Type alias for convenience
pub type Result<T> = std::result::Result<T, VowelscopeError>;
