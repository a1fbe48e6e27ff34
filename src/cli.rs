//! Command-line interface for vowelscope
//!
//! Provides argument parsing using clap derive macros.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Real-time vowel recognition from the terminal
#[derive(Parser, Debug)]
#[command(name = "vowelscope", version, about = "Real-time vowel recognition")]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Suppress the live status line
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose output (print every label change)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Audio input device (e.g., hw:0)
    #[arg(long, value_name = "DEVICE")]
    pub device: Option<String>,

    /// Label hold duration (default: 100ms). Examples: 250ms, 1s
    #[arg(long, value_name = "DURATION", value_parser = parse_hold_ms)]
    pub hold: Option<u64>,
}

/// Parse a hold duration string into milliseconds.
///
/// Supports any duration format accepted by `humantime` plus bare numbers,
/// which are taken as milliseconds.
fn parse_hold_ms(s: &str) -> Result<u64, String> {
    let s = s.trim();
    if let Ok(ms) = s.parse::<u64>() {
        return Ok(ms);
    }
    humantime::parse_duration(s)
        .map(|d| d.as_millis() as u64)
        .map_err(|e| e.to_string())
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List available audio input devices
    Devices,

    /// Analyze a WAV file instead of the microphone
    Analyze {
        /// Path to a WAV file (any rate/channels; converted to 16kHz mono)
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}
