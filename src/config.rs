use crate::defaults;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Config {
    pub audio: AudioConfig,
    pub detector: DetectorSettings,
    pub display: DisplaySettings,
}

/// Audio capture configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AudioConfig {
    pub device: Option<String>,
    pub sample_rate: u32,
}

/// Spectral detector tuning
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DetectorSettings {
    /// Minimum frame length in samples before analysis runs.
    pub min_frame_samples: usize,
    /// Windowed-energy silence floor, raw i16 scale.
    pub min_energy: f64,
    /// Relative spectral-peak floor, fraction of the spectrum maximum.
    pub peak_floor: f64,
    /// Relative confidence floor for accepting the winning label.
    pub confidence_floor: f64,
    /// Smoothing history length in frames.
    pub history: usize,
}

/// Display hold configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DisplaySettings {
    /// How long a label stays visible without re-affirmation, milliseconds.
    pub hold_ms: u64,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            device: None,
            sample_rate: defaults::SAMPLE_RATE,
        }
    }
}

impl Default for DetectorSettings {
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

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            hold_ms: defaults::HOLD_MS,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Returns an error if the file contains invalid TOML.
    /// Missing fields will use default values.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load configuration from a file or return defaults if file doesn't exist
    ///
    /// Only returns defaults if the file is missing.
    pub fn load_or_default(path: &Path) -> anyhow::Result<Self> {
        match Self::load(path) {
            Ok(config) => Ok(config),
            Err(e) => {
                if e.downcast_ref::<std::io::Error>()
                    .map(|io_err| io_err.kind() == std::io::ErrorKind::NotFound)
                    .unwrap_or(false)
                {
                    Ok(Self::default())
                } else {
                    Err(e)
                }
            }
        }
    }

    /// Apply environment variable overrides
    ///
    /// Supported environment variables:
    /// - VOWELSCOPE_AUDIO_DEVICE → audio.device
    /// - VOWELSCOPE_HOLD_MS → display.hold_ms
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(device) = std::env::var("VOWELSCOPE_AUDIO_DEVICE")
            && !device.is_empty()
        {
            self.audio.device = Some(device);
        }

        if let Ok(hold) = std::env::var("VOWELSCOPE_HOLD_MS")
            && let Ok(ms) = hold.parse::<u64>()
        {
            self.display.hold_ms = ms;
        }

        self
    }

    /// Get the default configuration file path
    ///
    /// Returns ~/.config/vowelscope/config.toml on Linux
    #[cfg(feature = "cli")]
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .expect("could not determine config directory")
            .join("vowelscope")
            .join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::Mutex;
    use tempfile::NamedTempFile;

    // Mutex to serialize tests that modify environment variables
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    // SAFETY: only used in tests with ENV_LOCK held, so no concurrent
    // access to environment variables.
    fn set_env(key: &str, value: &str) {
        unsafe { std::env::set_var(key, value) }
    }

    fn remove_env(key: &str) {
        unsafe { std::env::remove_var(key) }
    }

    fn clear_env() {
        remove_env("VOWELSCOPE_AUDIO_DEVICE");
        remove_env("VOWELSCOPE_HOLD_MS");
    }

    #[test]
    fn test_default_config_has_correct_values() {
        let config = Config::default();
        assert_eq!(config.audio.device, None);
        assert_eq!(config.audio.sample_rate, 16000);
        assert_eq!(config.detector.min_frame_samples, 2048);
        assert_eq!(config.detector.min_energy, 50_000.0);
        assert_eq!(config.detector.peak_floor, 0.05);
        assert_eq!(config.detector.confidence_floor, 0.02);
        assert_eq!(config.detector.history, 4);
        assert_eq!(config.display.hold_ms, 100);
    }

    #[test]
    fn test_load_from_toml_file() {
        let toml_content = r#"
            [audio]
            device = "hw:0,0"
            sample_rate = 48000

            [detector]
            min_frame_samples = 4096
            min_energy = 75000.0
            peak_floor = 0.1
            history = 8

            [display]
            hold_ms = 250
        "#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = Config::load(temp_file.path()).unwrap();
        assert_eq!(config.audio.device, Some("hw:0,0".to_string()));
        assert_eq!(config.audio.sample_rate, 48000);
        assert_eq!(config.detector.min_frame_samples, 4096);
        assert_eq!(config.detector.min_energy, 75000.0);
        assert_eq!(config.detector.peak_floor, 0.1);
        // Unspecified floor keeps its default
        assert_eq!(config.detector.confidence_floor, 0.02);
        assert_eq!(config.detector.history, 8);
        assert_eq!(config.display.hold_ms, 250);
    }

    #[test]
    fn test_load_partial_config_uses_defaults() {
        let toml_content = r#"
            [display]
            hold_ms = 500
        "#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = Config::load(temp_file.path()).unwrap();
        assert_eq!(config.display.hold_ms, 500);
        assert_eq!(config.audio.sample_rate, 16000);
        assert_eq!(config.detector.history, 4);
    }

    #[test]
    fn test_env_override_device() {
        let _lock = ENV_LOCK.lock().unwrap();
        clear_env();

        set_env("VOWELSCOPE_AUDIO_DEVICE", "pulse");
        let config = Config::default().with_env_overrides();
        assert_eq!(config.audio.device, Some("pulse".to_string()));

        clear_env();
    }

    #[test]
    fn test_env_override_hold_ms() {
        let _lock = ENV_LOCK.lock().unwrap();
        clear_env();

        set_env("VOWELSCOPE_HOLD_MS", "300");
        let config = Config::default().with_env_overrides();
        assert_eq!(config.display.hold_ms, 300);

        clear_env();
    }

    #[test]
    fn test_env_override_rejects_garbage_hold_ms() {
        let _lock = ENV_LOCK.lock().unwrap();
        clear_env();

        set_env("VOWELSCOPE_HOLD_MS", "soon");
        let config = Config::default().with_env_overrides();
        assert_eq!(config.display.hold_ms, 100);

        clear_env();
    }

    #[test]
    fn test_env_override_empty_device_ignored() {
        let _lock = ENV_LOCK.lock().unwrap();
        clear_env();

        set_env("VOWELSCOPE_AUDIO_DEVICE", "");
        let config = Config::default().with_env_overrides();
        assert_eq!(config.audio.device, None);

        clear_env();
    }

    #[test]
    fn test_invalid_toml_returns_error() {
        let invalid_toml = r#"
            [audio
            device = "broken
        "#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(invalid_toml.as_bytes()).unwrap();

        assert!(Config::load(temp_file.path()).is_err());
    }

    #[test]
    fn test_load_or_default_returns_default_for_missing_file() {
        let missing = Path::new("/tmp/nonexistent_vowelscope_config_12345.toml");
        let config = Config::load_or_default(missing).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_or_default_propagates_invalid_toml() {
        let invalid_toml = "[detector\nhistory = ";
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(invalid_toml.as_bytes()).unwrap();

        assert!(Config::load_or_default(temp_file.path()).is_err());
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_default_path_is_xdg_compliant() {
        let path = Config::default_path();
        let path_str = path.to_string_lossy();
        assert!(path_str.contains("vowelscope"));
        assert!(path_str.ends_with("config.toml"));
    }
}
