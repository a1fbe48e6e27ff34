use anyhow::Result;
use clap::Parser;
use owo_colors::OwoColorize;
use vowelscope::app::{self, RenderOptions};
use vowelscope::cli::{Cli, Commands};
use vowelscope::config::Config;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let options = RenderOptions {
        quiet: cli.quiet,
        verbose: cli.verbose,
    };

    match cli.command {
        None => {
            let config = load_config(cli.config.as_deref())?;
            run_live_mode(config, cli.device, cli.hold, options)?;
        }
        Some(Commands::Devices) => {
            list_audio_devices()?;
        }
        Some(Commands::Analyze { file }) => {
            let config = load_config(cli.config.as_deref())?;
            app::run_analyze(config, &file, cli.hold, options)?;
        }
    }

    Ok(())
}

#[cfg(feature = "cpal-audio")]
fn run_live_mode(
    config: Config,
    device: Option<String>,
    hold: Option<u64>,
    options: RenderOptions,
) -> Result<()> {
    app::run_live(config, device, hold, options)
}

#[cfg(not(feature = "cpal-audio"))]
fn run_live_mode(
    _config: Config,
    _device: Option<String>,
    _hold: Option<u64>,
    _options: RenderOptions,
) -> Result<()> {
    eprintln!(
        "{}",
        "live capture is not available in this build; use `vowelscope analyze <file.wav>`".red()
    );
    std::process::exit(1);
}

/// Load configuration from file or use defaults.
///
/// Priority order:
/// 1. Custom config path from CLI (--config)
/// 2. Default config path (~/.config/vowelscope/config.toml)
/// 3. Built-in defaults with environment variable overrides
fn load_config(custom_path: Option<&std::path::Path>) -> Result<Config> {
    let config = if let Some(path) = custom_path {
        Config::load(path)?
    } else {
        Config::load_or_default(&Config::default_path())?
    };
    Ok(config.with_env_overrides())
}

/// List available audio input devices.
#[cfg(feature = "cpal-audio")]
fn list_audio_devices() -> Result<()> {
    let devices = vowelscope::audio::capture::list_devices()?;

    if devices.is_empty() {
        eprintln!("{}", "no audio input devices found".red());
        std::process::exit(1);
    }

    println!("Available audio input devices:");
    for (idx, device) in devices.iter().enumerate() {
        if device.ends_with("[recommended]") {
            println!("  [{}] {}", idx, device.green());
        } else {
            println!("  [{idx}] {device}");
        }
    }
    Ok(())
}

#[cfg(not(feature = "cpal-audio"))]
fn list_audio_devices() -> Result<()> {
    eprintln!("{}", "device listing requires the cpal-audio feature".red());
    std::process::exit(1);
}
