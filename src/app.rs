//! Application entry points: live microphone mode and WAV analysis mode.

use crate::audio::AudioSource;
use crate::config::Config;
use crate::defaults;
use crate::detect::{DetectorConfig, VowelDetector};
use crate::display::DisplaySlot;
use crate::output;
use crate::pipeline::Pipeline;
use crate::vowel::Vowel;
use anyhow::Result;
use crossbeam_channel::{Receiver, RecvTimeoutError, bounded};
use std::time::Duration;

/// Rendering options shared by both modes.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    /// Suppress the live status line.
    pub quiet: bool,
    /// Print a line on every label change.
    pub verbose: bool,
}

fn build_pipeline(config: &Config, hold_override: Option<u64>) -> Pipeline {
    let hold_ms = hold_override.unwrap_or(config.display.hold_ms);
    let display = DisplaySlot::with_hold(Duration::from_millis(hold_ms));
    let detector = VowelDetector::with_config(DetectorConfig {
        min_frame_samples: config.detector.min_frame_samples,
        min_energy: config.detector.min_energy,
        peak_floor: config.detector.peak_floor,
        confidence_floor: config.detector.confidence_floor,
        history: config.detector.history,
    });
    Pipeline::with_display(display).with_detector(detector)
}

/// Pump frames out of an audio source on a dedicated thread.
///
/// The source delivers samples in bursts of arbitrary size; the pump
/// re-chunks them into fixed analysis frames. The channel is bounded so a
/// stalled consumer drops audio instead of growing without limit.
fn spawn_frame_pump(
    mut source: Box<dyn AudioSource>,
    frame_size: usize,
) -> Receiver<Vec<i16>> {
    let (tx, rx) = bounded::<Vec<i16>>(8);
    std::thread::spawn(move || {
        let mut pending: Vec<i16> = Vec::with_capacity(frame_size * 2);
        loop {
            let samples = match source.read_samples() {
                Ok(samples) => samples,
                Err(e) => {
                    eprintln!("audio read failed: {e}");
                    break;
                }
            };
            if samples.is_empty() {
                if source.is_finite() {
                    break;
                }
                std::thread::sleep(Duration::from_millis(defaults::POLL_INTERVAL_MS));
                continue;
            }
            pending.extend_from_slice(&samples);

            while pending.len() >= frame_size {
                let frame: Vec<i16> = pending.drain(..frame_size).collect();
                if tx.send(frame).is_err() {
                    return;
                }
            }
        }
        // Flush the tail so short recordings still classify
        if !pending.is_empty() {
            let _ = tx.send(pending);
        }
    });
    rx
}

/// Drive the pipeline from a frame channel until it closes.
fn run_loop(
    mut pipeline: Pipeline,
    frames: Receiver<Vec<i16>>,
    options: RenderOptions,
) -> Result<()> {
    let mut previous: Option<Vowel> = None;
    loop {
        let report = match frames.recv_timeout(Duration::from_millis(defaults::POLL_INTERVAL_MS)) {
            Ok(frame) => pipeline.run_cycle(&frame)?,
            Err(RecvTimeoutError::Timeout) => pipeline.run_cycle(&[])?,
            Err(RecvTimeoutError::Disconnected) => break,
        };

        if options.verbose
            && report.displayed != previous
            && let Some(vowel) = report.displayed
        {
            output::render_label_line(vowel);
        }
        previous = report.displayed;

        if !options.quiet {
            output::render_status(&report);
        }
    }

    if !options.quiet {
        output::clear_line();
    }
    Ok(())
}

/// Live microphone mode: capture, classify and render until interrupted.
#[cfg(feature = "cpal-audio")]
pub fn run_live(
    config: Config,
    device: Option<String>,
    hold_override: Option<u64>,
    options: RenderOptions,
) -> Result<()> {
    use crate::audio::CpalAudioSource;

    let device_name = device.or_else(|| config.audio.device.clone());
    let mut source = CpalAudioSource::new(device_name.as_deref())?;
    source.start()?;

    let pipeline = build_pipeline(&config, hold_override);
    let frames = spawn_frame_pump(Box::new(source), config.detector.min_frame_samples);

    if !options.quiet {
        eprintln!("listening... (Ctrl+C to stop)");
    }
    run_loop(pipeline, frames, options)
}

/// Offline mode: classify a WAV file front to back and print a summary.
pub fn run_analyze(
    config: Config,
    path: &std::path::Path,
    hold_override: Option<u64>,
    options: RenderOptions,
) -> Result<()> {
    use crate::audio::WavAudioSource;

    let source = WavAudioSource::from_path(path)?;
    let total_samples = source.len();

    let mut pipeline = build_pipeline(&config, hold_override);
    let frames = spawn_frame_pump(Box::new(source), config.detector.min_frame_samples);

    let mut counts = [0usize; Vowel::ALL.len()];
    let mut classified_frames = 0usize;
    let mut total_frames = 0usize;

    while let Ok(frame) = frames.recv() {
        let report = pipeline.run_cycle(&frame)?;
        total_frames += 1;
        if let Some(vowel) = report.direct {
            counts[vowel as usize] += 1;
            classified_frames += 1;
            if options.verbose {
                output::render_label_line(vowel);
            }
        }
    }

    if !options.quiet {
        output::clear_line();
    }
    println!(
        "{}: {:.1}s, {} frames, {} classified",
        path.display(),
        total_samples as f64 / config.audio.sample_rate as f64,
        total_frames,
        classified_frames,
    );
    for vowel in Vowel::ALL {
        let count = counts[vowel as usize];
        if count > 0 {
            println!("  {} {:3} frame(s)", vowel.glyph(), count);
        }
    }
    Ok(())
}
