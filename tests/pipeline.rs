//! End-to-end pipeline tests over synthesized audio.

use std::f64::consts::PI;
use std::io::Cursor;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};
use vowelscope::audio::{AudioSource, WavAudioSource};
use vowelscope::display::{Clock, DisplaySlot};
use vowelscope::pipeline::Pipeline;
use vowelscope::recognize::MockRecognizer;
use vowelscope::vowel::Vowel;

const SAMPLE_RATE: u32 = 16000;

/// Manually advanced clock for deterministic hold-timer tests.
#[derive(Debug, Clone)]
struct MockClock {
    current: Arc<Mutex<Instant>>,
}

impl MockClock {
    fn new() -> Self {
        Self {
            current: Arc::new(Mutex::new(Instant::now())),
        }
    }

    fn advance(&self, duration: Duration) {
        let mut current = self.current.lock().unwrap();
        *current += duration;
    }
}

impl Clock for MockClock {
    fn now(&self) -> Instant {
        *self.current.lock().unwrap()
    }
}

fn vowel_frame(f1: f64, f2: f64) -> Vec<i16> {
    (0..2048)
        .map(|i| {
            let t = i as f64 / SAMPLE_RATE as f64;
            let v = 8000.0 * ((2.0 * PI * f1 * t).sin() + (2.0 * PI * f2 * t).sin());
            v as i16
        })
        .collect()
}

#[test]
fn two_tone_frame_classifies_end_to_end() {
    let mut pipeline = Pipeline::new();
    let report = pipeline.run_cycle(&vowel_frame(780.0, 1200.0)).unwrap();
    assert_eq!(report.direct, Some(Vowel::A));
    assert_eq!(report.displayed, Some(Vowel::A));
}

#[test]
fn backup_path_extracts_only_new_text() {
    let clock = MockClock::new();
    let display = DisplaySlot::with_clock(Duration::from_millis(100), clock.clone());
    let mut pipeline = Pipeline::with_display(display).with_recognizer(Box::new(
        MockRecognizer::new().with_partials(&["прив", "привет"]),
    ));

    let silent = vec![0i16; 2048];

    // First partial "прив": only "и" is a vowel
    let report = pipeline.run_cycle(&silent).unwrap();
    assert_eq!(report.extracted, vec![Vowel::I]);
    assert_eq!(report.displayed, Some(Vowel::I));

    // Growth to "привет": only the new "ет" is extracted
    let report = pipeline.run_cycle(&silent).unwrap();
    assert_eq!(report.extracted, vec![Vowel::Ye]);
    assert_eq!(report.displayed, Some(Vowel::Ye));

    // Unchanged partial extracts nothing; the held label persists
    let report = pipeline.run_cycle(&silent).unwrap();
    assert!(report.extracted.is_empty());
    assert_eq!(report.displayed, Some(Vowel::Ye));
}

#[test]
fn held_label_expires_on_schedule() {
    let clock = MockClock::new();
    let display = DisplaySlot::with_clock(Duration::from_millis(100), clock.clone());
    let mut pipeline = Pipeline::with_display(display);

    pipeline.run_cycle(&vowel_frame(780.0, 1200.0)).unwrap();
    assert_eq!(pipeline.displayed(), Some(Vowel::A));

    // Still visible at the boundary
    clock.advance(Duration::from_millis(100));
    assert_eq!(pipeline.displayed(), Some(Vowel::A));

    // Expired just past it
    clock.advance(Duration::from_millis(1));
    assert_eq!(pipeline.displayed(), None);
}

#[test]
fn reaffirmation_restarts_the_hold() {
    let clock = MockClock::new();
    let display = DisplaySlot::with_clock(Duration::from_millis(100), clock.clone());
    let mut pipeline = Pipeline::with_display(display);
    let frame = vowel_frame(780.0, 1200.0);

    pipeline.run_cycle(&frame).unwrap();
    clock.advance(Duration::from_millis(80));
    pipeline.run_cycle(&frame).unwrap();

    // 80ms after the second submission the original timer would have fired
    clock.advance(Duration::from_millis(80));
    assert_eq!(pipeline.displayed(), Some(Vowel::A));
}

#[test]
fn wav_file_drives_the_pipeline() {
    // Synthesize one second of an "a"-like two-formant tone as WAV data
    let samples: Vec<i16> = (0..SAMPLE_RATE as usize)
        .map(|i| {
            let t = i as f64 / SAMPLE_RATE as f64;
            let v = 8000.0 * ((2.0 * PI * 780.0 * t).sin() + (2.0 * PI * 1200.0 * t).sin());
            v as i16
        })
        .collect();

    let mut cursor = Cursor::new(Vec::new());
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: SAMPLE_RATE,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::new(&mut cursor, spec).unwrap();
    for &s in &samples {
        writer.write_sample(s).unwrap();
    }
    writer.finalize().unwrap();

    let mut source =
        WavAudioSource::from_reader(Box::new(Cursor::new(cursor.into_inner()))).unwrap();
    let mut pipeline = Pipeline::new();

    let mut saw_a = false;
    loop {
        let frame = source.read_samples().unwrap();
        if frame.is_empty() {
            break;
        }
        let report = pipeline.run_cycle(&frame).unwrap();
        if report.direct == Some(Vowel::A) {
            saw_a = true;
        }
    }
    assert!(saw_a, "expected at least one frame to classify as 'a'");
}

#[test]
fn silence_never_produces_a_label() {
    let mut pipeline = Pipeline::new();
    let silent = vec![0i16; 2048];
    for _ in 0..10 {
        let report = pipeline.run_cycle(&silent).unwrap();
        assert_eq!(report.direct, None);
        assert_eq!(report.displayed, None);
    }
}
