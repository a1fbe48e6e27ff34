//! Per-cycle orchestration: direct spectral detection first, recognizer
//! backup second, display hold last.

use crate::defaults;
use crate::detect::VowelDetector;
use crate::display::{Clock, DisplaySlot, SystemClock};
use crate::error::Result;
use crate::recognize::{Recognizer, VowelExtractor};
use crate::vowel::Vowel;

/// One analysis cycle's breakdown, for diagnostics and rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleReport {
    /// Label from spectral detection, if any.
    pub direct: Option<Vowel>,
    /// Labels extracted from new recognizer text this cycle.
    pub extracted: Vec<Vowel>,
    /// What the display shows after this cycle.
    pub displayed: Option<Vowel>,
}

/// The full detection pipeline for one audio stream.
///
/// The spectral path always runs and always wins; the recognizer backup is
/// consulted only when the direct path produced nothing this cycle. Either
/// way recognizer text is folded into the extractor so its baseline never
/// falls behind.
pub struct Pipeline<C: Clock = SystemClock> {
    detector: VowelDetector,
    extractor: VowelExtractor,
    display: DisplaySlot<C>,
    recognizer: Option<Box<dyn Recognizer>>,
    sample_rate: u32,
}

impl<C: Clock> Pipeline<C> {
    pub fn with_display(display: DisplaySlot<C>) -> Self {
        Self {
            detector: VowelDetector::new(),
            extractor: VowelExtractor::new(),
            display,
            recognizer: None,
            sample_rate: defaults::SAMPLE_RATE,
        }
    }

    /// Attach a backup recognizer.
    pub fn with_recognizer(mut self, recognizer: Box<dyn Recognizer>) -> Self {
        self.recognizer = Some(recognizer);
        self
    }

    pub fn with_detector(mut self, detector: VowelDetector) -> Self {
        self.detector = detector;
        self
    }

    /// Run one cycle over the given samples and return the breakdown.
    ///
    /// An empty sample batch still polls the display so held labels expire
    /// on schedule.
    pub fn run_cycle(&mut self, samples: &[i16]) -> Result<CycleReport> {
        if samples.is_empty() {
            return Ok(CycleReport {
                direct: None,
                extracted: Vec::new(),
                displayed: self.display.current(),
            });
        }

        let direct = self.detector.detect(samples, self.sample_rate);
        if let Some(vowel) = direct {
            self.display.submit(&[vowel]);
        }

        let mut extracted = Vec::new();
        if let Some(recognizer) = self.recognizer.as_mut() {
            let text = recognizer.feed(samples)?;
            extracted = self.extractor.extract_new(&text);
            if direct.is_none() && !extracted.is_empty() {
                self.display.submit(&extracted);
            }
        }

        Ok(CycleReport {
            direct,
            extracted,
            displayed: self.display.current(),
        })
    }

    /// The label currently held by the display, honoring its hold timer.
    pub fn displayed(&mut self) -> Option<Vowel> {
        self.display.current()
    }

    /// Reset detection history, extractor baseline and display state.
    pub fn reset(&mut self) {
        self.detector.reset();
        self.extractor.reset();
        self.display.clear();
        if let Some(recognizer) = self.recognizer.as_mut() {
            recognizer.reset();
        }
    }
}

impl Pipeline<SystemClock> {
    pub fn new() -> Self {
        Self::with_display(DisplaySlot::new())
    }
}

impl Default for Pipeline<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}
