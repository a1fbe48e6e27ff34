//! Display state holder with a timed hold.
//!
//! The detector produces labels in bursts with gaps between frames; the
//! display keeps the most recent label alive for a short hold interval so
//! the output does not flicker on every quiet frame.

use crate::defaults;
use crate::vowel::Vowel;
use std::time::{Duration, Instant};

/// Trait for time operations, allowing mock time in tests.
pub trait Clock: Send + Sync {
    /// Returns the current instant.
    fn now(&self) -> Instant;
}

/// Real system clock using `std::time::Instant::now()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Outcome of submitting a label batch to the display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The displayed label changed to a new one.
    Changed(Vowel),
    /// The label was already showing; its hold timer restarted.
    Refreshed,
    /// The batch was empty; nothing happened.
    Ignored,
}

/// Single-slot label display with a hold timeout.
///
/// Holds at most one label at a time. Submitting the same label again only
/// restarts the timer; submitting a different one replaces it immediately.
/// A label expires once the hold interval has fully elapsed.
pub struct DisplaySlot<C: Clock = SystemClock> {
    current: Option<Vowel>,
    shown_at: Option<Instant>,
    hold: Duration,
    clock: C,
}

impl<C: Clock> DisplaySlot<C> {
    /// Creates a display slot with the given hold interval and clock.
    pub fn with_clock(hold: Duration, clock: C) -> Self {
        Self {
            current: None,
            shown_at: None,
            hold,
            clock,
        }
    }

    /// Submit a batch of labels. Only the first entry is considered; the
    /// rest of the batch arrives too late to matter for a single slot.
    pub fn submit(&mut self, labels: &[Vowel]) -> SubmitOutcome {
        let Some(&label) = labels.first() else {
            return SubmitOutcome::Ignored;
        };

        let now = self.clock.now();
        let outcome = if self.current == Some(label) {
            SubmitOutcome::Refreshed
        } else {
            self.current = Some(label);
            SubmitOutcome::Changed(label)
        };
        self.shown_at = Some(now);
        outcome
    }

    /// The currently held label, expiring it first if the hold has elapsed.
    pub fn current(&mut self) -> Option<Vowel> {
        if let Some(shown_at) = self.shown_at {
            // Strictly greater: a label polled exactly at the hold boundary
            // is still visible
            if self.clock.now().duration_since(shown_at) > self.hold {
                self.current = None;
                self.shown_at = None;
            }
        }
        self.current
    }

    /// Whether a label is held, without consulting the timer.
    pub fn has_label(&self) -> bool {
        self.current.is_some()
    }

    /// Drop the held label immediately.
    pub fn clear(&mut self) {
        self.current = None;
        self.shown_at = None;
    }
}

impl DisplaySlot<SystemClock> {
    /// Creates a display slot with the default hold using the system clock.
    pub fn new() -> Self {
        Self::with_clock(Duration::from_millis(defaults::HOLD_MS), SystemClock)
    }

    pub fn with_hold(hold: Duration) -> Self {
        Self::with_clock(hold, SystemClock)
    }
}

impl Default for DisplaySlot<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}
