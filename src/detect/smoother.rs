//! Temporal smoothing of the per-frame label stream.
//!
//! Holds a short history of recent outcomes and consolidates them with an
//! any-hit rule: a single occurrence of a label anywhere in the window keeps
//! it alive. This is hysteresis biased toward label persistence, trading
//! precision for flicker suppression.

use crate::defaults;
use crate::vowel::Vowel;
use std::collections::VecDeque;

/// Bounded FIFO of recent per-frame outcomes, including `None` frames.
#[derive(Debug, Clone)]
pub struct TemporalSmoother {
    history: VecDeque<Option<Vowel>>,
    capacity: usize,
}

impl Default for TemporalSmoother {
    fn default() -> Self {
        Self::new(defaults::HISTORY_CAPACITY)
    }
}

impl TemporalSmoother {
    pub fn new(capacity: usize) -> Self {
        Self {
            history: VecDeque::with_capacity(capacity),
            capacity: capacity.max(1),
        }
    }

    /// Append a per-frame outcome, evicting the oldest entry when full.
    ///
    /// `None` outcomes are recorded too: isolated silent frames age labels
    /// out of the window gradually instead of erasing state at once.
    pub fn push(&mut self, outcome: Option<Vowel>) {
        if self.history.len() == self.capacity {
            self.history.pop_front();
        }
        self.history.push_back(outcome);
    }

    /// Consolidate the recent window into a single label.
    ///
    /// Labels are checked in table order; the first one present at least once
    /// in the window wins. No majority vote, no recency weighting.
    pub fn consolidated(&self) -> Option<Vowel> {
        let window = self.history.len().min(self.capacity);
        let recent = self.history.iter().rev().take(window);
        let mut seen = [false; Vowel::ALL.len()];
        for outcome in recent {
            if let Some(v) = outcome {
                seen[*v as usize] = true;
            }
        }
        Vowel::ALL.into_iter().find(|v| seen[*v as usize])
    }

    /// Number of outcomes currently held.
    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Drop all recorded outcomes.
    pub fn clear(&mut self) {
        self.history.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_history_consolidates_to_none() {
        let smoother = TemporalSmoother::default();
        assert_eq!(smoother.consolidated(), None);
    }

    #[test]
    fn test_single_hit_survives_trailing_silence() {
        let mut smoother = TemporalSmoother::default();
        smoother.push(Some(Vowel::A));
        smoother.push(None);
        smoother.push(None);
        smoother.push(None);
        // Any-hit in the last 4: "a" is still alive
        assert_eq!(smoother.consolidated(), Some(Vowel::A));
    }

    #[test]
    fn test_label_ages_out_after_capacity_frames() {
        let mut smoother = TemporalSmoother::default();
        smoother.push(Some(Vowel::A));
        for _ in 0..4 {
            smoother.push(None);
        }
        assert_eq!(smoother.consolidated(), None);
    }

    #[test]
    fn test_capacity_is_invariant() {
        let mut smoother = TemporalSmoother::new(4);
        for _ in 0..10 {
            smoother.push(Some(Vowel::O));
            assert!(smoother.len() <= 4);
        }
        assert_eq!(smoother.len(), 4);
    }

    #[test]
    fn test_table_order_wins_over_recency() {
        let mut smoother = TemporalSmoother::default();
        smoother.push(Some(Vowel::U));
        smoother.push(Some(Vowel::A));
        smoother.push(Some(Vowel::U));
        smoother.push(Some(Vowel::U));
        // "a" precedes "u" in table order even though "u" is more frequent
        // and more recent
        assert_eq!(smoother.consolidated(), Some(Vowel::A));
    }

    #[test]
    fn test_partial_history_window() {
        let mut smoother = TemporalSmoother::default();
        smoother.push(None);
        smoother.push(Some(Vowel::Ye));
        assert_eq!(smoother.consolidated(), Some(Vowel::Ye));
    }

    #[test]
    fn test_clear_resets_history() {
        let mut smoother = TemporalSmoother::default();
        smoother.push(Some(Vowel::I));
        smoother.clear();
        assert!(smoother.is_empty());
        assert_eq!(smoother.consolidated(), None);
    }
}
