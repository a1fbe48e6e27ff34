//! Heuristic vowel scoring from an (F1, F2) pair.
//!
//! Each category is a rectangular admissibility region in F1×F2 space with a
//! tighter bonus sub-region. The table is data, not control flow, so regions
//! can be retuned without touching the scoring loop. Iotated vowels carry a
//! lower base weight reflecting lower classification confidence.

use crate::dsp::FormantPair;
use crate::vowel::Vowel;

/// Inclusive frequency interval in Hz.
type Band = (f64, f64);

/// One row of the vowel scoring table.
#[derive(Debug, Clone, Copy)]
pub struct VowelRegion {
    pub vowel: Vowel,
    /// Coarse admissibility rectangle.
    pub f1: Band,
    pub f2: Band,
    /// Tighter sub-rectangle that multiplies the score.
    pub bonus_f1: Band,
    pub bonus_f2: Band,
    /// Base weight: 0.5 for primary vowels, 0.4 for iotated counterparts.
    pub weight: f64,
    /// Bonus multiplier: 1.5 for primary, 1.3 for iotated.
    pub bonus: f64,
}

/// The ten vowel regions in table order.
///
/// Table order is also the tie-break order: on exactly equal scores the
/// earlier row wins.
pub const VOWEL_TABLE: [VowelRegion; 10] = [
    VowelRegion {
        vowel: Vowel::A,
        f1: (650.0, 900.0),
        f2: (1000.0, 1500.0),
        bonus_f1: (700.0, 850.0),
        bonus_f2: (1100.0, 1300.0),
        weight: 0.5,
        bonus: 1.5,
    },
    VowelRegion {
        vowel: Vowel::Ya,
        f1: (600.0, 850.0),
        f2: (1200.0, 1600.0),
        bonus_f1: (650.0, 800.0),
        bonus_f2: (1300.0, 1500.0),
        weight: 0.4,
        bonus: 1.3,
    },
    VowelRegion {
        vowel: Vowel::E,
        f1: (450.0, 700.0),
        f2: (1300.0, 2000.0),
        bonus_f1: (500.0, 650.0),
        bonus_f2: (1400.0, 1800.0),
        weight: 0.5,
        bonus: 1.5,
    },
    VowelRegion {
        vowel: Vowel::Ye,
        f1: (400.0, 650.0),
        f2: (1500.0, 2100.0),
        bonus_f1: (450.0, 600.0),
        bonus_f2: (1600.0, 2000.0),
        weight: 0.4,
        bonus: 1.3,
    },
    VowelRegion {
        vowel: Vowel::I,
        f1: (200.0, 450.0),
        f2: (1800.0, 3000.0),
        bonus_f1: (250.0, 400.0),
        bonus_f2: (2000.0, 2800.0),
        weight: 0.5,
        bonus: 1.5,
    },
    VowelRegion {
        vowel: Vowel::Y,
        f1: (300.0, 550.0),
        f2: (1100.0, 1700.0),
        bonus_f1: (350.0, 500.0),
        bonus_f2: (1200.0, 1600.0),
        weight: 0.5,
        bonus: 1.5,
    },
    VowelRegion {
        vowel: Vowel::O,
        f1: (400.0, 700.0),
        f2: (800.0, 1300.0),
        bonus_f1: (450.0, 650.0),
        bonus_f2: (850.0, 1200.0),
        weight: 0.5,
        bonus: 1.5,
    },
    VowelRegion {
        vowel: Vowel::Yo,
        f1: (400.0, 650.0),
        f2: (900.0, 1400.0),
        bonus_f1: (450.0, 600.0),
        bonus_f2: (1000.0, 1300.0),
        weight: 0.4,
        bonus: 1.3,
    },
    VowelRegion {
        vowel: Vowel::U,
        f1: (250.0, 500.0),
        f2: (550.0, 1100.0),
        bonus_f1: (300.0, 450.0),
        bonus_f2: (600.0, 1000.0),
        weight: 0.5,
        bonus: 1.5,
    },
    VowelRegion {
        vowel: Vowel::Yu,
        f1: (250.0, 450.0),
        f2: (800.0, 1300.0),
        bonus_f1: (300.0, 400.0),
        bonus_f2: (900.0, 1200.0),
        weight: 0.4,
        bonus: 1.3,
    },
];

fn in_band(value: f64, band: Band) -> bool {
    value >= band.0 && value <= band.1
}

impl VowelRegion {
    /// Score this region against a formant pair. Zero outside the coarse
    /// rectangle.
    pub fn score(&self, pair: &FormantPair) -> f64 {
        if !in_band(pair.f1.frequency, self.f1) || !in_band(pair.f2.frequency, self.f2) {
            return 0.0;
        }
        let mut score = (pair.f1.amplitude + pair.f2.amplitude) * self.weight;
        if in_band(pair.f1.frequency, self.bonus_f1) && in_band(pair.f2.frequency, self.bonus_f2) {
            score *= self.bonus;
        }
        score
    }
}

/// Return the best-scoring vowel, or `None` when the maximum score falls
/// below `min_score` (the confidence floor derived from the frame's peak
/// spectral magnitude).
pub fn best_vowel(pair: &FormantPair, min_score: f64) -> Option<Vowel> {
    let mut best: Option<(Vowel, f64)> = None;
    for region in &VOWEL_TABLE {
        let score = region.score(pair);
        // Strict comparison keeps the earlier table row on exact ties
        if best.is_none_or(|(_, s)| score > s) {
            best = Some((region.vowel, score));
        }
    }

    match best {
        Some((vowel, score)) if score >= min_score && score > 0.0 => Some(vowel),
        _ => None,
    }
}
