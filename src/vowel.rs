//! The closed set of vowel labels the detector can produce.
//!
//! Labels follow the ten Russian vowel letters: five primary vowels and their
//! iotated counterparts. "None"/silence is represented as `Option<Vowel>`
//! throughout the crate rather than a sentinel variant.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A vowel phoneme category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Vowel {
    /// а
    A,
    /// я
    Ya,
    /// э
    E,
    /// е
    Ye,
    /// и
    I,
    /// ы
    Y,
    /// о
    O,
    /// ё
    Yo,
    /// у
    U,
    /// ю
    Yu,
}

impl Vowel {
    /// All labels in scoring-table order.
    ///
    /// This order doubles as the tie-break and smoothing priority: when two
    /// categories score exactly equal, or when several labels appear in the
    /// recent history, the earlier entry wins.
    pub const ALL: [Vowel; 10] = [
        Vowel::A,
        Vowel::Ya,
        Vowel::E,
        Vowel::Ye,
        Vowel::I,
        Vowel::Y,
        Vowel::O,
        Vowel::Yo,
        Vowel::U,
        Vowel::Yu,
    ];

    /// Short ASCII name, e.g. for CLI output and config values.
    pub fn name(&self) -> &'static str {
        match self {
            Vowel::A => "a",
            Vowel::Ya => "ya",
            Vowel::E => "e",
            Vowel::Ye => "ye",
            Vowel::I => "i",
            Vowel::Y => "y",
            Vowel::O => "o",
            Vowel::Yo => "yo",
            Vowel::U => "u",
            Vowel::Yu => "yu",
        }
    }

    /// Canonical Cyrillic glyph for this label.
    pub fn glyph(&self) -> char {
        match self {
            Vowel::A => 'а',
            Vowel::Ya => 'я',
            Vowel::E => 'э',
            Vowel::Ye => 'е',
            Vowel::I => 'и',
            Vowel::Y => 'ы',
            Vowel::O => 'о',
            Vowel::Yo => 'ё',
            Vowel::U => 'у',
            Vowel::Yu => 'ю',
        }
    }

    /// Map a character from recognized text to a vowel label.
    ///
    /// Covers Cyrillic and Latin vowel letters, case-insensitive. Latin
    /// letters map onto the nearest primary category ("e" → э, "y" → ы).
    /// Returns `None` for consonants and everything else.
    pub fn from_char(c: char) -> Option<Vowel> {
        let c = c.to_lowercase().next().unwrap_or(c);
        match c {
            'а' | 'a' => Some(Vowel::A),
            'я' => Some(Vowel::Ya),
            'э' | 'e' => Some(Vowel::E),
            'е' => Some(Vowel::Ye),
            'и' | 'i' => Some(Vowel::I),
            'ы' | 'y' => Some(Vowel::Y),
            'о' | 'o' => Some(Vowel::O),
            'ё' => Some(Vowel::Yo),
            'у' | 'u' => Some(Vowel::U),
            'ю' => Some(Vowel::Yu),
            _ => None,
        }
    }
}

impl fmt::Display for Vowel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
