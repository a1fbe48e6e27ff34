//! Vowel extraction from incremental recognizer text.
//!
//! Partial transcripts grow character by character and occasionally get
//! rewritten wholesale when the recognizer revises its hypothesis. The
//! extractor tracks the previous partial and only emits vowels from the
//! newly appended portion, falling back to the whole string on a revision.

use crate::vowel::Vowel;

/// Stateful delta extractor over a stream of partial transcripts.
#[derive(Debug, Clone, Default)]
pub struct VowelExtractor {
    last_text: String,
}

impl VowelExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Extract vowels from every character of `text`, in order.
    pub fn extract_all(text: &str) -> Vec<Vowel> {
        text.chars().filter_map(Vowel::from_char).collect()
    }

    /// Extract vowels from the portion of `text` not seen in the previous
    /// call, then remember `text` as the new baseline.
    ///
    /// A transcript that merely grew yields vowels from the appended suffix.
    /// A transcript that shrank or diverged from the remembered prefix is a
    /// hypothesis revision and yields vowels from the whole string. Empty
    /// input yields nothing and leaves the baseline untouched.
    pub fn extract_new(&mut self, text: &str) -> Vec<Vowel> {
        if text.is_empty() {
            return Vec::new();
        }
        if text == self.last_text {
            return Vec::new();
        }

        let vowels = if text.len() > self.last_text.len() && text.starts_with(&self.last_text) {
            Self::extract_all(&text[self.last_text.len()..])
        } else {
            Self::extract_all(text)
        };

        self.last_text = text.to_string();
        vowels
    }

    /// The most recent transcript seen.
    pub fn last_text(&self) -> &str {
        &self.last_text
    }

    /// Forget the remembered transcript, e.g. at an utterance boundary.
    pub fn reset(&mut self) {
        self.last_text.clear();
    }
}
