//! Viseme grouping and terminal rendering of the display state.

use crate::pipeline::CycleReport;
use crate::vowel::Vowel;
use std::io::{self, Write};

const DIM: &str = "\x1b[2m";
const GREEN: &str = "\x1b[32m";
const CYAN: &str = "\x1b[36m";
const RESET: &str = "\x1b[0m";

/// Mouth-shape group a displayed label maps to.
///
/// Iotated vowels share the articulation of their base vowel, so the ten
/// labels collapse into six shapes plus silence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisemeGroup {
    /// Wide open jaw: а, я.
    Open,
    /// Spread lips, mid jaw: э, е.
    Spread,
    /// Spread lips, closed jaw: и.
    Narrow,
    /// Neutral lips, mid-back tongue: ы.
    Mid,
    /// Rounded lips, mid jaw: о, ё.
    Rounded,
    /// Tightly pursed lips: у, ю.
    Pursed,
    /// Mouth at rest.
    Silence,
}

/// Map a displayed label (or its absence) to a mouth shape.
pub fn viseme_group(label: Option<Vowel>) -> VisemeGroup {
    match label {
        Some(Vowel::A) | Some(Vowel::Ya) => VisemeGroup::Open,
        Some(Vowel::E) | Some(Vowel::Ye) => VisemeGroup::Spread,
        Some(Vowel::I) => VisemeGroup::Narrow,
        Some(Vowel::Y) => VisemeGroup::Mid,
        Some(Vowel::O) | Some(Vowel::Yo) => VisemeGroup::Rounded,
        Some(Vowel::U) | Some(Vowel::Yu) => VisemeGroup::Pursed,
        None => VisemeGroup::Silence,
    }
}

impl VisemeGroup {
    /// Short ASCII name for logs and status lines.
    pub fn name(self) -> &'static str {
        match self {
            VisemeGroup::Open => "open",
            VisemeGroup::Spread => "spread",
            VisemeGroup::Narrow => "narrow",
            VisemeGroup::Mid => "mid",
            VisemeGroup::Rounded => "rounded",
            VisemeGroup::Pursed => "pursed",
            VisemeGroup::Silence => "silence",
        }
    }
}

/// Clear the current terminal line.
pub fn clear_line() {
    eprint!("\r\x1b[2K");
}

/// Render one cycle's state as a live status line on stderr.
pub fn render_status(report: &CycleReport) {
    let shape = viseme_group(report.displayed);
    match report.displayed {
        Some(vowel) => {
            let origin = if report.direct.is_some() {
                format!("{GREEN}direct{RESET}")
            } else {
                format!("{CYAN}backup{RESET}")
            };
            eprint!(
                "\r\x1b[2K{} {}  {DIM}{} / {origin}{RESET}",
                vowel.glyph(),
                vowel.name(),
                shape.name(),
            );
        }
        None => {
            eprint!("\r\x1b[2K{DIM}\u{2500} silence{RESET}");
        }
    }
    io::stderr().flush().ok();
}

/// Render a finished label line (used when a label changes, verbose mode).
pub fn render_label_line(vowel: Vowel) {
    clear_line();
    eprintln!("{} {}  {DIM}{}{RESET}", vowel.glyph(), vowel.name(), viseme_group(Some(vowel)).name());
}
