//! Lexical mood classifier for conversational snippets.
//!
//! Each non-neutral [`Mood`] owns a single bilingual keyword pattern. The
//! classifier scans the whole text for every occurrence of every pattern and
//! picks the mood whose occurrence starts furthest to the right, so
//! "this sucks but it works" is productive, not frustrated.
//!
//! # Tie-break
//!
//! Offsets are compared with a strict `>`. When two moods match at the same
//! offset, the mood that appears earlier in [`MOOD_PATTERNS`] keeps the
//! position. `läuft` is listed under both excited and productive, so a
//! message ending in `läuft` classifies as excited.
//!
//! # Case
//!
//! Matching ignores case without folding non-ASCII characters onto ASCII
//! ones (see [`crate::dialect`]): `LÄUFT` matches `läuft`, but `ſucks`
//! (long s) and `\u{212A}rass` (Kelvin sign) match nothing.

use crate::patterns::compile_builtin;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;
use tracing::trace;

/// Coarse emotional tone of a text snippet.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Frustrated,
    Excited,
    Tense,
    Productive,
    Exploratory,
    /// No mood pattern matched.
    #[default]
    Neutral,
}

impl Mood {
    /// Returns the lowercase label of this mood.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Frustrated => "frustrated",
            Self::Excited => "excited",
            Self::Tense => "tense",
            Self::Productive => "productive",
            Self::Exploratory => "exploratory",
            Self::Neutral => "neutral",
        }
    }

    /// Returns all moods, neutral last.
    pub fn all() -> &'static [Mood] {
        &[
            Self::Frustrated,
            Self::Excited,
            Self::Tense,
            Self::Productive,
            Self::Exploratory,
            Self::Neutral,
        ]
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Pattern table ───────────────────────────────────────────────────────

/// (mood, pattern) in evaluation order. Order decides same-offset ties.
pub const MOOD_PATTERNS: &[(Mood, &str)] = &[
    (
        Mood::Frustrated,
        "(?:fuck|shit|mist|nervig|genervt|damn|wtf|argh|schon wieder|zum kotzen|sucks)",
    ),
    (
        Mood::Excited,
        "(?:geil|nice|awesome|krass|boom|läuft|yes!|🎯|🚀|perfekt|brilliant|mega|sick)",
    ),
    (
        Mood::Tense,
        "(?:vorsicht|careful|risky|heikel|kritisch|dringend|urgent|achtung|gefährlich)",
    ),
    (
        Mood::Productive,
        "(?:erledigt|done|fixed|works|fertig|deployed|✅|gebaut|shipped|läuft)",
    ),
    (
        Mood::Exploratory,
        "(?:was wäre wenn|what if|könnte man|idea|idee|maybe|vielleicht|experiment)",
    ),
];

static COMPILED_MOODS: LazyLock<Vec<(Mood, Regex)>> = LazyLock::new(|| {
    MOOD_PATTERNS
        .iter()
        .filter_map(|&(mood, source)| compile_builtin(source).map(|re| (mood, re)))
        .collect()
});

/// Returns the pattern source for `mood`, or `None` for [`Mood::Neutral`].
pub fn mood_pattern(mood: Mood) -> Option<&'static str> {
    MOOD_PATTERNS
        .iter()
        .find(|(m, _)| *m == mood)
        .map(|&(_, source)| source)
}

/// Detect the mood of `text`. The rightmost pattern occurrence wins.
///
/// Returns [`Mood::Neutral`] for empty text or when nothing matches.
pub fn detect_mood(text: &str) -> Mood {
    if text.is_empty() {
        return Mood::Neutral;
    }

    let mut winner = Mood::Neutral;
    let mut winning_pos: Option<usize> = None;

    for (mood, pattern) in COMPILED_MOODS.iter() {
        for m in pattern.find_iter(text) {
            if winning_pos.is_none_or(|pos| m.start() > pos) {
                winner = *mood;
                winning_pos = Some(m.start());
            }
        }
    }

    trace!(mood = %winner, offset = ?winning_pos, "mood detected");
    winner
}

/// Like [`detect_mood`], treating absent text as empty.
pub fn detect_mood_opt(text: Option<&str>) -> Mood {
    text.map_or(Mood::Neutral, detect_mood)
}
