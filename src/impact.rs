//! High-impact keywords used to weigh decisions.
//!
//! This module only carries the bilingual keyword list. How keyword presence
//! affects an impact score is up to the consumer.

/// Bilingual (English / German) keywords that flag high-impact decisions.
///
/// Words that are spelled the same in both languages (`migration`, `budget`)
/// appear once.
pub const HIGH_IMPACT_KEYWORDS: &[&str] = &[
    "architecture",
    "architektur",
    "security",
    "sicherheit",
    "migration",
    "delete",
    "löschen",
    "production",
    "produktion",
    "deploy",
    "breaking",
    "major",
    "critical",
    "kritisch",
    "strategy",
    "strategie",
    "budget",
    "contract",
    "vertrag",
];

/// Whether a single word is one of the [`HIGH_IMPACT_KEYWORDS`], ignoring case.
pub fn is_high_impact_keyword(word: &str) -> bool {
    let lower = word.trim().to_lowercase();
    HIGH_IMPACT_KEYWORDS.contains(&lower.as_str())
}
