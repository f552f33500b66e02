//! Bilingual lexical classifier for conversational text.
//!
//! Classifies a single snippet along two axes:
//!
//! - **Signals**: decision, close, wait and topic-shift statements, matched by
//!   per-language pattern lists from the [`patterns`] registry.
//! - **Mood**: one of frustrated, excited, tense, productive, exploratory or
//!   neutral, picked by [`detect_mood`] using rightmost-match-wins.
//!
//! Everything here is pure: patterns compile once into process-wide statics
//! and no call holds state, so all functions are safe to use from any thread.
//! English and German are supported; [`PatternLanguage::Both`] merges them.

pub mod config;
pub mod dialect;
pub mod error;
pub mod impact;
pub mod language;
pub mod mood;
pub mod patterns;

pub use config::SignalsConfig;
pub use error::{Result, SignalError};
pub use impact::HIGH_IMPACT_KEYWORDS;
pub use language::PatternLanguage;
pub use mood::{MOOD_PATTERNS, Mood, detect_mood, detect_mood_opt};
pub use patterns::{Pattern, PatternCategory, PatternSet, get_patterns, get_patterns_by_name};
