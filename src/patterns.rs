//! Bilingual pattern registry for conversational signals.
//!
//! Four signal categories are recognised: decisions ("we decided"), closures
//! ("it's done"), blockers ("waiting for") and topic shifts ("back to X").
//! Each category has one ordered pattern list per language. Requesting
//! [`PatternLanguage::Both`] concatenates the English list followed by the
//! German list, without de-duplication.
//!
//! Sources are written in ECMAScript syntax and matched case-insensitively;
//! see [`crate::dialect`] for how they map onto `regex`. Patterns are
//! compiled once per process and cloned into each returned [`PatternSet`].
//! Cloning a [`Regex`] is a reference-count bump.

use crate::dialect;
use crate::error::{Result, SignalError};
use crate::language::PatternLanguage;
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;
use tracing::error;

/// A conversational signal class, independent of mood.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternCategory {
    /// A decision was stated.
    Decision,
    /// Something was closed or resolved.
    Close,
    /// Work is blocked or waiting on something.
    Wait,
    /// The conversation moves to another topic.
    Topic,
}

impl PatternCategory {
    /// Returns the lowercase name of this category.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Decision => "decision",
            Self::Close => "close",
            Self::Wait => "wait",
            Self::Topic => "topic",
        }
    }

    /// Returns all categories in registry order.
    pub fn all() -> &'static [PatternCategory] {
        &[Self::Decision, Self::Close, Self::Wait, Self::Topic]
    }
}

impl fmt::Display for PatternCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Pattern sources ─────────────────────────────────────────────────────

/// (language, category, sources). Single languages only.
const PATTERN_SOURCES: &[(PatternLanguage, PatternCategory, &[&str])] = &[
    (
        PatternLanguage::En,
        PatternCategory::Decision,
        &[r"(?:decided|decision|agreed|let'?s do|the plan is|approach:)"],
    ),
    (
        PatternLanguage::En,
        PatternCategory::Close,
        &[
            r"(?:^|\s)(?:is |it's |that's |all )?(?:done|fixed|solved|closed)(?:\s|[.!]|$)",
            r"(?:^|\s)(?:it |that )works(?:\s|[.!]|$)",
            "✅",
        ],
    ),
    (
        PatternLanguage::En,
        PatternCategory::Wait,
        &[r"(?:waiting for|blocked by|need.*first)"],
    ),
    (
        PatternLanguage::En,
        PatternCategory::Topic,
        &[r"(?:back to|now about|regarding)\s+(\w[\w\s-]{2,30})"],
    ),
    (
        PatternLanguage::De,
        PatternCategory::Decision,
        &[r"(?:entschieden|beschlossen|machen wir|wir machen|der plan ist|ansatz:)"],
    ),
    (
        PatternLanguage::De,
        PatternCategory::Close,
        &[
            r"(?:^|\s)(?:ist |schon )?(?:erledigt|gefixt|gelöst|fertig)(?:\s|[.!]|$)",
            r"(?:^|\s)(?:es |das )funktioniert(?:\s|[.!]|$)",
        ],
    ),
    (
        PatternLanguage::De,
        PatternCategory::Wait,
        &[r"(?:warte auf|blockiert durch|brauche.*erst)"],
    ),
    (
        PatternLanguage::De,
        PatternCategory::Topic,
        &[r"(?:zurück zu|jetzt zu|bzgl\.?|wegen)\s+(\w[\w\s-]{2,30})"],
    ),
];

/// Returns the pattern sources for `category`, in merge order for `language`.
pub fn pattern_sources(
    language: PatternLanguage,
    category: PatternCategory,
) -> Vec<&'static str> {
    language
        .languages()
        .iter()
        .flat_map(|&lang| {
            PATTERN_SOURCES
                .iter()
                .filter(move |(l, c, _)| *l == lang && *c == category)
                .flat_map(|(_, _, sources)| sources.iter().copied())
        })
        .collect()
}

// ── Compilation ─────────────────────────────────────────────────────────

/// Compile an ECMAScript-syntax source for case-insensitive matching.
///
/// # Errors
///
/// Returns [`SignalError::Pattern`] if the source cannot be translated or is
/// not a valid regex.
pub fn compile_pattern(source: &str) -> Result<Regex> {
    let translated = dialect::translate(source)?;
    Regex::new(&translated).map_err(|e| SignalError::Pattern(format!("{source}: {e}")))
}

/// Compile a built-in source, logging and skipping it on failure.
pub(crate) fn compile_builtin(source: &str) -> Option<Regex> {
    match compile_pattern(source) {
        Ok(re) => Some(re),
        Err(e) => {
            error!("built-in pattern skipped: {e}");
            None
        }
    }
}

static COMPILED: LazyLock<Vec<(PatternLanguage, PatternCategory, Vec<Pattern>)>> =
    LazyLock::new(|| {
        PATTERN_SOURCES
            .iter()
            .map(|&(lang, category, sources)| {
                let compiled = sources
                    .iter()
                    .filter_map(|&source| {
                        compile_builtin(source).map(|regex| Pattern { source, regex })
                    })
                    .collect();
                (lang, category, compiled)
            })
            .collect()
    });

fn compiled(
    language: PatternLanguage,
    category: PatternCategory,
) -> impl Iterator<Item = &'static Pattern> {
    COMPILED
        .iter()
        .filter(move |(l, c, _)| *l == language && *c == category)
        .flat_map(|(_, _, patterns)| patterns.iter())
}

// ── Pattern set ─────────────────────────────────────────────────────────

/// A compiled pattern together with the source it was written as.
#[derive(Debug, Clone)]
pub struct Pattern {
    source: &'static str,
    regex: Regex,
}

impl Pattern {
    /// The ECMAScript-syntax source from the pattern table.
    pub fn source(&self) -> &'static str {
        self.source
    }

    /// The compiled regex.
    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    /// Whether the pattern matches anywhere in `text`.
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

/// One ordered pattern list per [`PatternCategory`].
#[derive(Debug, Clone, Default)]
pub struct PatternSet {
    /// Decision statements.
    pub decision: Vec<Pattern>,
    /// Closure / resolution statements.
    pub close: Vec<Pattern>,
    /// Blocking / wait statements.
    pub wait: Vec<Pattern>,
    /// Topic-shift references. Capture group 1 holds the topic.
    pub topic: Vec<Pattern>,
}

impl PatternSet {
    /// Returns the patterns for one category.
    pub fn get(&self, category: PatternCategory) -> &[Pattern] {
        match category {
            PatternCategory::Decision => &self.decision,
            PatternCategory::Close => &self.close,
            PatternCategory::Wait => &self.wait,
            PatternCategory::Topic => &self.topic,
        }
    }

    fn get_mut(&mut self, category: PatternCategory) -> &mut Vec<Pattern> {
        match category {
            PatternCategory::Decision => &mut self.decision,
            PatternCategory::Close => &mut self.close,
            PatternCategory::Wait => &mut self.wait,
            PatternCategory::Topic => &mut self.topic,
        }
    }

    /// Total number of patterns across all categories.
    pub fn len(&self) -> usize {
        PatternCategory::all().iter().map(|&c| self.get(c).len()).sum()
    }

    /// Whether the set holds no patterns at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the sources of one category's patterns, in order.
    pub fn sources(&self, category: PatternCategory) -> Vec<&'static str> {
        self.get(category).iter().map(Pattern::source).collect()
    }

    /// Whether any pattern of `category` matches `text`.
    pub fn matches(&self, category: PatternCategory, text: &str) -> bool {
        self.get(category).iter().any(|p| p.is_match(text))
    }

    /// Extract the topic named by the first matching topic pattern.
    ///
    /// Returns the trimmed capture, or `None` if no topic pattern matches.
    pub fn extract_topic(&self, text: &str) -> Option<String> {
        self.topic.iter().find_map(|p| {
            let topic = p.regex().captures(text)?.get(1)?.as_str().trim();
            (!topic.is_empty()).then(|| topic.to_owned())
        })
    }
}

impl PartialEq for PatternSet {
    fn eq(&self, other: &Self) -> bool {
        PatternCategory::all()
            .iter()
            .all(|&c| self.sources(c) == other.sources(c))
    }
}

impl Eq for PatternSet {}

/// Build the pattern set for a language selector.
///
/// [`PatternLanguage::Both`] yields, per category, the English patterns
/// followed by the German ones.
pub fn get_patterns(language: PatternLanguage) -> PatternSet {
    let mut set = PatternSet::default();
    for &category in PatternCategory::all() {
        let list = set.get_mut(category);
        for &lang in language.languages() {
            list.extend(compiled(lang, category).cloned());
        }
    }
    set
}

/// Build the pattern set for a selector given as a string (`en`, `de`, `both`).
///
/// # Errors
///
/// Returns [`SignalError::InvalidSelector`] for any other value.
pub fn get_patterns_by_name(selector: &str) -> Result<PatternSet> {
    Ok(get_patterns(selector.parse()?))
}
