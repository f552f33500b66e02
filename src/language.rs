//! Language selector for the bilingual pattern sets.

use crate::error::SignalError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which language's keyword patterns apply.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternLanguage {
    /// English patterns only.
    En,
    /// German patterns only.
    De,
    /// English followed by German.
    #[default]
    Both,
}

impl PatternLanguage {
    /// Returns the wire name of this selector.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::De => "de",
            Self::Both => "both",
        }
    }

    /// Returns all selector variants.
    pub fn all() -> &'static [PatternLanguage] {
        &[Self::En, Self::De, Self::Both]
    }

    /// Expands the selector into the single languages it covers, in merge order.
    pub fn languages(self) -> &'static [PatternLanguage] {
        match self {
            Self::En => &[Self::En],
            Self::De => &[Self::De],
            Self::Both => &[Self::En, Self::De],
        }
    }
}

impl fmt::Display for PatternLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PatternLanguage {
    type Err = SignalError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Self::En),
            "de" => Ok(Self::De),
            "both" => Ok(Self::Both),
            _ => Err(SignalError::InvalidSelector(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;

    #[test]
    fn parses_known_selectors() {
        assert_eq!("en".parse::<PatternLanguage>().unwrap(), PatternLanguage::En);
        assert_eq!("de".parse::<PatternLanguage>().unwrap(), PatternLanguage::De);
        assert_eq!(
            "both".parse::<PatternLanguage>().unwrap(),
            PatternLanguage::Both
        );
    }

    #[test]
    fn parse_is_case_and_whitespace_tolerant() {
        assert_eq!(" EN ".parse::<PatternLanguage>().unwrap(), PatternLanguage::En);
        assert_eq!("Both".parse::<PatternLanguage>().unwrap(), PatternLanguage::Both);
    }

    #[test]
    fn unknown_selector_is_invalid() {
        let err = "fr".parse::<PatternLanguage>().unwrap_err();
        assert!(matches!(err, SignalError::InvalidSelector(ref s) if s == "fr"));
    }

    #[test]
    fn empty_selector_is_invalid() {
        assert!(matches!(
            "".parse::<PatternLanguage>(),
            Err(SignalError::InvalidSelector(_))
        ));
    }

    #[test]
    fn display_matches_parse() {
        for &lang in PatternLanguage::all() {
            assert_eq!(lang.to_string().parse::<PatternLanguage>().unwrap(), lang);
        }
    }

    #[test]
    fn both_expands_english_first() {
        assert_eq!(
            PatternLanguage::Both.languages(),
            &[PatternLanguage::En, PatternLanguage::De]
        );
        assert_eq!(PatternLanguage::En.languages(), &[PatternLanguage::En]);
        assert_eq!(PatternLanguage::De.languages(), &[PatternLanguage::De]);
    }

    #[test]
    fn default_is_both() {
        assert_eq!(PatternLanguage::default(), PatternLanguage::Both);
    }
}
