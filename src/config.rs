//! Configuration for the signal classifier.

use crate::error::{Result, SignalError};
use crate::language::PatternLanguage;
use crate::patterns::{PatternSet, get_patterns};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Top-level classifier configuration.
///
/// ```toml
/// language = "de"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignalsConfig {
    /// Which language's signal patterns apply. Defaults to both.
    pub language: PatternLanguage,
}

impl SignalsConfig {
    /// Parse configuration from TOML, falling back to defaults for missing fields.
    ///
    /// # Errors
    ///
    /// Returns [`SignalError::Config`] if the TOML is malformed or names an
    /// unknown language.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| SignalError::Config(e.to_string()))
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        debug!(path = %path.display(), language = %config.language, "loaded signals config");
        Ok(config)
    }

    /// Save configuration to a TOML file, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written or the config cannot be serialized.
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| SignalError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Pattern set for the configured language.
    pub fn patterns(&self) -> PatternSet {
        get_patterns(self.language)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;

    #[test]
    fn default_language_is_both() {
        assert_eq!(SignalsConfig::default().language, PatternLanguage::Both);
    }

    #[test]
    fn empty_toml_uses_defaults() {
        let config = SignalsConfig::from_toml_str("").unwrap();
        assert_eq!(config, SignalsConfig::default());
    }

    #[test]
    fn parses_language() {
        let config = SignalsConfig::from_toml_str(r#"language = "de""#).unwrap();
        assert_eq!(config.language, PatternLanguage::De);
        assert_eq!(config.patterns(), get_patterns(PatternLanguage::De));
    }

    #[test]
    fn unknown_language_is_config_error() {
        let err = SignalsConfig::from_toml_str(r#"language = "fr""#).unwrap_err();
        assert!(matches!(err, SignalError::Config(_)));
    }

    #[test]
    fn malformed_toml_is_config_error() {
        let err = SignalsConfig::from_toml_str("language = ").unwrap_err();
        assert!(matches!(err, SignalError::Config(_)));
    }

    #[test]
    fn file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("signals.toml");
        let config = SignalsConfig {
            language: PatternLanguage::En,
        };
        config.save_to_file(&path).unwrap();

        let loaded = SignalsConfig::from_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = SignalsConfig::from_file(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, SignalError::Io(_)));
    }
}
