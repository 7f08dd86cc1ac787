//! @ai:module:intent Tunable limits, default phrases and validation thresholds
//! @ai:module:layer infrastructure
//! @ai:module:public_api GeneratorConfig, ListLimits, DefaultPhrases, ValidationThresholds
//! @ai:module:stateless true

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

const FALLBACK_NAME: &str = "This student";

/// @ai:intent Complete configuration for comment generation and validation
/// @ai:effects pure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub limits: ListLimits,
    pub defaults: DefaultPhrases,
    pub validation: ValidationThresholds,
}

/// @ai:intent How many list items are kept when parsing and when rendering
///
/// `*_parsed` bounds what the normalizer keeps; `*_shown` bounds what a
/// sentence actually mentions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListLimits {
    pub strengths_parsed: usize,
    pub strengths_shown: usize,
    pub weaknesses_parsed: usize,
    pub weaknesses_shown: usize,
    pub topics_kept: usize,
    pub topics_shown: usize,
    pub subjects_shown: usize,
}

/// @ai:intent Phrases substituted when the caller supplied nothing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultPhrases {
    pub name: String,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub topics: Vec<String>,
    pub subjects: Vec<String>,
}

/// @ai:intent Heuristic constants used by the quality validator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationThresholds {
    /// Word count that earns full length points.
    pub min_words: usize,
    /// Word count that earns partial length points.
    pub acceptable_words: usize,
    pub good_name_mentions: usize,
    /// Leading characters of a strength/weakness that must appear in the comment.
    pub match_prefix_chars: usize,
    pub pass_score: u8,
}

impl Default for ListLimits {
    fn default() -> Self {
        Self {
            strengths_parsed: 4,
            strengths_shown: 3,
            weaknesses_parsed: 3,
            weaknesses_shown: 2,
            topics_kept: 5,
            topics_shown: 4,
            subjects_shown: 3,
        }
    }
}

impl Default for DefaultPhrases {
    fn default() -> Self {
        Self {
            name: FALLBACK_NAME.to_string(),
            strengths: vec![
                "classroom engagement".to_string(),
                "positive attitude".to_string(),
            ],
            weaknesses: vec!["continued skill development".to_string()],
            topics: vec!["foundational skills".to_string()],
            subjects: vec!["general learning".to_string()],
        }
    }
}

impl Default for ValidationThresholds {
    fn default() -> Self {
        Self {
            min_words: 80,
            acceptable_words: 60,
            good_name_mentions: 3,
            match_prefix_chars: 6,
            pass_score: 70,
        }
    }
}

impl DefaultPhrases {
    /// @ai:intent Name used when the student has none; never blank
    /// @ai:effects pure
    pub fn fallback_name(&self) -> &str {
        match self.name.trim() {
            "" => FALLBACK_NAME,
            name => name,
        }
    }
}

impl GeneratorConfig {
    /// @ai:intent Parse a configuration from TOML text; missing keys take defaults
    /// @ai:post the result passes `validate`
    /// @ai:effects pure
    pub fn from_toml_str(content: &str) -> std::result::Result<Self, String> {
        let config: Self = toml::from_str(content).map_err(|e| e.to_string())?;
        config.validate()?;
        Ok(config)
    }

    /// @ai:intent Reject settings that would break the always-defaulted guarantees
    /// @ai:edge_cases blank fallback name, empty default lists, zero parse limits
    /// @ai:effects pure
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.defaults.name.trim().is_empty() {
            return Err("defaults.name must not be empty".to_string());
        }

        let lists = [
            ("defaults.strengths", &self.defaults.strengths),
            ("defaults.weaknesses", &self.defaults.weaknesses),
            ("defaults.topics", &self.defaults.topics),
            ("defaults.subjects", &self.defaults.subjects),
        ];
        for (key, items) in lists {
            if items.iter().all(|item| item.trim().is_empty()) {
                return Err(format!("{} needs at least one non-empty phrase", key));
            }
        }

        let limits = [
            ("limits.strengths_parsed", self.limits.strengths_parsed),
            ("limits.strengths_shown", self.limits.strengths_shown),
            ("limits.weaknesses_parsed", self.limits.weaknesses_parsed),
            ("limits.weaknesses_shown", self.limits.weaknesses_shown),
            ("limits.topics_kept", self.limits.topics_kept),
            ("limits.topics_shown", self.limits.topics_shown),
            ("limits.subjects_shown", self.limits.subjects_shown),
        ];
        for (key, value) in limits {
            if value == 0 {
                return Err(format!("{} must be at least 1", key));
            }
        }

        Ok(())
    }

    /// @ai:intent Load a configuration file
    /// @ai:effects fs:read
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::from_toml_str(&content).map_err(|e| Error::Config {
            path: path.to_path_buf(),
            message: e,
        })
    }

    /// @ai:intent Render the configuration as TOML
    /// @ai:effects pure
    pub fn to_toml_string(&self) -> String {
        toml::to_string_pretty(self).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_yields_defaults() {
        let config = GeneratorConfig::from_toml_str("").unwrap();
        assert_eq!(config, GeneratorConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config = GeneratorConfig::from_toml_str(
            r#"
[validation]
min_words = 50

[defaults]
name = "Our friend"
"#,
        )
        .unwrap();

        assert_eq!(config.validation.min_words, 50);
        assert_eq!(config.validation.acceptable_words, 60);
        assert_eq!(config.defaults.name, "Our friend");
        assert_eq!(config.limits, ListLimits::default());
    }

    #[test]
    fn test_toml_round_trip_of_defaults() {
        let rendered = GeneratorConfig::default().to_toml_string();
        let parsed = GeneratorConfig::from_toml_str(&rendered).unwrap();
        assert_eq!(parsed, GeneratorConfig::default());
    }

    #[test]
    fn test_fallback_name_never_blank() {
        let mut defaults = DefaultPhrases::default();
        assert_eq!(defaults.fallback_name(), "This student");
        defaults.name = "   ".to_string();
        assert_eq!(defaults.fallback_name(), "This student");
        defaults.name = " Our friend ".to_string();
        assert_eq!(defaults.fallback_name(), "Our friend");
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(GeneratorConfig::default().validate().is_ok());
    }

    #[test]
    fn test_blank_fallback_name_rejected() {
        let err = GeneratorConfig::from_toml_str("[defaults]\nname = \"  \"").unwrap_err();
        assert!(err.contains("defaults.name"), "{err}");
    }

    #[test]
    fn test_empty_default_lists_rejected() {
        for key in ["strengths", "weaknesses", "topics", "subjects"] {
            let toml = format!("[defaults]\n{} = []", key);
            let err = GeneratorConfig::from_toml_str(&toml).unwrap_err();
            assert!(err.contains(&format!("defaults.{}", key)), "{err}");
        }

        let err = GeneratorConfig::from_toml_str("[defaults]\nstrengths = [\" \"]").unwrap_err();
        assert!(err.contains("defaults.strengths"), "{err}");
    }

    #[test]
    fn test_zero_limits_rejected() {
        for key in [
            "strengths_parsed",
            "weaknesses_parsed",
            "topics_kept",
            "subjects_shown",
            "strengths_shown",
        ] {
            let toml = format!("[limits]\n{} = 0", key);
            let err = GeneratorConfig::from_toml_str(&toml).unwrap_err();
            assert!(err.contains(&format!("limits.{}", key)), "{err}");
        }
    }

    #[test]
    fn test_load_reports_invalid_config() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("kcomment.toml");
        std::fs::write(&path, "[limits]\nstrengths_parsed = 0\n").unwrap();

        let err = GeneratorConfig::load(&path).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
        assert!(err.to_string().contains("strengths_parsed"));
    }

    #[test]
    fn test_load_missing_file() {
        let err = GeneratorConfig::load(Path::new("/nonexistent/kcomment.toml")).unwrap_err();
        assert!(matches!(err, Error::FileRead { .. }));
    }
}
