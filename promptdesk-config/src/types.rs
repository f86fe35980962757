//! Configuration value types

use crate::error::{ConfigError, ConfigResult};
use promptdesk_common::{DEFAULT_MAX_LINES, GLOBAL_PROJECT_ID};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Language used for the fixed wording of generated documents
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English wording
    #[default]
    En,
    /// Simplified Chinese wording
    Zh,
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::En => write!(f, "en"),
            Locale::Zh => write!(f, "zh"),
        }
    }
}

impl FromStr for Locale {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(Locale::En),
            "zh" | "zh-cn" | "chinese" => Ok(Locale::Zh),
            other => Err(ConfigError::invalid_value(
                "locale",
                format!("unknown locale '{}' (expected 'en' or 'zh')", other),
            )),
        }
    }
}

/// Settings that shape document generation and export
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptDeskConfig {
    /// Wording catalog for placeholders and sub-headings
    pub locale: Locale,
    /// Line threshold above which merged output is split into parts
    pub max_lines_per_part: usize,
    /// Project id whose standards form the shared global library
    pub global_project_id: String,
    /// File stem used when naming exported parts
    pub export_stem: String,
}

impl Default for PromptDeskConfig {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            max_lines_per_part: DEFAULT_MAX_LINES,
            global_project_id: GLOBAL_PROJECT_ID.to_string(),
            export_stem: "build-merged".to_string(),
        }
    }
}

impl PromptDeskConfig {
    /// Reject values the rest of the system cannot work with
    pub fn validate(&self) -> ConfigResult<()> {
        if self.max_lines_per_part == 0 {
            return Err(ConfigError::invalid_value(
                "max_lines_per_part",
                "must be at least 1",
            ));
        }
        if self.global_project_id.trim().is_empty() {
            return Err(ConfigError::invalid_value(
                "global_project_id",
                "must not be empty",
            ));
        }
        if self.export_stem.trim().is_empty() {
            return Err(ConfigError::invalid_value(
                "export_stem",
                "must not be empty",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PromptDeskConfig::default();
        assert_eq!(config.locale, Locale::En);
        assert_eq!(config.max_lines_per_part, 500);
        assert_eq!(config.global_project_id, "global");
        assert_eq!(config.export_stem, "build-merged");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_lines() {
        let config = PromptDeskConfig {
            max_lines_per_part: 0,
            ..PromptDeskConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("max_lines_per_part"));
    }

    #[test]
    fn test_locale_parse() {
        assert_eq!("ZH".parse::<Locale>().unwrap(), Locale::Zh);
        assert_eq!("en".parse::<Locale>().unwrap(), Locale::En);
        assert!("fr".parse::<Locale>().is_err());
        assert_eq!(Locale::Zh.to_string(), "zh");
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: PromptDeskConfig =
            serde_json::from_str(r#"{"locale":"zh"}"#).unwrap();
        assert_eq!(config.locale, Locale::Zh);
        assert_eq!(config.max_lines_per_part, 500);
    }
}
