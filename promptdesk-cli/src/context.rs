//! Per-invocation settings shared by every command

use anyhow::{Context, Result};
use promptdesk_builder::Labels;
use promptdesk_config::{load_configuration, ConfigLoader, Locale, PromptDeskConfig};
use std::path::Path;

/// Resolved configuration plus the wording catalog it selects
#[derive(Debug, Clone)]
pub struct CliContext {
    pub config: PromptDeskConfig,
    pub labels: Labels,
}

impl CliContext {
    /// Wrap an already loaded configuration
    pub fn new(config: PromptDeskConfig) -> Self {
        let labels = Labels::for_locale(config.locale);
        Self { config, labels }
    }

    /// Load configuration from `config_file`, or by discovery when absent
    ///
    /// A `locale` override replaces whatever the configuration says.
    pub fn load(config_file: Option<&Path>, locale: Option<Locale>) -> Result<Self> {
        let mut config = match config_file {
            Some(path) => ConfigLoader::load_file(path)
                .with_context(|| format!("failed to load config from {}", path.display()))?,
            None => load_configuration().context("failed to load configuration")?,
        };
        if let Some(locale) = locale {
            config.locale = locale;
        }
        Ok(Self::new(config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_follow_locale() {
        let config = PromptDeskConfig {
            locale: Locale::Zh,
            ..PromptDeskConfig::default()
        };
        assert_eq!(CliContext::new(config).labels, Labels::chinese());
    }
}
