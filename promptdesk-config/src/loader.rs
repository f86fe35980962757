//! Configuration loading using Figment
//!
//! Sources are merged in precedence order, later ones overriding earlier:
//! 1. Built-in defaults
//! 2. Global configuration file
//! 3. Project configuration file
//! 4. `PROMPTDESK_` environment variables
//!
//! Nothing is cached; every call reads the sources again.

use crate::discovery::{ConfigFile, ConfigFormat, FileDiscovery};
use crate::error::ConfigResult;
use crate::types::PromptDeskConfig;
use figment::{
    providers::{Env, Format, Json, Serialized, Toml, Yaml},
    Figment,
};
use std::path::Path;
use tracing::{debug, info, trace};

/// Prefix for environment variable overrides
pub const ENV_PREFIX: &str = "PROMPTDESK_";

/// Loads [`PromptDeskConfig`] from defaults, files and the environment
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    discovery: FileDiscovery,
    use_env: bool,
}

impl ConfigLoader {
    /// Loader using the standard global and project directories
    pub fn new() -> Self {
        Self {
            discovery: FileDiscovery::new(),
            use_env: true,
        }
    }

    /// Loader using a custom discovery
    pub fn with_discovery(discovery: FileDiscovery) -> Self {
        Self {
            discovery,
            use_env: true,
        }
    }

    /// Skip environment variable overrides
    pub fn without_env(mut self) -> Self {
        self.use_env = false;
        self
    }

    /// Load, merge and validate the configuration
    pub fn load(&self) -> ConfigResult<PromptDeskConfig> {
        let config: PromptDeskConfig = self.build_figment().extract()?;
        config.validate()?;
        info!(
            locale = %config.locale,
            max_lines_per_part = config.max_lines_per_part,
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Load configuration from one explicit file layered over the defaults
    pub fn load_file(path: &Path) -> ConfigResult<PromptDeskConfig> {
        if !path.is_file() {
            return Err(crate::ConfigError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default();
        let format = ConfigFormat::from_extension(extension).ok_or_else(|| {
            crate::ConfigError::UnsupportedFormat {
                format: extension.to_string(),
            }
        })?;

        let config: PromptDeskConfig = Figment::from(Serialized::defaults(
            PromptDeskConfig::default(),
        ))
        .merge(file_provider(path, format))
        .extract()?;
        config.validate()?;
        Ok(config)
    }

    fn build_figment(&self) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(PromptDeskConfig::default()));

        for file in self.discovery.discover_all() {
            figment = figment.merge(load_config_file(&file));
        }

        if self.use_env {
            debug!("Merging {}* environment variables", ENV_PREFIX);
            figment = figment.merge(Env::prefixed(ENV_PREFIX));
        }

        figment
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

fn load_config_file(file: &ConfigFile) -> Figment {
    trace!(
        "Loading config file: {} ({:?})",
        file.path.display(),
        file.format
    );
    file_provider(&file.path, file.format)
}

fn file_provider(path: &Path, format: ConfigFormat) -> Figment {
    match format {
        ConfigFormat::Toml => Figment::from(Toml::file(path)),
        ConfigFormat::Yaml => Figment::from(Yaml::file(path)),
        ConfigFormat::Json => Figment::from(Json::file(path)),
    }
}

/// Load configuration from the standard locations and the environment
pub fn load_configuration() -> ConfigResult<PromptDeskConfig> {
    ConfigLoader::new().load()
}
