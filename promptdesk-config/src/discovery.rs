//! Configuration file discovery
//!
//! Looks for `promptdesk.{toml,yaml,yml,json}` in the global directory
//! (`~/.promptdesk/`) and the project directory (`./.promptdesk/`). Project
//! files take precedence over global ones.

use std::path::{Path, PathBuf};
use tracing::{debug, trace, warn};

/// Directory name used for both the global and the project configuration
pub const CONFIG_DIR_NAME: &str = ".promptdesk";

/// Base file name of configuration files
pub const CONFIG_FILE_STEM: &str = "promptdesk";

/// Represents a discovered configuration file with metadata
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigFile {
    /// Full path to the configuration file
    pub path: PathBuf,
    /// Detected format of the file
    pub format: ConfigFormat,
    /// Where the file was found
    pub scope: ConfigScope,
}

/// Configuration file format detected from file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// TOML format (.toml extension)
    Toml,
    /// YAML format (.yaml or .yml extensions)
    Yaml,
    /// JSON format (.json extension)
    Json,
}

impl ConfigFormat {
    /// Detect format from file extension
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "toml" => Some(Self::Toml),
            "yaml" | "yml" => Some(Self::Yaml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Configuration scope indicating where the file was discovered
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ConfigScope {
    /// Global configuration from ~/.promptdesk/
    Global,
    /// Project configuration from ./.promptdesk/
    Project,
}

/// File discovery service for finding configuration files
#[derive(Debug, Clone, Default)]
pub struct FileDiscovery {
    project_dir: Option<PathBuf>,
    global_dir: Option<PathBuf>,
}

impl FileDiscovery {
    /// Discovery rooted at the home directory and the current directory
    pub fn new() -> Self {
        Self {
            project_dir: std::env::current_dir()
                .ok()
                .map(|dir| dir.join(CONFIG_DIR_NAME)),
            global_dir: dirs::home_dir().map(|dir| dir.join(CONFIG_DIR_NAME)),
        }
    }

    /// Discovery over explicit directories
    pub fn with_dirs(global_dir: Option<PathBuf>, project_dir: Option<PathBuf>) -> Self {
        Self {
            project_dir,
            global_dir,
        }
    }

    /// Discover all configuration files, lowest precedence first
    pub fn discover_all(&self) -> Vec<ConfigFile> {
        let mut files = Vec::new();

        if let Some(ref global_dir) = self.global_dir {
            files.extend(self.search_directory(global_dir, ConfigScope::Global));
        }
        if let Some(ref project_dir) = self.project_dir {
            files.extend(self.search_directory(project_dir, ConfigScope::Project));
        }

        debug!("Discovered {} configuration files", files.len());
        files
    }

    fn search_directory(&self, dir: &Path, scope: ConfigScope) -> Vec<ConfigFile> {
        if !dir.exists() {
            trace!("Directory does not exist: {}", dir.display());
            return Vec::new();
        }

        if !dir.is_dir() {
            warn!("Path exists but is not a directory: {}", dir.display());
            return Vec::new();
        }

        ["toml", "yaml", "yml", "json"]
            .iter()
            .map(|ext| dir.join(format!("{}.{}", CONFIG_FILE_STEM, ext)))
            .filter(|candidate| candidate.is_file())
            .filter_map(|path| {
                let format = ConfigFormat::from_extension(path.extension()?.to_str()?)?;
                trace!("Found config: {} ({:?})", path.display(), format);
                Some(ConfigFile {
                    path,
                    format,
                    scope,
                })
            })
            .collect()
    }
}
