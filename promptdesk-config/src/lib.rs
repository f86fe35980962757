//! PromptDesk configuration management using Figment
//!
//! # Configuration Files
//!
//! - Global: `~/.promptdesk/promptdesk.{toml,yaml,yml,json}`
//! - Project: `./.promptdesk/promptdesk.{toml,yaml,yml,json}`
//!
//! Environment variables prefixed with `PROMPTDESK_` override file values,
//! for example `PROMPTDESK_LOCALE=zh` or `PROMPTDESK_MAX_LINES_PER_PART=800`.
//!
//! ## Example TOML Configuration
//!
//! ```toml
//! locale = "en"
//! max_lines_per_part = 500
//! global_project_id = "global"
//! export_stem = "build-merged"
//! ```

pub mod discovery;
pub mod error;
pub mod loader;
pub mod types;

pub use discovery::{ConfigFile, ConfigFormat, ConfigScope, FileDiscovery};
pub use error::{ConfigError, ConfigResult};
pub use loader::{load_configuration, ConfigLoader, ENV_PREFIX};
pub use types::{Locale, PromptDeskConfig};
