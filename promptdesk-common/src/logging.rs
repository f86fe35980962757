//! Logging utilities for PromptDesk
//!
//! This module provides utilities for formatting values inside log messages.

use serde::Serialize;
use std::fmt::Debug;

/// Wrapper for pretty-printing types in logs as YAML
///
/// Use this in tracing statements to format complex types as YAML with a
/// newline before the content:
///
/// ```ignore
/// use promptdesk_common::Pretty;
/// use tracing::debug;
///
/// debug!("Selection: {}", Pretty(&selection));
/// ```
///
/// Debug formatting is used as a fallback if YAML serialization fails.
pub struct Pretty<T>(pub T);

impl<T: Serialize + Debug> std::fmt::Display for Pretty<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match serde_yaml::to_string(&self.0) {
            Ok(yaml) => write!(f, "\n{}", yaml),
            Err(_) => write!(f, "\n{:#?}", self.0),
        }
    }
}

impl<T: Serialize + Debug> std::fmt::Debug for Pretty<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Serialize)]
    struct Sample {
        name: &'static str,
        count: u32,
    }

    #[test]
    fn test_pretty_renders_yaml_with_leading_newline() {
        let rendered = format!(
            "{}",
            Pretty(&Sample {
                name: "alpha",
                count: 2
            })
        );
        assert!(rendered.starts_with('\n'));
        assert!(rendered.contains("name: alpha"));
        assert!(rendered.contains("count: 2"));
    }
}
