//! Coding, API, DB, security and prompting standards
//!
//! # Example
//!
//! ```
//! use promptdesk_records::{StandardLevel, StandardScope};
//!
//! assert_eq!(StandardScope::Prompting.to_string(), "prompting");
//! let level: StandardLevel = "MUST".parse().unwrap();
//! assert_eq!(level, StandardLevel::Must);
//! ```

use promptdesk_common::from_lines;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Applicability category of a standard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StandardScope {
    General,
    Code,
    Ui,
    Naming,
    Api,
    Db,
    Security,
    Testing,
    Git,
    /// Rules about how generated prompts themselves must be written
    Prompting,
}

impl StandardScope {
    /// Every scope, in display order
    pub const ALL: [StandardScope; 10] = [
        StandardScope::General,
        StandardScope::Code,
        StandardScope::Ui,
        StandardScope::Naming,
        StandardScope::Api,
        StandardScope::Db,
        StandardScope::Security,
        StandardScope::Testing,
        StandardScope::Git,
        StandardScope::Prompting,
    ];

    /// Stable lowercase name
    pub fn as_str(self) -> &'static str {
        match self {
            StandardScope::General => "general",
            StandardScope::Code => "code",
            StandardScope::Ui => "ui",
            StandardScope::Naming => "naming",
            StandardScope::Api => "api",
            StandardScope::Db => "db",
            StandardScope::Security => "security",
            StandardScope::Testing => "testing",
            StandardScope::Git => "git",
            StandardScope::Prompting => "prompting",
        }
    }
}

impl fmt::Display for StandardScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StandardScope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        StandardScope::ALL
            .into_iter()
            .find(|scope| scope.as_str() == lower)
            .ok_or_else(|| format!("Invalid standard scope: {}", s))
    }
}

/// Enforcement strength of a standard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StandardLevel {
    /// Mandatory
    Must,
    /// Recommended
    Should,
    /// Nice to have
    Optional,
}

impl fmt::Display for StandardLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StandardLevel::Must => write!(f, "must"),
            StandardLevel::Should => write!(f, "should"),
            StandardLevel::Optional => write!(f, "optional"),
        }
    }
}

impl FromStr for StandardLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "must" => Ok(StandardLevel::Must),
            "should" => Ok(StandardLevel::Should),
            "optional" => Ok(StandardLevel::Optional),
            _ => Err(format!("Invalid standard level: {}", s)),
        }
    }
}

/// Situations in which a standard is meant to be applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriggerScenario {
    NewFeature,
    Bugfix,
    CreateTable,
    AlterTable,
    NewApi,
    Refactor,
    Doc,
    Export,
    SecurityChange,
}

/// Structured filter describing which project architectures a standard targets
///
/// An empty list leaves that dimension unrestricted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppliesTo {
    pub frontend_frameworks: Vec<String>,
    pub backend_frameworks: Vec<String>,
    pub languages: Vec<String>,
    pub db_types: Vec<String>,
    pub api_styles: Vec<String>,
    pub only_when: Vec<TriggerScenario>,
}

/// A named rule with optional applicability filter, checklist and body text
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Standard {
    pub id: String,
    pub project_id: String,
    pub title: String,
    pub tags: Vec<String>,
    pub summary: String,
    pub scope: Option<StandardScope>,
    pub level: Option<StandardLevel>,
    pub applies_to: Option<AppliesTo>,
    pub checklist_items: Vec<String>,
    /// Typed rule parameters keyed by scope (api, db, security, ui)
    pub rules: Option<serde_json::Value>,
    /// Body text stored in line-bounded chunks
    pub content_chunks: Vec<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl Standard {
    /// Create a standard with the given id and title
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            ..Self::default()
        }
    }

    /// Set the owning project
    pub fn with_project(mut self, project_id: impl Into<String>) -> Self {
        self.project_id = project_id.into();
        self
    }

    /// Set the scope
    pub fn with_scope(mut self, scope: StandardScope) -> Self {
        self.scope = Some(scope);
        self
    }

    /// Set the level
    pub fn with_level(mut self, level: StandardLevel) -> Self {
        self.level = Some(level);
        self
    }

    /// Set the summary line
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = summary.into();
        self
    }

    /// Set the applicability filter
    pub fn with_applies_to(mut self, applies_to: AppliesTo) -> Self {
        self.applies_to = Some(applies_to);
        self
    }

    /// Set the checklist
    pub fn with_checklist(mut self, items: &[&str]) -> Self {
        self.checklist_items = items.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Set the body chunks
    pub fn with_chunks(mut self, chunks: &[&str]) -> Self {
        self.content_chunks = chunks.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Full body text: the chunks joined with newlines
    pub fn body(&self) -> String {
        from_lines(&self.content_chunks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_round_trip_through_str() {
        for scope in StandardScope::ALL {
            assert_eq!(scope.to_string().parse::<StandardScope>().unwrap(), scope);
        }
        assert!("frontend".parse::<StandardScope>().is_err());
    }

    #[test]
    fn test_level_parse_is_case_insensitive() {
        assert_eq!("Should".parse::<StandardLevel>().unwrap(), StandardLevel::Should);
        assert!("required".parse::<StandardLevel>().is_err());
    }

    #[test]
    fn test_deserialize_backup_shape() {
        let json = r#"{
            "id": "std_1",
            "projectId": "global",
            "title": "Answer format",
            "tags": [],
            "summary": "",
            "scope": "prompting",
            "level": "must",
            "appliesTo": {"dbTypes": ["mysql"], "onlyWhen": ["create_table"]},
            "checklistItems": ["Use markdown"],
            "contentChunks": ["line one", "line two"],
            "createdAt": 1,
            "updatedAt": 2
        }"#;
        let standard: Standard = serde_json::from_str(json).unwrap();

        assert_eq!(standard.scope, Some(StandardScope::Prompting));
        assert_eq!(standard.level, Some(StandardLevel::Must));
        let applies = standard.applies_to.as_ref().unwrap();
        assert_eq!(applies.db_types, vec!["mysql"]);
        assert!(applies.languages.is_empty());
        assert_eq!(applies.only_when, vec![TriggerScenario::CreateTable]);
        assert_eq!(standard.body(), "line one\nline two");
    }

    #[test]
    fn test_missing_optional_fields_default() {
        let standard: Standard =
            serde_json::from_str(r#"{"id": "s", "title": "Plain"}"#).unwrap();
        assert!(standard.scope.is_none());
        assert!(standard.applies_to.is_none());
        assert!(standard.content_chunks.is_empty());
    }
}
