//! Change-log entries

use promptdesk_common::to_lines;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of a change
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeType {
    #[default]
    Feature,
    Fix,
    CreateTable,
    AlterTable,
    Doc,
    Refactor,
}

impl ChangeType {
    /// Whether the change creates or alters a database table
    pub fn touches_schema(self) -> bool {
        matches!(self, ChangeType::CreateTable | ChangeType::AlterTable)
    }
}

impl fmt::Display for ChangeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ChangeType::Feature => "feature",
            ChangeType::Fix => "fix",
            ChangeType::CreateTable => "create_table",
            ChangeType::AlterTable => "alter_table",
            ChangeType::Doc => "doc",
            ChangeType::Refactor => "refactor",
        };
        f.write_str(name)
    }
}

/// Audit-column checklist for schema changes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DbChecklist {
    pub has_create_time: bool,
    pub has_update_time: bool,
    pub has_create_by: bool,
    pub has_update_by: bool,
    /// Junction tables are allowed to skip the audit columns
    pub is_junction_table: bool,
    pub notes: Option<String>,
}

/// One entry in a project's change log
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Change {
    pub id: String,
    pub project_id: String,
    pub title: String,
    pub module_id: Option<String>,
    #[serde(rename = "type")]
    pub change_type: ChangeType,
    pub summary_items: Vec<String>,
    pub problems_solved_items: Vec<String>,
    pub affected_files: Vec<String>,
    pub affected_fields: Vec<String>,
    pub affected_apis: Vec<String>,
    pub db_checklist: Option<DbChecklist>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl Change {
    /// Create a change with the given id, title and category
    pub fn new(id: impl Into<String>, title: impl Into<String>, change_type: ChangeType) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            change_type,
            ..Self::default()
        }
    }

    /// Set the summary and problems-solved bullet lists
    pub fn with_items(mut self, summary: &[&str], solved: &[&str]) -> Self {
        self.summary_items = summary.iter().map(|s| s.to_string()).collect();
        self.problems_solved_items = solved.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Set both bullet lists from free text, one item per line
    ///
    /// Lines are trimmed and blank lines dropped.
    pub fn with_items_text(mut self, summary: &str, solved: &str) -> Self {
        self.summary_items = to_lines(summary);
        self.problems_solved_items = to_lines(solved);
        self
    }

    /// Set affected files, fields and APIs
    pub fn with_refs(mut self, files: &[&str], fields: &[&str], apis: &[&str]) -> Self {
        self.affected_files = files.iter().map(|s| s.to_string()).collect();
        self.affected_fields = fields.iter().map(|s| s.to_string()).collect();
        self.affected_apis = apis.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Attach a DB checklist
    pub fn with_db_checklist(mut self, checklist: DbChecklist) -> Self {
        self.db_checklist = Some(checklist);
        self
    }
}
