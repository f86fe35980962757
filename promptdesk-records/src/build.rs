//! Append-only build records

use serde::{Deserialize, Serialize};

/// One saved generation of a document
///
/// Builds are never edited; generating again creates a new record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BuildRecord {
    pub id: String,
    pub project_id: String,
    pub title: String,
    pub module_id: Option<String>,
    pub change_ids: Vec<String>,
    pub test_ids: Vec<String>,
    pub standard_ids: Vec<String>,
    pub template_id: Option<String>,
    pub output_markdown: String,
    pub created_at: i64,
}
