//! Reusable modules and their cross-references

use serde::{Deserialize, Serialize};

/// A functional area of a project with the files, fields and APIs it touches
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Module {
    pub id: String,
    pub project_id: String,
    pub name: String,
    pub description: Option<String>,
    pub related_files: Vec<String>,
    pub related_fields: Vec<String>,
    pub related_apis: Vec<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl Module {
    /// Create a module with the given id and name
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set related files, fields and APIs
    pub fn with_refs(mut self, files: &[&str], fields: &[&str], apis: &[&str]) -> Self {
        self.related_files = files.iter().map(|s| s.to_string()).collect();
        self.related_fields = fields.iter().map(|s| s.to_string()).collect();
        self.related_apis = apis.iter().map(|s| s.to_string()).collect();
        self
    }
}
