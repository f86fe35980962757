//! The full record set as exported by a backup
//!
//! A snapshot is read once and queried by id; nothing here mutates records
//! on disk.

use crate::error::{RecordsError, Result};
use crate::{BuildRecord, Change, Module, Project, Prompt, Standard, Template, TestRecord};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Backup metadata
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SnapshotMeta {
    pub schema_version: u32,
    pub last_backup_at: Option<i64>,
}

/// Every record of every kind
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Snapshot {
    pub meta: Option<SnapshotMeta>,
    pub projects: Vec<Project>,
    pub modules: Vec<Module>,
    pub standards: Vec<Standard>,
    pub changes: Vec<Change>,
    pub tests: Vec<TestRecord>,
    pub prompts: Vec<Prompt>,
    pub templates: Vec<Template>,
    pub builds: Vec<BuildRecord>,
}

impl Snapshot {
    /// Decode a JSON snapshot
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Decode a YAML snapshot
    pub fn from_yaml(text: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(text)?)
    }

    /// Read a snapshot file, choosing the decoder from the extension
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(RecordsError::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("")
            .to_lowercase();
        let text = std::fs::read_to_string(path)?;

        let snapshot = match extension.as_str() {
            "json" => Self::from_json(&text)?,
            "yaml" | "yml" => Self::from_yaml(&text)?,
            _ => return Err(RecordsError::UnsupportedFormat { format: extension }),
        };

        tracing::info!(
            "Loaded snapshot {}: {} projects, {} standards, {} templates",
            path.display(),
            snapshot.projects.len(),
            snapshot.standards.len(),
            snapshot.templates.len()
        );
        Ok(snapshot)
    }

    pub fn project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn module(&self, id: &str) -> Option<&Module> {
        self.modules.iter().find(|m| m.id == id)
    }

    pub fn standard(&self, id: &str) -> Option<&Standard> {
        self.standards.iter().find(|s| s.id == id)
    }

    pub fn change(&self, id: &str) -> Option<&Change> {
        self.changes.iter().find(|c| c.id == id)
    }

    pub fn test(&self, id: &str) -> Option<&TestRecord> {
        self.tests.iter().find(|t| t.id == id)
    }

    pub fn template(&self, id: &str) -> Option<&Template> {
        self.templates.iter().find(|t| t.id == id)
    }

    /// Standards owned by the shared library project
    pub fn global_standards(&self, global_project_id: &str) -> Vec<Standard> {
        self.standards_for_project(global_project_id)
    }

    /// Standards owned by one project, in stored order
    pub fn standards_for_project(&self, project_id: &str) -> Vec<Standard> {
        self.standards
            .iter()
            .filter(|s| s.project_id == project_id)
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookups_by_id() {
        let snapshot = Snapshot {
            modules: vec![Module::new("mod_a", "Orders")],
            standards: vec![
                Standard::new("s1", "Global rule").with_project("global"),
                Standard::new("s2", "Local rule").with_project("proj_1"),
            ],
            ..Snapshot::default()
        };

        assert_eq!(snapshot.module("mod_a").map(|m| m.name.as_str()), Some("Orders"));
        assert!(snapshot.module("mod_b").is_none());
        let global = snapshot.global_standards("global");
        assert_eq!(global.len(), 1);
        assert_eq!(global[0].id, "s1");
    }

    #[test]
    fn test_empty_object_is_empty_snapshot() {
        let snapshot = Snapshot::from_json("{}").unwrap();
        assert!(snapshot.meta.is_none());
        assert!(snapshot.templates.is_empty());
    }
}
