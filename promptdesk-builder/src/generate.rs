//! Turn a selection of record ids into a saved build

use crate::error::{BuilderError, Result};
use crate::labels::Labels;
use crate::render::{build_markdown, BuildInput, BuildResult};
use chrono::{DateTime, Utc};
use promptdesk_common::{generate_id, Pretty};
use promptdesk_records::{BuildRecord, Snapshot};
use serde::{Deserialize, Serialize};

/// Ids an author picked for one document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BuildSelection {
    pub template_id: String,
    pub module_id: Option<String>,
    pub change_ids: Vec<String>,
    pub test_ids: Vec<String>,
    pub standard_ids: Vec<String>,
}

impl BuildSelection {
    /// Select a template and nothing else
    pub fn new(template_id: impl Into<String>) -> Self {
        Self {
            template_id: template_id.into(),
            ..Self::default()
        }
    }

    pub fn with_module(mut self, module_id: impl Into<String>) -> Self {
        self.module_id = Some(module_id.into());
        self
    }

    pub fn with_changes(mut self, change_ids: Vec<String>) -> Self {
        self.change_ids = change_ids;
        self
    }

    pub fn with_tests(mut self, test_ids: Vec<String>) -> Self {
        self.test_ids = test_ids;
        self
    }

    pub fn with_standards(mut self, standard_ids: Vec<String>) -> Self {
        self.standard_ids = standard_ids;
        self
    }

    /// Look every selected id up in `snapshot`
    ///
    /// Records keep selection order. Standards owned by `global_project_id`
    /// are attached as the global library. Any unknown id is an error.
    pub fn resolve(&self, snapshot: &Snapshot, global_project_id: &str) -> Result<BuildInput> {
        tracing::debug!("Resolving selection: {}", Pretty(self));

        let template = snapshot
            .template(&self.template_id)
            .ok_or_else(|| BuilderError::TemplateNotFound {
                id: self.template_id.clone(),
            })?
            .clone();

        let module = match &self.module_id {
            Some(id) => Some(
                snapshot
                    .module(id)
                    .cloned()
                    .ok_or_else(|| BuilderError::missing("Module", id))?,
            ),
            None => None,
        };

        let changes = self
            .change_ids
            .iter()
            .map(|id| {
                snapshot
                    .change(id)
                    .cloned()
                    .ok_or_else(|| BuilderError::missing("Change", id))
            })
            .collect::<Result<Vec<_>>>()?;

        let tests = self
            .test_ids
            .iter()
            .map(|id| {
                snapshot
                    .test(id)
                    .cloned()
                    .ok_or_else(|| BuilderError::missing("Test", id))
            })
            .collect::<Result<Vec<_>>>()?;

        let standards = self
            .standard_ids
            .iter()
            .map(|id| {
                snapshot
                    .standard(id)
                    .cloned()
                    .ok_or_else(|| BuilderError::missing("Standard", id))
            })
            .collect::<Result<Vec<_>>>()?;

        let mut input = BuildInput::new(template)
            .with_changes(changes)
            .with_tests(tests)
            .with_standards(standards)
            .with_global_standards(snapshot.global_standards(global_project_id));
        input.module = module;
        Ok(input)
    }
}

/// A rendered document and the build record describing it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedBuild {
    pub result: BuildResult,
    pub record: BuildRecord,
}

/// Render `input` and describe it as a new build made at `now`
pub fn generate_build(
    selection: &BuildSelection,
    input: &BuildInput,
    labels: &Labels,
    now: DateTime<Utc>,
) -> GeneratedBuild {
    let result = build_markdown(input, labels);

    let record = BuildRecord {
        id: generate_id("bld"),
        project_id: input.template.project_id.clone(),
        title: now.format("build-%Y-%m-%d %H:%M:%S").to_string(),
        module_id: selection.module_id.clone(),
        change_ids: selection.change_ids.clone(),
        test_ids: selection.test_ids.clone(),
        standard_ids: selection.standard_ids.clone(),
        template_id: Some(selection.template_id.clone()),
        output_markdown: result.merged_markdown.clone(),
        created_at: now.timestamp_millis(),
    };

    tracing::info!("Generated build {} ({})", record.id, record.title);
    GeneratedBuild { result, record }
}
