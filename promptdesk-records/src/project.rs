//! Projects and their declared architecture

use serde::{Deserialize, Serialize};

/// Lifecycle status of a project
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    /// Under active development
    #[default]
    Active,
    /// On hold
    Paused,
    /// Finished
    Done,
}

/// A person attached to a project
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Contact {
    pub name: String,
    pub role: Option<String>,
    pub phone: Option<String>,
    pub wechat: Option<String>,
    pub email: Option<String>,
    pub notes: Option<String>,
}

/// A project and the architecture attributes standards are matched against
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    pub id: String,
    pub name: String,
    /// Kind of product, e.g. "admin console" or "mini program"
    pub category: String,
    pub frontend_stack: String,
    pub backend_stack: String,
    pub description: Option<String>,
    pub summary: Option<String>,
    pub business_value: Option<String>,

    pub frontend_framework: Option<String>,
    pub backend_framework: Option<String>,
    pub frontend_language: Option<String>,
    pub backend_language: Option<String>,
    pub db_type: Option<String>,
    pub api_style: Option<String>,
    pub repo_layout_notes: Option<String>,

    pub git_url: Option<String>,
    pub git_notes: Option<String>,

    pub contacts: Vec<Contact>,
    pub status: ProjectStatus,
    pub tags: Vec<String>,

    pub created_at: i64,
    pub updated_at: i64,
}

impl Project {
    /// Create a project with the given id and name
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    /// Set the frontend framework
    pub fn with_frontend_framework(mut self, value: impl Into<String>) -> Self {
        self.frontend_framework = Some(value.into());
        self
    }

    /// Set the backend framework
    pub fn with_backend_framework(mut self, value: impl Into<String>) -> Self {
        self.backend_framework = Some(value.into());
        self
    }

    /// Set the frontend language
    pub fn with_frontend_language(mut self, value: impl Into<String>) -> Self {
        self.frontend_language = Some(value.into());
        self
    }

    /// Set the backend language
    pub fn with_backend_language(mut self, value: impl Into<String>) -> Self {
        self.backend_language = Some(value.into());
        self
    }

    /// Set the database type
    pub fn with_db_type(mut self, value: impl Into<String>) -> Self {
        self.db_type = Some(value.into());
        self
    }

    /// Set the API style
    pub fn with_api_style(mut self, value: impl Into<String>) -> Self {
        self.api_style = Some(value.into());
        self
    }
}
