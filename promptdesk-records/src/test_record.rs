//! Manual test records

use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of a manual test
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Conclusion {
    Pass,
    Fail,
    Blocked,
    #[default]
    Unknown,
}

impl fmt::Display for Conclusion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Conclusion::Pass => write!(f, "pass"),
            Conclusion::Fail => write!(f, "fail"),
            Conclusion::Blocked => write!(f, "blocked"),
            Conclusion::Unknown => write!(f, "unknown"),
        }
    }
}

/// Feedback captured from one manual test run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TestRecord {
    pub id: String,
    pub project_id: String,
    pub title: String,
    pub module_id: Option<String>,
    pub related_change_id: Option<String>,
    /// Tester's feedback, verbatim
    pub feedback_raw: String,
    pub conclusion: Conclusion,
    pub follow_up_actions: Vec<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl TestRecord {
    /// Create a test record with the given id, title and conclusion
    pub fn new(id: impl Into<String>, title: impl Into<String>, conclusion: Conclusion) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            conclusion,
            ..Self::default()
        }
    }

    /// Set the verbatim feedback
    pub fn with_feedback(mut self, feedback: impl Into<String>) -> Self {
        self.feedback_raw = feedback.into();
        self
    }

    /// Set the follow-up actions
    pub fn with_follow_ups(mut self, actions: &[&str]) -> Self {
        self.follow_up_actions = actions.iter().map(|s| s.to_string()).collect();
        self
    }
}
