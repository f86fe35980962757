//! Standard filtering by scope and level

use promptdesk_records::{Standard, StandardLevel, StandardScope};
use serde::{Deserialize, Serialize};

/// Filter criteria for selecting standards
///
/// Empty criteria match everything. A standard without a scope is treated
/// as [`StandardScope::General`] when filtering by scope; a standard without
/// a level never matches a level filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandardFilter {
    /// Scopes to include
    pub scopes: Vec<StandardScope>,
    /// Levels to include
    pub levels: Vec<StandardLevel>,
}

impl StandardFilter {
    /// Create a new empty filter
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a filter for specific scopes
    pub fn by_scopes(scopes: Vec<StandardScope>) -> Self {
        Self {
            scopes,
            ..Self::default()
        }
    }

    /// Set the level filter
    pub fn with_levels(mut self, levels: Vec<StandardLevel>) -> Self {
        self.levels = levels;
        self
    }

    /// Prompting standards that are mandatory
    pub fn prompting_must() -> Self {
        Self::by_scopes(vec![StandardScope::Prompting]).with_levels(vec![StandardLevel::Must])
    }

    /// Check if a standard matches the filter criteria
    pub fn matches(&self, standard: &Standard) -> bool {
        if !self.scopes.is_empty() {
            let scope = standard.scope.unwrap_or(StandardScope::General);
            if !self.scopes.contains(&scope) {
                return false;
            }
        }

        if !self.levels.is_empty() {
            match standard.level {
                Some(level) if self.levels.contains(&level) => {}
                _ => return false,
            }
        }

        true
    }

    /// Apply the filter to a list of standards
    pub fn apply<'a>(&self, standards: &'a [Standard]) -> Vec<&'a Standard> {
        standards.iter().filter(|s| self.matches(s)).collect()
    }

    /// Check if the filter is empty (matches everything)
    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty() && self.levels.is_empty()
    }
}
