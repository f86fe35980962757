//! Document templates made of ordered blocks
//!
//! # Example
//!
//! ```
//! use promptdesk_records::{BlockKey, Template};
//!
//! let template = Template::new("tpl_1", "Default").with_blocks(Template::default_blocks());
//! assert_eq!(template.blocks.len(), 8);
//! assert_eq!(template.blocks[0].key, BlockKey::Background);
//! assert_eq!(BlockKey::from("notes"), BlockKey::Custom("notes".to_string()));
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies what a block renders
///
/// Keys the builder knows are variants; anything else is kept verbatim as
/// [`BlockKey::Custom`] and rendered from the author's content alone.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BlockKey {
    Background,
    RelatedModules,
    RelatedRefs,
    ChangeSummary,
    DbChecklist,
    TestFeedback,
    Standards,
    Requirements,
    Custom(String),
}

impl BlockKey {
    /// Known keys in canonical template order
    pub const KNOWN: [BlockKey; 8] = [
        BlockKey::Background,
        BlockKey::RelatedModules,
        BlockKey::RelatedRefs,
        BlockKey::ChangeSummary,
        BlockKey::DbChecklist,
        BlockKey::TestFeedback,
        BlockKey::Standards,
        BlockKey::Requirements,
    ];

    /// Stable string form used in stored templates
    pub fn as_str(&self) -> &str {
        match self {
            BlockKey::Background => "background",
            BlockKey::RelatedModules => "relatedModules",
            BlockKey::RelatedRefs => "relatedRefs",
            BlockKey::ChangeSummary => "changeSummary",
            BlockKey::DbChecklist => "dbChecklist",
            BlockKey::TestFeedback => "testFeedback",
            BlockKey::Standards => "standards",
            BlockKey::Requirements => "requirements",
            BlockKey::Custom(key) => key,
        }
    }

    fn default_title(&self) -> &str {
        match self {
            BlockKey::Background => "1. Background / Goal",
            BlockKey::RelatedModules => "2. Related Modules",
            BlockKey::RelatedRefs => "3. Related Files / Fields / APIs",
            BlockKey::ChangeSummary => "4. Change Summary",
            BlockKey::DbChecklist => "5. DB Checklist",
            BlockKey::TestFeedback => "6. Test Feedback",
            BlockKey::Standards => "7. Standards",
            BlockKey::Requirements => "8. Prompt Checklist / Output Requirements",
            BlockKey::Custom(key) => key,
        }
    }
}

impl From<String> for BlockKey {
    fn from(key: String) -> Self {
        BlockKey::KNOWN
            .into_iter()
            .find(|known| known.as_str() == key)
            .unwrap_or(BlockKey::Custom(key))
    }
}

impl From<&str> for BlockKey {
    fn from(key: &str) -> Self {
        BlockKey::from(key.to_string())
    }
}

impl From<BlockKey> for String {
    fn from(key: BlockKey) -> Self {
        match key {
            BlockKey::Custom(key) => key,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for BlockKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One section of a template
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub key: BlockKey,
    pub title: String,
    pub enabled: bool,
    /// Author-written text; empty when unset
    #[serde(default)]
    pub content: String,
}

impl Block {
    /// Create an enabled block with empty content
    pub fn new(key: impl Into<BlockKey>, title: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            enabled: true,
            content: String::new(),
        }
    }

    /// Set the author content
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Disable the block
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }
}

/// An ordered list of blocks describing a document's layout
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Template {
    pub id: String,
    pub project_id: String,
    pub title: String,
    pub description: Option<String>,
    pub blocks: Vec<Block>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl Template {
    /// Create a template with no blocks
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            ..Self::default()
        }
    }

    /// Replace the blocks
    pub fn with_blocks(mut self, blocks: Vec<Block>) -> Self {
        self.blocks = blocks;
        self
    }

    /// The eight standard blocks, enabled and empty
    pub fn default_blocks() -> Vec<Block> {
        BlockKey::KNOWN
            .into_iter()
            .map(|key| {
                let title = key.default_title().to_string();
                Block::new(key, title)
            })
            .collect()
    }

    /// Find a block by key
    pub fn block(&self, key: &BlockKey) -> Option<&Block> {
        self.blocks.iter().find(|block| &block.key == key)
    }
}
