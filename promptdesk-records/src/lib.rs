//! # PromptDesk Records
//!
//! The data model behind PromptDesk: projects and their architecture,
//! modules, standards, change-log entries, manual test records, prompts with
//! revision history, templates and saved builds.
//!
//! Records serialize with camelCase keys so a JSON backup exported by the
//! browser tool can be read directly with [`Snapshot::load`].
//!
//! ```
//! use promptdesk_records::{Snapshot, StandardLevel};
//!
//! let snapshot = Snapshot::from_json(r#"{
//!     "standards": [
//!         {"id": "s1", "projectId": "global", "title": "Reply in markdown",
//!          "scope": "prompting", "level": "must"}
//!     ]
//! }"#).unwrap();
//!
//! let standard = snapshot.standard("s1").unwrap();
//! assert_eq!(standard.level, Some(StandardLevel::Must));
//! ```

pub mod build;
pub mod change;
pub mod error;
pub mod module;
pub mod project;
pub mod prompt;
pub mod snapshot;
pub mod standard;
pub mod template;
pub mod test_record;

pub use build::BuildRecord;
pub use change::{Change, ChangeType, DbChecklist};
pub use error::{RecordsError, Result};
pub use module::Module;
pub use project::{Contact, Project, ProjectStatus};
pub use prompt::{Prompt, PromptRevision};
pub use snapshot::{Snapshot, SnapshotMeta};
pub use standard::{AppliesTo, Standard, StandardLevel, StandardScope, TriggerScenario};
pub use template::{Block, BlockKey, Template};
pub use test_record::{Conclusion, TestRecord};
