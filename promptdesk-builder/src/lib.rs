//! # PromptDesk Builder
//!
//! Assembles a template's blocks and the author's selected module, changes,
//! test records and standards into one markdown document.
//!
//! - [`build_markdown`] renders a [`BuildInput`] into per-block markdown and
//!   a merged document. It is pure and cannot fail.
//! - [`BuildSelection::resolve`] turns record ids into a [`BuildInput`].
//! - [`generate_build`] renders and describes the result as a new build.
//! - [`plan_export`] names the files for a line-bounded export.
//!
//! ```
//! use promptdesk_builder::{build_markdown, BuildInput, Labels};
//! use promptdesk_records::{Block, Template};
//!
//! let template = Template::new("tpl", "Handoff")
//!     .with_blocks(vec![Block::new("background", "Background").with_content("Fix checkout")]);
//! let result = build_markdown(&BuildInput::new(template), &Labels::english());
//!
//! assert!(result.merged_markdown.starts_with("## Background\n\nFix checkout\n\n- Goal:"));
//! assert!(result.merged_markdown.ends_with(".\n"));
//! ```

pub mod error;
pub mod export;
pub mod generate;
pub mod labels;
pub mod render;

pub use error::{BuilderError, Result};
pub use export::{block_file_name, plan_export, ExportPart};
pub use generate::{generate_build, BuildSelection, GeneratedBuild};
pub use labels::Labels;
pub use render::{build_markdown, BlockResult, BuildInput, BuildResult};
