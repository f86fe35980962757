//! # PromptDesk Standards
//!
//! Decides which standards apply to a project and provides the collection
//! operations used when assembling documents: the mandatory prompting
//! filter, by-id deduplication, copying the global library into a project
//! and chunking long bodies.
//!
//! ```
//! use promptdesk_records::{AppliesTo, Project, Standard};
//! use promptdesk_standards::standard_matches_project;
//!
//! let project = Project::new("p1", "Shop").with_db_type("mysql");
//! let standard = Standard::new("s1", "Audit columns").with_applies_to(AppliesTo {
//!     db_types: vec!["MySQL".to_string()],
//!     ..AppliesTo::default()
//! });
//!
//! assert!(standard_matches_project(&standard, Some(&project)));
//! ```

pub mod collection;
pub mod filter;
pub mod matcher;

pub use collection::{
    chunk_content, copy_global_standards_to_project, dedupe_by_id, is_prompting_must,
    prompting_must, CopyOutcome,
};
pub use filter::StandardFilter;
pub use matcher::{matching_standards, standard_matches_project};
