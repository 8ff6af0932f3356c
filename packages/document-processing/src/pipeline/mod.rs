//! Document pipeline - the core of the library.
//!
//! The pipeline runs, in order:
//! - Classification (keyword rules)
//! - Field extraction into [`DocumentMetadata`](crate::types::document::DocumentMetadata)
//! - Action item derivation
//! - Summary generation
//! - Risk assessment

pub mod actions;
pub mod classify;
pub mod extract;
pub mod orchestrator;
pub mod risk;
pub mod summary;

pub use actions::identify_actions;
pub use classify::{classify, ClassificationRule, RULES};
pub use extract::extract_metadata;
pub use orchestrator::{Orchestrator, Stage};
pub use risk::assess_risks;
pub use summary::generate_summary;
