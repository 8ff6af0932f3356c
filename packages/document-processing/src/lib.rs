//! Deterministic Document Processing Pipeline
//!
//! Classifies short business documents (invoices, contracts, reports,
//! proposals) with keyword rules, extracts dates, amounts, parties, and
//! reference numbers with patterns, then derives action items, a summary,
//! and risk findings from fixed rules.
//!
//! # Usage
//!
//! ```rust,ignore
//! use document_processing::{Evaluator, Orchestrator};
//!
//! let orchestrator = Orchestrator::new();
//! let result = orchestrator.process_document(text, Some("DOC001"))?;
//!
//! let mut evaluator = Evaluator::new();
//! evaluator.evaluate(&result);
//! println!("{:?}", evaluator.report());
//! ```
//!
//! # Modules
//!
//! - [`types`] - Metadata, action items, risks, sessions, results
//! - [`extractors`] - Pattern scanners for fields and parties
//! - [`pipeline`] - The five stages and the orchestrator
//! - [`stores`] - In-memory session store and pattern memory bank
//! - [`traits`] - The pattern sink interface
//! - [`evaluation`] - Observational metrics over results
//! - [`testing`] - Recording sink and sample documents

pub mod error;
pub mod evaluation;
pub mod extractors;
pub mod pipeline;
pub mod stores;
pub mod testing;
pub mod traits;
pub mod types;

// Re-export core types at crate root
pub use error::{AmountParseError, PipelineError, Result};
pub use evaluation::{EvaluationReport, Evaluator};
pub use traits::store::PatternSink;
pub use types::{
    action::{ActionItem, Priority},
    config::PipelineConfig,
    document::{Classification, DocType, DocumentMetadata},
    result::{PatternSummary, ProcessingResult, ResultPayload},
    risk::{RiskAssessment, RiskLevel},
    session::{HistoryEntry, Session, StateKey},
};

// Re-export pipeline components
pub use pipeline::{
    assess_risks, classify, extract_metadata, generate_summary, identify_actions, Orchestrator,
    Stage,
};

// Re-export stores
pub use stores::{MemoryBank, SessionStore};

// Re-export extractors
pub use extractors::{
    extract_amounts, extract_dates, extract_parties, extract_references, parse_amount,
};

// Re-export testing utilities
pub use testing::RecordingSink;
