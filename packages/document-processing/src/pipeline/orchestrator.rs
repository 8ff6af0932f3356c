//! The Orchestrator - main entry point for processing documents.
//!
//! Runs six stages in a fixed order per document:
//!
//! `Classify → Extract → DeriveActions → Summarize → AssessRisk → Finalize`
//!
//! Each call gets its own [`Session`], threaded through the stages and
//! handed to the [`SessionStore`] only once the run has finished. Any error
//! aborts the run; nothing partial is returned or stored.

use std::fmt;
use std::time::Instant;

use chrono::Utc;
use tracing::{info, info_span};
use uuid::Uuid;

use crate::error::{PipelineError, Result};
use crate::pipeline::{
    actions::identify_actions, classify::classify, extract::extract_metadata,
    risk::assess_risks, summary::generate_summary,
};
use crate::stores::memory::{MemoryBank, SessionStore};
use crate::traits::store::PatternSink;
use crate::types::{
    config::PipelineConfig,
    result::{PatternSummary, ProcessingResult},
    session::{Session, StateKey},
};

/// Position of a run in the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Session created, nothing run yet
    Created,
    Classify,
    Extract,
    DeriveActions,
    Summarize,
    AssessRisk,
    Finalize,
}

impl Stage {
    /// The only stage allowed to follow this one.
    pub fn next(&self) -> Option<Stage> {
        match self {
            Self::Created => Some(Self::Classify),
            Self::Classify => Some(Self::Extract),
            Self::Extract => Some(Self::DeriveActions),
            Self::DeriveActions => Some(Self::Summarize),
            Self::Summarize => Some(Self::AssessRisk),
            Self::AssessRisk => Some(Self::Finalize),
            Self::Finalize => None,
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Created => "created",
            Self::Classify => "classify",
            Self::Extract => "extract",
            Self::DeriveActions => "derive_actions",
            Self::Summarize => "summarize",
            Self::AssessRisk => "assess_risk",
            Self::Finalize => "finalize",
        })
    }
}

/// A single in-flight run: its session and how far it has progressed.
struct PipelineRun {
    session: Session,
    stage: Stage,
}

impl PipelineRun {
    fn new(session: Session) -> Self {
        Self {
            session,
            stage: Stage::Created,
        }
    }

    /// Advance to `stage`, which must directly follow the current one.
    fn enter(&mut self, stage: Stage) -> Result<()> {
        if self.stage.next() != Some(stage) {
            return Err(PipelineError::StageOrder {
                current: self.stage,
                found: stage,
            });
        }
        self.stage = stage;
        tracing::debug!(stage = %stage, "Entering stage");
        Ok(())
    }
}

/// Coordinates the pipeline stages and owns the run-scoped stores.
///
/// # Example
///
/// ```rust,ignore
/// let orchestrator = Orchestrator::new();
/// let result = orchestrator.process_document(text, Some("DOC001"))?;
/// println!("{}: {}", result.metadata.doc_type, result.summary);
/// ```
pub struct Orchestrator<P: PatternSink = MemoryBank> {
    config: PipelineConfig,
    sessions: SessionStore,
    patterns: P,
}

impl Orchestrator<MemoryBank> {
    /// Create an orchestrator with default configuration and a fresh memory bank.
    pub fn new() -> Self {
        Self::with_config(MemoryBank::new(), PipelineConfig::default())
    }
}

impl Default for Orchestrator<MemoryBank> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: PatternSink> Orchestrator<P> {
    /// Create with a custom pattern sink and configuration.
    pub fn with_config(patterns: P, config: PipelineConfig) -> Self {
        info!("Orchestrator initialized");
        Self {
            config,
            sessions: SessionStore::new(),
            patterns,
        }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Sessions of completed runs.
    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    pub fn pattern_sink(&self) -> &P {
        &self.patterns
    }

    /// Run the full pipeline over one document.
    ///
    /// When `document_id` is `None` or empty a unique timestamp-derived id
    /// is generated.
    pub fn process_document(
        &self,
        text: &str,
        document_id: Option<&str>,
    ) -> Result<ProcessingResult> {
        let start = Instant::now();
        let document_id = match document_id {
            Some(id) if !id.is_empty() => id.to_string(),
            _ => generate_document_id(),
        };

        let span = info_span!("process_document", document_id = %document_id);
        let _guard = span.enter();
        info!("Starting document processing");

        let session = Session::new(format!("session_{}", document_id))
            .with_history_value_limit(self.config.history_value_limit);
        let mut run = PipelineRun::new(session);

        run.enter(Stage::Classify)?;
        let classification = classify(text);
        run.session
            .update_state(StateKey::DocType, &classification.doc_type)?;
        run.session
            .update_state(StateKey::Confidence, &classification.confidence)?;

        run.enter(Stage::Extract)?;
        let metadata = extract_metadata(text, &run.session, &self.config);
        run.session.update_state(StateKey::Metadata, &metadata)?;

        run.enter(Stage::DeriveActions)?;
        let action_items = identify_actions(&metadata, text);
        run.session
            .update_state(StateKey::ActionItems, &action_items)?;

        run.enter(Stage::Summarize)?;
        let summary = generate_summary(&metadata, &action_items);
        run.session.update_state(StateKey::Summary, &summary)?;

        run.enter(Stage::AssessRisk)?;
        let risks = assess_risks(&metadata, text, &self.config);
        run.session.update_state(StateKey::Risks, &risks)?;

        run.enter(Stage::Finalize)?;
        let elapsed = start.elapsed();
        let result = ProcessingResult {
            document_id,
            timestamp: Utc::now(),
            metadata,
            action_items,
            summary,
            risks,
            processing_time_ms: u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
        };

        self.patterns
            .store_pattern(result.metadata.doc_type, PatternSummary::from_result(&result));
        self.sessions.insert(run.session);

        info!(
            doc_type = %result.metadata.doc_type,
            elapsed_ms = elapsed.as_secs_f64() * 1000.0,
            "Processing complete"
        );
        Ok(result)
    }
}

/// `doc_<YYYYmmdd_HHMMSS>_<12 hex>`, unique per call.
fn generate_document_id() -> String {
    let uuid = Uuid::new_v4().simple().to_string();
    format!("doc_{}_{}", Utc::now().format("%Y%m%d_%H%M%S"), &uuid[..12])
}
