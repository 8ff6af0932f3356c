//! Final pipeline output and the per-run pattern summary.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::{
    action::ActionItem,
    document::{DocType, DocumentMetadata},
    risk::{RiskAssessment, RiskLevel},
};

/// Everything the pipeline learned about one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessingResult {
    pub document_id: String,
    pub timestamp: DateTime<Utc>,
    pub metadata: DocumentMetadata,
    pub action_items: Vec<ActionItem>,
    pub summary: String,
    pub risks: Vec<RiskAssessment>,

    /// Wall-clock duration of the run, truncated to whole milliseconds
    pub processing_time_ms: u64,
}

impl ProcessingResult {
    /// Highest risk level found in this run.
    pub fn max_risk_level(&self) -> RiskLevel {
        crate::types::risk::max_risk_level(&self.risks).unwrap_or(RiskLevel::Low)
    }

    /// Flat view for tool callers.
    pub fn to_payload(&self) -> ResultPayload {
        ResultPayload {
            document_id: self.document_id.clone(),
            doc_type: self.metadata.doc_type,
            confidence: self.metadata.confidence,
            dates: self.metadata.dates.clone(),
            amounts: self.metadata.amounts.clone(),
            parties: self.metadata.parties.clone(),
            references: self.metadata.references.clone(),
            summary: self.summary.clone(),
            action_items: self.action_items.clone(),
            risks: self.risks.clone(),
            processing_time_ms: self.processing_time_ms,
        }
    }

    /// Pretty-printed JSON of [`ResultPayload`].
    pub fn to_payload_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.to_payload())?)
    }
}

/// Flattened result shape handed to agents and other tool callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultPayload {
    pub document_id: String,
    pub doc_type: DocType,
    pub confidence: f64,
    pub dates: Vec<String>,
    pub amounts: Vec<String>,
    pub parties: Vec<String>,
    pub references: Vec<String>,
    pub summary: String,
    pub action_items: Vec<ActionItem>,
    pub risks: Vec<RiskAssessment>,
    pub processing_time_ms: u64,
}

/// Coarse outcome of a run, appended to the long-term pattern store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternSummary {
    /// Dates plus amounts kept in the metadata
    pub entities_found: usize,
    pub action_count: usize,
    pub risk_level: RiskLevel,
}

impl PatternSummary {
    pub fn from_result(result: &ProcessingResult) -> Self {
        Self {
            entities_found: result.metadata.entities_found(),
            action_count: result.action_items.len(),
            risk_level: result.max_risk_level(),
        }
    }
}
