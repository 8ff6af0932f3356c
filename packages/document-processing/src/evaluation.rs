//! Evaluation of pipeline runs.
//!
//! Purely observational: results are scored after the fact and nothing
//! feeds back into the pipeline.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::types::result::ProcessingResult;

/// Metric fields tracked for completeness scoring.
const TRACKED_FIELDS: f64 = 4.0;

/// Running metrics over a stream of results.
#[derive(Debug, Clone, Default)]
pub struct Evaluator {
    total_processed: usize,
    avg_processing_time_ms: f64,
    completeness_sum: f64,
}

/// Snapshot of evaluation metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationReport {
    pub total_documents: usize,
    pub avg_processing_time_ms: f64,
    pub avg_extraction_completeness: f64,
}

impl Evaluator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Score a result and fold it into the running metrics.
    ///
    /// Returns the completeness score of this result: the fraction of
    /// dates, amounts, parties, and references that found anything.
    pub fn evaluate(&mut self, result: &ProcessingResult) -> f64 {
        self.total_processed += 1;

        let n = self.total_processed as f64;
        self.avg_processing_time_ms +=
            (result.processing_time_ms as f64 - self.avg_processing_time_ms) / n;

        let completeness = result.metadata.populated_fields() as f64 / TRACKED_FIELDS;
        self.completeness_sum += completeness;

        info!(
            completeness,
            time_ms = result.processing_time_ms,
            "Evaluated result"
        );
        completeness
    }

    pub fn total_processed(&self) -> usize {
        self.total_processed
    }

    /// Averages rounded to two decimals; zero when nothing was evaluated.
    pub fn report(&self) -> EvaluationReport {
        let avg_completeness = if self.total_processed == 0 {
            0.0
        } else {
            self.completeness_sum / self.total_processed as f64
        };

        EvaluationReport {
            total_documents: self.total_processed,
            avg_processing_time_ms: round2(self.avg_processing_time_ms),
            avg_extraction_completeness: round2(avg_completeness),
        }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
