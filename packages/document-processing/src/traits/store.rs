//! Storage traits for the long-term pattern aggregate.

use crate::types::{document::DocType, result::PatternSummary};

/// Write-only sink for per-run outcome patterns.
///
/// The pipeline appends one pattern per completed run and never reads it
/// back. Implementations must not fail the caller; problems are theirs to
/// log.
pub trait PatternSink: Send + Sync {
    /// Record the outcome of a run, keyed by document type.
    fn store_pattern(&self, doc_type: DocType, pattern: PatternSummary);
}

impl<T: PatternSink + ?Sized> PatternSink for std::sync::Arc<T> {
    fn store_pattern(&self, doc_type: DocType, pattern: PatternSummary) {
        (**self).store_pattern(doc_type, pattern)
    }
}
