//! Configuration for the document pipeline.

use serde::{Deserialize, Serialize};

/// Configuration for the document processing pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Maximum entries kept per metadata list (dates, amounts, parties, references).
    ///
    /// Default: 5.
    pub max_field_entries: usize,

    /// Largest amount above which a transaction is flagged High risk.
    ///
    /// Default: 50,000.
    pub high_value_threshold: f64,

    /// Largest amount above which a commitment is flagged Medium risk.
    ///
    /// Default: 10,000.
    pub significant_value_threshold: f64,

    /// Characters of a state value kept in a session history entry.
    ///
    /// Default: 100.
    pub history_value_limit: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            max_field_entries: 5,
            high_value_threshold: 50_000.0,
            significant_value_threshold: 10_000.0,
            history_value_limit: 100,
        }
    }
}

impl PipelineConfig {
    /// Create a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the per-field entry cap.
    pub fn with_max_field_entries(mut self, max: usize) -> Self {
        self.max_field_entries = max;
        self
    }

    /// Set the High risk amount threshold.
    pub fn with_high_value_threshold(mut self, threshold: f64) -> Self {
        self.high_value_threshold = threshold;
        self
    }

    /// Set the Medium risk amount threshold.
    pub fn with_significant_value_threshold(mut self, threshold: f64) -> Self {
        self.significant_value_threshold = threshold;
        self
    }

    /// Set how much of each state value is kept in session history.
    pub fn with_history_value_limit(mut self, limit: usize) -> Self {
        self.history_value_limit = limit;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PipelineConfig::default();
        assert_eq!(config.max_field_entries, 5);
        assert_eq!(config.high_value_threshold, 50_000.0);
        assert_eq!(config.significant_value_threshold, 10_000.0);
        assert_eq!(config.history_value_limit, 100);
    }

    #[test]
    fn test_builders() {
        let config = PipelineConfig::new()
            .with_max_field_entries(3)
            .with_high_value_threshold(1_000.0)
            .with_significant_value_threshold(100.0)
            .with_history_value_limit(10);

        assert_eq!(config.max_field_entries, 3);
        assert_eq!(config.high_value_threshold, 1_000.0);
        assert_eq!(config.significant_value_threshold, 100.0);
        assert_eq!(config.history_value_limit, 10);
    }
}
