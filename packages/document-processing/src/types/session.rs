//! Session types - per-document state threaded between pipeline stages.

use std::fmt;

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{PipelineError, Result};

/// Keys a pipeline stage may write into a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StateKey {
    DocType,
    Confidence,
    Metadata,
    ActionItems,
    Summary,
    Risks,
}

impl StateKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DocType => "doc_type",
            Self::Confidence => "confidence",
            Self::Metadata => "metadata",
            Self::ActionItems => "action_items",
            Self::Summary => "summary",
            Self::Risks => "risks",
        }
    }
}

impl fmt::Display for StateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One recorded state mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub timestamp: DateTime<Utc>,

    /// e.g. `"Updated doc_type"`
    pub action: String,

    /// Rendered value, truncated to the session's history limit
    pub value: String,
}

/// Ephemeral state for a single document run.
///
/// A session is created per `process_document` call and never shared
/// between documents. `history` is append-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub id: String,
    pub created_at: DateTime<Utc>,
    state: IndexMap<StateKey, Value>,
    history: Vec<HistoryEntry>,
    #[serde(skip, default = "default_history_value_limit")]
    history_value_limit: usize,
}

fn default_history_value_limit() -> usize {
    100
}

impl Session {
    /// Create an empty session.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            created_at: Utc::now(),
            state: IndexMap::new(),
            history: vec![],
            history_value_limit: default_history_value_limit(),
        }
    }

    /// Set how many characters of each value are kept in history.
    pub fn with_history_value_limit(mut self, limit: usize) -> Self {
        self.history_value_limit = limit;
        self
    }

    /// Store a value under `key`, replacing any previous value, and log the
    /// mutation to history.
    pub fn update_state<T: Serialize + ?Sized>(&mut self, key: StateKey, value: &T) -> Result<()> {
        let value = serde_json::to_value(value)
            .map_err(|source| PipelineError::StateSerialization { key, source })?;

        let rendered = match &value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };

        self.history.push(HistoryEntry {
            timestamp: Utc::now(),
            action: format!("Updated {}", key),
            value: rendered.chars().take(self.history_value_limit).collect(),
        });
        self.state.insert(key, value);

        tracing::debug!(session_id = %self.id, key = %key, "Updated session state");
        Ok(())
    }

    /// Read a value back as `T`.
    ///
    /// Returns `None` if the key was never written or holds a different shape.
    pub fn get_state<T: DeserializeOwned>(&self, key: StateKey) -> Option<T> {
        self.state
            .get(&key)
            .and_then(|v| serde_json::from_value(v.clone()).ok())
    }

    /// Raw JSON value stored under `key`.
    pub fn state_value(&self, key: StateKey) -> Option<&Value> {
        self.state.get(&key)
    }

    /// Keys in the order they were first written.
    pub fn keys(&self) -> impl Iterator<Item = StateKey> + '_ {
        self.state.keys().copied()
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }
}
