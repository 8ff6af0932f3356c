//! In-memory storage implementations.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use crate::traits::store::PatternSink;
use crate::types::{document::DocType, result::PatternSummary, session::Session};

/// Finished sessions, keyed by session id.
///
/// Runs build their session privately and hand it over once complete, so
/// concurrent runs never interleave writes into one session.
#[derive(Default)]
pub struct SessionStore {
    sessions: RwLock<HashMap<String, Session>>,
}

impl SessionStore {
    /// Create a new empty session store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a finished session, replacing any session with the same id.
    pub fn insert(&self, session: Session) {
        tracing::debug!(session_id = %session.id, "Stored session");
        self.sessions
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(session.id.clone(), session);
    }

    /// Get a copy of a stored session.
    pub fn get_session(&self, session_id: &str) -> Option<Session> {
        self.sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(session_id)
            .cloned()
    }

    /// Ids of every stored session, sorted.
    pub fn session_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self
            .sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect();
        ids.sort();
        ids
    }

    /// Get the number of stored sessions.
    pub fn len(&self) -> usize {
        self.sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Long-term memory of processing outcomes, grouped by document type.
///
/// Useful for observation and development. Data is lost on restart.
#[derive(Default)]
pub struct MemoryBank {
    patterns: RwLock<HashMap<DocType, Vec<PatternSummary>>>,
}

impl MemoryBank {
    /// Create a new empty memory bank.
    pub fn new() -> Self {
        Self::default()
    }

    /// Patterns recorded for a document type, oldest first.
    pub fn retrieve_patterns(&self, doc_type: DocType) -> Vec<PatternSummary> {
        self.patterns
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&doc_type)
            .cloned()
            .unwrap_or_default()
    }

    /// Total patterns across all document types.
    pub fn pattern_count(&self) -> usize {
        self.patterns
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .map(Vec::len)
            .sum()
    }
}

impl PatternSink for MemoryBank {
    fn store_pattern(&self, doc_type: DocType, pattern: PatternSummary) {
        self.patterns
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(doc_type)
            .or_default()
            .push(pattern);
        tracing::debug!(doc_type = %doc_type, "Stored pattern");
    }
}
