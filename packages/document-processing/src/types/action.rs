//! Action items derived from a document.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Urgency of an action item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        })
    }
}

/// A follow-up task for a team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionItem {
    pub priority: Priority,
    pub action: String,
    pub assignee: String,
    pub due_date: Option<String>,
}

impl ActionItem {
    pub fn new(priority: Priority, action: impl Into<String>, assignee: impl Into<String>) -> Self {
        Self {
            priority,
            action: action.into(),
            assignee: assignee.into(),
            due_date: None,
        }
    }

    /// Set the due date.
    pub fn with_due_date(mut self, due_date: impl Into<String>) -> Self {
        self.due_date = Some(due_date.into());
        self
    }

    pub fn is_high_priority(&self) -> bool {
        self.priority == Priority::High
    }
}
