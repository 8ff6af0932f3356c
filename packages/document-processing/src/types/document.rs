//! Document types - classification labels and extracted metadata.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Label assigned to a document by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocType {
    Invoice,
    Contract,
    Report,
    Proposal,

    /// None of the keyword rules matched.
    #[serde(rename = "General Document")]
    GeneralDocument,

    /// Extraction ran without a classification in the session.
    Unknown,
}

impl DocType {
    /// Human-readable label, e.g. `"General Document"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Invoice => "Invoice",
            Self::Contract => "Contract",
            Self::Report => "Report",
            Self::Proposal => "Proposal",
            Self::GeneralDocument => "General Document",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for DocType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output of the classification stage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub doc_type: DocType,

    /// Fixed per-rule score in 0.0..=1.0, not a calibrated probability.
    pub confidence: f64,
}

impl Classification {
    pub fn new(doc_type: DocType, confidence: f64) -> Self {
        Self {
            doc_type,
            confidence,
        }
    }
}

/// Structured fields extracted from a document.
///
/// Every list is capped at the configured entry limit and keeps
/// extraction order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    pub doc_type: DocType,
    pub confidence: f64,
    pub dates: Vec<String>,
    pub amounts: Vec<String>,
    pub parties: Vec<String>,
    pub references: Vec<String>,
}

impl DocumentMetadata {
    /// Create metadata with empty field lists.
    pub fn new(doc_type: DocType, confidence: f64) -> Self {
        Self {
            doc_type,
            confidence,
            dates: vec![],
            amounts: vec![],
            parties: vec![],
            references: vec![],
        }
    }

    /// Set extracted dates.
    pub fn with_dates(mut self, dates: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.dates = dates.into_iter().map(Into::into).collect();
        self
    }

    /// Set extracted amounts.
    pub fn with_amounts(mut self, amounts: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.amounts = amounts.into_iter().map(Into::into).collect();
        self
    }

    /// Set extracted parties.
    pub fn with_parties(mut self, parties: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.parties = parties.into_iter().map(Into::into).collect();
        self
    }

    /// Set extracted references.
    pub fn with_references(
        mut self,
        references: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.references = references.into_iter().map(Into::into).collect();
        self
    }

    /// Number of the four field lists that found anything.
    pub fn populated_fields(&self) -> usize {
        [
            &self.dates,
            &self.amounts,
            &self.parties,
            &self.references,
        ]
        .iter()
        .filter(|field| !field.is_empty())
        .count()
    }

    /// Dates plus amounts, as recorded in the pattern store.
    pub fn entities_found(&self) -> usize {
        self.dates.len() + self.amounts.len()
    }
}
