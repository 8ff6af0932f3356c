//! Keyword classifier.
//!
//! Rules are evaluated in order and the first rule with any keyword
//! contained in the lower-cased text wins. Matching is raw substring
//! containment, not word matching.

use tracing::info;

use crate::types::document::{Classification, DocType};

/// A keyword rule mapping to a label and a fixed confidence.
pub struct ClassificationRule {
    pub keywords: &'static [&'static str],
    pub doc_type: DocType,
    pub confidence: f64,
}

impl ClassificationRule {
    fn matches(&self, text_lower: &str) -> bool {
        self.keywords.iter().any(|k| text_lower.contains(k))
    }
}

/// Ordered classification rules. First match wins.
pub const RULES: &[ClassificationRule] = &[
    ClassificationRule {
        keywords: &["invoice", "bill", "payment due"],
        doc_type: DocType::Invoice,
        confidence: 0.95,
    },
    ClassificationRule {
        keywords: &["contract", "agreement", "terms and conditions"],
        doc_type: DocType::Contract,
        confidence: 0.90,
    },
    ClassificationRule {
        keywords: &["report", "analysis", "findings", "summary"],
        doc_type: DocType::Report,
        confidence: 0.85,
    },
    ClassificationRule {
        keywords: &["proposal", "quotation", "estimate"],
        doc_type: DocType::Proposal,
        confidence: 0.88,
    },
];

/// Confidence when no rule matches.
pub const FALLBACK_CONFIDENCE: f64 = 0.70;

/// Classify a document. Always returns a label.
pub fn classify(text: &str) -> Classification {
    let text_lower = text.to_lowercase();

    let classification = RULES
        .iter()
        .find(|rule| rule.matches(&text_lower))
        .map(|rule| Classification::new(rule.doc_type, rule.confidence))
        .unwrap_or_else(|| Classification::new(DocType::GeneralDocument, FALLBACK_CONFIDENCE));

    info!(
        doc_type = %classification.doc_type,
        confidence = classification.confidence,
        "Classified document"
    );
    classification
}
