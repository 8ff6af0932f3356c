//! Extraction stage - assembles structured metadata from raw text.

use tracing::info;

use crate::extractors::{extract_amounts, extract_dates, extract_parties, extract_references};
use crate::types::{
    config::PipelineConfig,
    document::{DocType, DocumentMetadata},
    session::{Session, StateKey},
};

/// Extract all key information from a document.
///
/// The label and confidence come from the session. If classification has
/// not populated it yet they default to `Unknown` and `0.0`.
pub fn extract_metadata(text: &str, session: &Session, config: &PipelineConfig) -> DocumentMetadata {
    let doc_type = session
        .get_state::<DocType>(StateKey::DocType)
        .unwrap_or(DocType::Unknown);
    let confidence = session
        .get_state::<f64>(StateKey::Confidence)
        .unwrap_or(0.0);

    let dates = extract_dates(text);
    let amounts = extract_amounts(text);
    let references = extract_references(text);
    let parties = extract_parties(text);

    info!(
        dates = dates.len(),
        amounts = amounts.len(),
        parties = parties.len(),
        references = references.len(),
        "Extracted fields"
    );

    let cap = config.max_field_entries;
    DocumentMetadata {
        doc_type,
        confidence,
        dates: truncated(dates, cap),
        amounts: truncated(amounts, cap),
        parties: truncated(parties, cap),
        references: truncated(references, cap),
    }
}

fn truncated(mut values: Vec<String>, cap: usize) -> Vec<String> {
    values.truncate(cap);
    values
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classified_session(doc_type: DocType, confidence: f64) -> Session {
        let mut session = Session::new("session_test");
        session.update_state(StateKey::DocType, &doc_type).unwrap();
        session.update_state(StateKey::Confidence, &confidence).unwrap();
        session
    }

    #[test]
    fn test_reads_classification_from_session() {
        let session = classified_session(DocType::Invoice, 0.95);
        let metadata = extract_metadata(
            "Total: $17,500.00 due 2025-12-15 from Acme Corp, INV-42",
            &session,
            &PipelineConfig::default(),
        );

        assert_eq!(metadata.doc_type, DocType::Invoice);
        assert_eq!(metadata.confidence, 0.95);
        assert_eq!(metadata.dates, vec!["2025-12-15"]);
        assert_eq!(metadata.amounts, vec!["$17,500.00"]);
        assert_eq!(metadata.references, vec!["REF-42"]);
        assert_eq!(metadata.parties, vec!["2025-12-15 from Acme Corp,"]);
    }

    #[test]
    fn test_missing_session_state_defaults() {
        let session = Session::new("session_empty");
        let metadata = extract_metadata("nothing here", &session, &PipelineConfig::default());

        assert_eq!(metadata.doc_type, DocType::Unknown);
        assert_eq!(metadata.confidence, 0.0);
        assert_eq!(metadata.populated_fields(), 0);
    }

    #[test]
    fn test_lists_are_capped() {
        let text = (1..=9)
            .map(|i| format!("2025-01-0{i} ${i}00 INV-{i} Company{i} Ltd"))
            .collect::<Vec<_>>()
            .join("\n");
        let session = classified_session(DocType::Invoice, 0.95);

        let metadata = extract_metadata(&text, &session, &PipelineConfig::default());
        assert_eq!(metadata.dates.len(), 5);
        assert_eq!(metadata.amounts.len(), 5);
        assert_eq!(metadata.references.len(), 5);
        assert_eq!(metadata.parties.len(), 5);
        assert_eq!(metadata.dates[0], "2025-01-01");
        assert_eq!(metadata.amounts[4], "$500");

        let narrow = PipelineConfig::default().with_max_field_entries(2);
        let metadata = extract_metadata(&text, &session, &narrow);
        assert_eq!(metadata.dates, vec!["2025-01-01", "2025-01-02"]);
    }
}
