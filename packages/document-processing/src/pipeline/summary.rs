//! Templated executive summary.

use tracing::info;

use crate::types::{action::ActionItem, document::DocumentMetadata};

const CLOSING: &str = " The document has been categorized for appropriate workflow routing.";

/// Generate an executive summary paragraph.
pub fn generate_summary(metadata: &DocumentMetadata, action_items: &[ActionItem]) -> String {
    let doc_type = metadata.doc_type.as_str().to_lowercase();

    let parties = match metadata.parties.as_slice() {
        [] => String::new(),
        [only] => format!(" from {}", only),
        [first, second, ..] => format!(" involving {} and {}", first, second),
    };

    let financial = if metadata.amounts.is_empty() {
        String::new()
    } else {
        let shown: Vec<&str> = metadata.amounts.iter().take(2).map(String::as_str).collect();
        format!(" Key financial values include {}.", shown.join(", "))
    };

    let dates = metadata
        .dates
        .first()
        .map(|d| format!(" Important dates: {}.", d))
        .unwrap_or_default();

    let high_priority = action_items.iter().filter(|a| a.is_high_priority()).count();
    let actions = if high_priority > 0 {
        format!(
            " {} high-priority actions require immediate attention.",
            high_priority
        )
    } else {
        String::new()
    };

    let summary = format!(
        "This {doc_type}{parties} has been processed and classified.{financial}{dates}{actions}{CLOSING}"
    );

    info!(chars = summary.chars().count(), "Generated summary");
    summary
}
