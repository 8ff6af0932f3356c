//! Action item derivation.

use tracing::info;

use crate::types::{
    action::{ActionItem, Priority},
    document::{DocType, DocumentMetadata},
};

/// Markers that push an urgent item to the front of the list.
const URGENCY_MARKERS: &[&str] = &["urgent", "immediate"];

/// Identify action items based on document type and content.
///
/// Urgent items are inserted at the front; the archive item is always last.
pub fn identify_actions(metadata: &DocumentMetadata, text: &str) -> Vec<ActionItem> {
    let mut actions = Vec::new();
    let text_lower = text.to_lowercase();

    match metadata.doc_type {
        DocType::Invoice => {
            if let Some(due) = metadata.dates.first() {
                actions.push(
                    ActionItem::new(
                        Priority::High,
                        format!("Review and approve payment by {}", due),
                        "Finance Team",
                    )
                    .with_due_date(due.clone()),
                );
            }
            actions.push(ActionItem::new(
                Priority::Medium,
                "Update accounting system with invoice details",
                "Accounting",
            ));
        }
        DocType::Contract => {
            actions.push(ActionItem::new(
                Priority::High,
                "Legal review required before signing",
                "Legal Team",
            ));
            actions.push(ActionItem::new(
                Priority::Medium,
                "Negotiate terms if necessary",
                "Business Development",
            ));
        }
        _ => {}
    }

    if URGENCY_MARKERS.iter().any(|m| text_lower.contains(m)) {
        actions.insert(
            0,
            ActionItem::new(
                Priority::High,
                "URGENT: Immediate attention required",
                "Management",
            ),
        );
    }

    actions.push(ActionItem::new(
        Priority::Low,
        "Archive document in appropriate folder",
        "Admin",
    ));

    info!(count = actions.len(), "Identified action items");
    actions
}
