//! Testing utilities including a recording pattern sink and sample documents.
//!
//! Useful for testing applications built on the pipeline without
//! inspecting the default memory bank.

use std::sync::{Arc, PoisonError, RwLock};

use crate::traits::store::PatternSink;
use crate::types::{document::DocType, result::PatternSummary};

/// A pattern sink that records every call for assertions.
#[derive(Default, Clone)]
pub struct RecordingSink {
    calls: Arc<RwLock<Vec<(DocType, PatternSummary)>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every stored pattern in call order.
    pub fn recorded(&self) -> Vec<(DocType, PatternSummary)> {
        self.calls
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl PatternSink for RecordingSink {
    fn store_pattern(&self, doc_type: DocType, pattern: PatternSummary) {
        self.calls
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push((doc_type, pattern));
    }
}

/// Sample invoice used by the demo and tests.
pub const SAMPLE_INVOICE: &str = "
INVOICE
Invoice Number: INV-2025-001
Date: November 25, 2025
Due Date: December 15, 2025

From: Global Solutions Inc
To: Acme Corp

Description: Professional Services - Q4 2025
Amount: $15,000.00
Tax: $2,500.00
Total: $17,500.00

Payment Terms: Net 30 days
Reference: PO-45678

Please remit payment to the address below.
";

/// Sample service agreement used by the demo and tests.
pub const SAMPLE_CONTRACT: &str = "
SERVICE AGREEMENT

This agreement is entered into on November 25, 2025
between Tech Innovations LLC and Enterprise Solutions Corp

Terms and Conditions:
- Contract Value: $125,000
- Duration: 12 months
- Payment Schedule: Quarterly
- Reference: CONTRACT-2025-Q4-089

This is a new vendor relationship requiring compliance review.
URGENT: Signature required by December 1, 2025
";

/// `(document_id, text)` pairs for the demo run.
pub fn sample_documents() -> Vec<(&'static str, &'static str)> {
    vec![("DOC001", SAMPLE_INVOICE), ("DOC002", SAMPLE_CONTRACT)]
}
