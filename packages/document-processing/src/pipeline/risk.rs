//! Risk assessment rules.
//!
//! Every rule is evaluated and appends when its condition holds. If none
//! fire, a single Low "standard document" finding is returned, so the
//! result is never empty.

use tracing::{info, warn};

use crate::error::AmountParseError;
use crate::extractors::parse_amount;
use crate::types::{
    config::PipelineConfig,
    document::{DocType, DocumentMetadata},
    risk::{RiskAssessment, RiskLevel},
};

const NEW_VENDOR_MARKERS: &[&str] = &["new vendor", "first time"];

/// Assess risks based on document content.
pub fn assess_risks(
    metadata: &DocumentMetadata,
    text: &str,
    config: &PipelineConfig,
) -> Vec<RiskAssessment> {
    let mut risks = Vec::new();
    let text_lower = text.to_lowercase();

    if !metadata.amounts.is_empty() {
        match max_amount(&metadata.amounts) {
            Ok(max) if max > config.high_value_threshold => risks.push(RiskAssessment::new(
                RiskLevel::High,
                "High-value transaction requiring additional approval",
                "Obtain executive approval before proceeding",
            )),
            Ok(max) if max > config.significant_value_threshold => {
                risks.push(RiskAssessment::new(
                    RiskLevel::Medium,
                    "Significant financial commitment",
                    "Verify budget allocation and obtain manager approval",
                ))
            }
            Ok(_) => {}
            Err(e) => warn!(error = %e, "Failed to parse monetary amounts for risk assessment"),
        }
    }

    if metadata.doc_type == DocType::Contract {
        risks.push(RiskAssessment::new(
            RiskLevel::Medium,
            "Legal agreement requiring compliance review",
            "Complete legal checklist and obtain signatory approval",
        ));
    }

    if !metadata.dates.is_empty() && text_lower.contains("urgent") {
        risks.push(RiskAssessment::new(
            RiskLevel::High,
            "Time-sensitive document with approaching deadline",
            "Fast-track through approval process",
        ));
    }

    if NEW_VENDOR_MARKERS.iter().any(|m| text_lower.contains(m)) {
        risks.push(RiskAssessment::new(
            RiskLevel::Medium,
            "New vendor relationship",
            "Complete vendor verification and due diligence",
        ));
    }

    if risks.is_empty() {
        risks.push(RiskAssessment::new(
            RiskLevel::Low,
            "Standard document with no unusual risk factors",
            "Proceed with normal approval workflow",
        ));
    }

    info!(count = risks.len(), "Identified risk factors");
    risks
}

/// Largest amount, failing if any single amount is unreadable.
fn max_amount(amounts: &[String]) -> Result<f64, AmountParseError> {
    amounts
        .iter()
        .map(|a| parse_amount(a))
        .try_fold(f64::MIN, |max, amount| amount.map(|a| max.max(a)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assess(metadata: &DocumentMetadata, text: &str) -> Vec<RiskAssessment> {
        assess_risks(metadata, text, &PipelineConfig::default())
    }

    fn levels(risks: &[RiskAssessment]) -> Vec<RiskLevel> {
        risks.iter().map(|r| r.level).collect()
    }

    #[test]
    fn test_high_value_amount() {
        let metadata =
            DocumentMetadata::new(DocType::Invoice, 0.95).with_amounts(["$500", "$125,000"]);
        let risks = assess(&metadata, "");

        assert_eq!(levels(&risks), vec![RiskLevel::High]);
        assert!(risks[0].description.starts_with("High-value transaction"));
    }

    #[test]
    fn test_significant_amount_between_thresholds() {
        let metadata = DocumentMetadata::new(DocType::Invoice, 0.95)
            .with_amounts(["$15,000.00", "$2,500.00", "$17,500.00"]);
        let risks = assess(&metadata, "");

        assert_eq!(levels(&risks), vec![RiskLevel::Medium]);
        assert_eq!(risks[0].description, "Significant financial commitment");
    }

    #[test]
    fn test_thresholds_are_strict() {
        let at_high = DocumentMetadata::new(DocType::Invoice, 0.95).with_amounts(["$50,000.00"]);
        assert_eq!(levels(&assess(&at_high, "")), vec![RiskLevel::Medium]);

        let at_significant =
            DocumentMetadata::new(DocType::Invoice, 0.95).with_amounts(["$10,000"]);
        assert_eq!(levels(&assess(&at_significant, "")), vec![RiskLevel::Low]);
    }

    #[test]
    fn test_unparseable_amount_skips_financial_rule() {
        let metadata =
            DocumentMetadata::new(DocType::Invoice, 0.95).with_amounts(["$99,999", "$,"]);
        let risks = assess(&metadata, "");

        assert_eq!(levels(&risks), vec![RiskLevel::Low]);
        assert_eq!(
            risks[0].description,
            "Standard document with no unusual risk factors"
        );
    }

    #[test]
    fn test_contract_and_new_vendor_order() {
        let metadata = DocumentMetadata::new(DocType::Contract, 0.9);
        let risks = assess(&metadata, "This is a NEW VENDOR relationship");

        let descriptions: Vec<_> = risks.iter().map(|r| r.description.as_str()).collect();
        assert_eq!(
            descriptions,
            vec![
                "Legal agreement requiring compliance review",
                "New vendor relationship"
            ]
        );
    }

    #[test]
    fn test_urgent_requires_dates() {
        let undated = DocumentMetadata::new(DocType::GeneralDocument, 0.7);
        assert_eq!(levels(&assess(&undated, "urgent")), vec![RiskLevel::Low]);

        let dated = undated.with_dates(["2025-12-01"]);
        let risks = assess(&dated, "Urgent reply");
        assert_eq!(levels(&risks), vec![RiskLevel::High]);
        assert!(risks[0].description.starts_with("Time-sensitive"));
    }

    #[test]
    fn test_all_rules_fire_in_order() {
        let metadata = DocumentMetadata::new(DocType::Contract, 0.9)
            .with_amounts(["$125,000"])
            .with_dates(["December 1, 2025"]);
        let risks = assess(&metadata, "URGENT first time engagement");

        assert_eq!(
            levels(&risks),
            vec![
                RiskLevel::High,
                RiskLevel::Medium,
                RiskLevel::High,
                RiskLevel::Medium
            ]
        );
    }

    #[test]
    fn test_custom_thresholds() {
        let config = PipelineConfig::default()
            .with_high_value_threshold(1_000.0)
            .with_significant_value_threshold(100.0);
        let metadata = DocumentMetadata::new(DocType::Invoice, 0.95).with_amounts(["$500"]);

        let risks = assess_risks(&metadata, "", &config);
        assert_eq!(levels(&risks), vec![RiskLevel::Medium]);
    }
}
