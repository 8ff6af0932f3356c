//! Risk findings and their severity ordering.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Severity of a risk finding.
///
/// Orders by severity, so `High > Medium > Low`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    High,
    Medium,
    Low,
}

impl RiskLevel {
    /// Numeric rank used when aggregating a run: High=3, Medium=2, Low=1.
    pub fn severity(&self) -> u8 {
        match self {
            Self::High => 3,
            Self::Medium => 2,
            Self::Low => 1,
        }
    }
}

impl Ord for RiskLevel {
    fn cmp(&self, other: &Self) -> Ordering {
        self.severity().cmp(&other.severity())
    }
}

impl PartialOrd for RiskLevel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        })
    }
}

/// A single risk finding with a recommended response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub level: RiskLevel,
    pub description: String,
    pub recommendation: String,
}

impl RiskAssessment {
    pub fn new(
        level: RiskLevel,
        description: impl Into<String>,
        recommendation: impl Into<String>,
    ) -> Self {
        Self {
            level,
            description: description.into(),
            recommendation: recommendation.into(),
        }
    }
}

/// Highest severity among the findings, if any.
pub fn max_risk_level(risks: &[RiskAssessment]) -> Option<RiskLevel> {
    risks.iter().map(|r| r.level).max()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_ordering() {
        assert!(RiskLevel::High > RiskLevel::Medium);
        assert!(RiskLevel::Medium > RiskLevel::Low);
        assert_eq!(RiskLevel::High.severity(), 3);
        assert_eq!(RiskLevel::Low.severity(), 1);
    }

    #[test]
    fn test_max_risk_level() {
        let risks = vec![
            RiskAssessment::new(RiskLevel::Medium, "a", "b"),
            RiskAssessment::new(RiskLevel::High, "c", "d"),
            RiskAssessment::new(RiskLevel::Low, "e", "f"),
        ];
        assert_eq!(max_risk_level(&risks), Some(RiskLevel::High));
        assert_eq!(max_risk_level(&[]), None);
    }
}
