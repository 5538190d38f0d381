//! Compliance insight generation
//!
//! Rule list keyed on which kinds are present and the resulting level.
//! The wording follows data-protection principles: minimization, purpose
//! limitation, access control, and a level-matched closing action.

use crate::domain::finding::FindingSet;
use crate::domain::risk::RiskLevel;

/// Generate ordered compliance recommendations for a scan
pub fn generate(findings: &FindingSet, level: RiskLevel) -> Vec<String> {
    let mut insights = Vec::new();

    if findings.is_empty() {
        insights.push("No direct personal identifiers detected in the provided text.".to_string());
        insights.push("Maintain secure storage and role-based access controls.".to_string());
        return insights;
    }

    insights.push(
        "Apply data minimization: retain only personal data required for your process."
            .to_string(),
    );
    insights.push(
        "Use purpose limitation: process personal data only for clearly defined lawful use."
            .to_string(),
    );

    let has_high_value = findings
        .iter()
        .any(|(kind, entries)| kind.is_high_value_identifier() && !entries.is_empty());
    if has_high_value {
        insights.push(
            "High-value identifiers found: enforce strict access controls and audit logs."
                .to_string(),
        );
    }

    match level {
        RiskLevel::High => insights.push(
            "Immediate action advised: redact/mask before sharing and encrypt at rest."
                .to_string(),
        ),
        RiskLevel::Medium => insights.push(
            "Apply masking for routine use and encryption for storage or transmission."
                .to_string(),
        ),
        RiskLevel::Low => insights
            .push("Continue regular monitoring and periodic privacy reviews.".to_string()),
    }

    insights
}
