//! Redaction quality verification
//!
//! Re-checks protected output against the original finding set. A value
//! counts as leaked only when it survives as a whole token: the same
//! boundary discipline the detector uses, because a plain substring
//! search would flag a redacted number that merely appears inside an
//! unrelated larger number.

use crate::detection::boundary::is_token_bounded;
use crate::domain::finding::FindingSet;
use crate::domain::protection::{LeakedItem, QualityStatus, RedactionQuality};

/// Verify whether protected output still contains original finding values
///
/// Total function: always produces a report, including a vacuous 100%
/// coverage pass when there was nothing to protect.
pub fn verify_quality(original_findings: &FindingSet, protected_text: &str) -> RedactionQuality {
    let mut leaked_items = Vec::new();

    for (kind, entries) in original_findings.iter() {
        for finding in entries {
            if value_leaks(protected_text, &finding.value) {
                leaked_items.push(LeakedItem {
                    kind,
                    value: finding.value.clone(),
                });
            }
        }
    }

    let total_sensitive_items = original_findings.total();
    let leak_count = leaked_items.len();
    let coverage_percent = if total_sensitive_items == 0 {
        100.0
    } else {
        let covered = (total_sensitive_items - leak_count) as f64;
        round2(covered / total_sensitive_items as f64 * 100.0)
    };

    let status = if leak_count == 0 {
        QualityStatus::Pass
    } else {
        tracing::warn!(leak_count, "Protected output still contains sensitive values");
        QualityStatus::Fail
    };

    RedactionQuality {
        total_sensitive_items,
        leak_count,
        leaked_items,
        coverage_percent,
        status,
    }
}

/// Token-boundary-aware search for one value
fn value_leaks(text: &str, value: &str) -> bool {
    if value.is_empty() {
        return false;
    }
    text.match_indices(value)
        .any(|(start, matched)| is_token_bounded(text, start, start + matched.len()))
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
