//! Redaction: irreversible whole-value substitution

use super::unique_values_longest_first;
use crate::domain::finding::FindingSet;

/// Replace every occurrence of every detected value with a fixed marker
///
/// Substitution is literal and whole-value, not span-based: a sensitive
/// value appearing at offsets other than where it was first detected is
/// redacted everywhere. Values are substituted longest first so a longer
/// value is never corrupted by a shorter value that happens to be its
/// substring. Never fails; with no findings the text passes through
/// unchanged.
pub fn redact_text(text: &str, findings: &FindingSet, marker: &str) -> String {
    let mut output = text.to_string();
    for value in unique_values_longest_first(findings) {
        output = output.replace(&value, marker);
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::finding::{EntityKind, Finding};

    #[test]
    fn test_redacts_every_occurrence() {
        let mut findings = FindingSet::new();
        findings.push(Finding::new(EntityKind::Phone, "0712345678", 5, 15, 0.9));

        let text = "call 0712345678 today, again 0712345678 tomorrow";
        let redacted = redact_text(text, &findings, "[REDACTED]");
        assert_eq!(
            redacted,
            "call [REDACTED] today, again [REDACTED] tomorrow"
        );
    }

    #[test]
    fn test_longer_value_substituted_first() {
        let mut findings = FindingSet::new();
        findings.push(Finding::new(EntityKind::NationalId, "12345678", 0, 8, 0.9));
        findings.push(Finding::new(
            EntityKind::PaymentCard,
            "1234567812345678",
            10,
            26,
            0.8,
        ));

        let text = "12345678 x 1234567812345678";
        let redacted = redact_text(text, &findings, "[REDACTED]");
        assert_eq!(redacted, "[REDACTED] x [REDACTED]");
    }

    #[test]
    fn test_empty_findings_pass_text_through() {
        let text = "nothing sensitive here";
        assert_eq!(
            redact_text(text, &FindingSet::new(), "[REDACTED]"),
            text
        );
    }
}
