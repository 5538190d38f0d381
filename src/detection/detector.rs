//! Sensitive entity detector
//!
//! Pure pattern matching with context-weighted confidence. `detect` is a
//! total function of the input text: no I/O, no errors, and identical
//! output for identical input.

use super::boundary::is_token_bounded;
use super::patterns::{CompiledRule, RuleSet};
use crate::config::policy::DetectionPolicy;
use crate::domain::finding::{Finding, FindingSet};
use crate::domain::result::Result;

/// Regex-based sensitive entity detector
pub struct EntityDetector {
    rules: RuleSet,
}

impl EntityDetector {
    /// Create a detector from the embedded default policy
    pub fn new() -> Result<Self> {
        Ok(Self {
            rules: RuleSet::default_rules()?,
        })
    }

    /// Create a detector from a custom detection policy
    pub fn from_policy(policy: &DetectionPolicy) -> Result<Self> {
        Ok(Self {
            rules: RuleSet::from_policy(policy)?,
        })
    }

    /// Detect sensitive entities in plain text
    ///
    /// Runs every kind's pattern independently, keeps only token-bounded
    /// matches, deduplicates on whitespace-normalized values (first
    /// occurrence wins), attaches context confidence, and finally removes
    /// national-ID findings that duplicate a phone number.
    ///
    /// Empty input yields a finding set with every kind present and empty.
    pub fn detect(&self, text: &str) -> FindingSet {
        let mut findings = FindingSet::new();

        for rule in self.rules.rules() {
            for m in rule.regex.find_iter(text) {
                if !is_token_bounded(text, m.start(), m.end()) {
                    continue;
                }
                let value = normalize_whitespace(m.as_str());
                let confidence = self.context_confidence(text, m.start(), m.end(), rule);
                findings.push(Finding::new(
                    rule.kind,
                    value,
                    m.start(),
                    m.end(),
                    confidence,
                ));
            }
        }

        findings.resolve_phone_id_conflicts();

        tracing::debug!(
            total = findings.total(),
            active_kinds = findings.active_kinds(),
            "Detection pass complete"
        );

        findings
    }

    /// Assign confidence from keywords near the match
    ///
    /// Inspects up to `context_radius` characters on each side of the
    /// span (clamped to the text), lowercases the window, and counts how
    /// many of the rule's keywords occur as substrings.
    fn context_confidence(&self, text: &str, start: usize, end: usize, rule: &CompiledRule) -> f32 {
        let constants = self.rules.confidence();
        if rule.keywords.is_empty() {
            return constants.bare_baseline;
        }

        let (window_start, window_end) =
            widen_to_chars(text, start, end, constants.context_radius);
        let context = text[window_start..window_end].to_lowercase();

        let matched = rule
            .keywords
            .iter()
            .filter(|keyword| context.contains(keyword.as_str()))
            .count();

        if matched >= 2 {
            constants.strong_context
        } else if matched == 1 {
            constants.weak_context
        } else {
            constants.keyword_baseline
        }
    }
}

/// Collapse internal whitespace runs to a single space
///
/// Near-duplicate OCR artifacts of the same value then deduplicate.
fn normalize_whitespace(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Widen `[start, end)` by up to `radius` characters on each side
///
/// Walks char boundaries so the window never splits a multibyte
/// character; offsets are byte positions into `text`.
fn widen_to_chars(text: &str, start: usize, end: usize, radius: usize) -> (usize, usize) {
    let mut window_start = start;
    for _ in 0..radius {
        match text[..window_start].chars().next_back() {
            Some(c) => window_start -= c.len_utf8(),
            None => break,
        }
    }
    let mut window_end = end;
    for _ in 0..radius {
        match text[window_end..].chars().next() {
            Some(c) => window_end += c.len_utf8(),
            None => break,
        }
    }
    (window_start, window_end)
}
