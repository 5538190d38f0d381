//! Weighted risk scoring and level mapping

use super::insights;
use crate::config::policy::{PolicyFile, RiskPolicy};
use crate::domain::finding::FindingSet;
use crate::domain::result::Result;
use crate::domain::risk::{RiskLevel, RiskSummary};

/// Deterministic risk classifier
///
/// Score = Σ weight(kind) × count(kind), plus a diversity bonus when
/// several distinct kinds co-occur, clamped to 0-100. The level falls out
/// of the two configured thresholds.
pub struct RiskClassifier {
    policy: RiskPolicy,
}

impl RiskClassifier {
    /// Create a classifier from the embedded default policy
    pub fn new() -> Result<Self> {
        Ok(Self {
            policy: PolicyFile::embedded_default()?.risk,
        })
    }

    /// Create a classifier from a custom risk policy
    pub fn from_policy(policy: RiskPolicy) -> Self {
        Self { policy }
    }

    /// Classify a finding set
    ///
    /// Total function: never errors, for any finding set including an
    /// empty one.
    pub fn classify(&self, findings: &FindingSet) -> RiskSummary {
        let score = self.score(findings);
        let level = self.level(score);

        tracing::debug!(score, level = %level, "Risk classification complete");

        RiskSummary {
            score,
            level,
            counts: findings.counts(),
            insights: insights::generate(findings, level),
        }
    }

    /// Compute the clamped weighted score
    fn score(&self, findings: &FindingSet) -> u8 {
        let mut score: u32 = 0;
        for (kind, entries) in findings.iter() {
            // The policy validates complete at load; the fallback keeps
            // this total for hand-built policies.
            let weight = self.policy.weight_for(kind).unwrap_or(1);
            score += weight * entries.len() as u32;
        }

        let active = findings.active_kinds();
        if active >= 3 {
            score += self.policy.diversity.three_kinds_bonus;
        }
        if active >= 4 {
            score += self.policy.diversity.four_kinds_bonus;
        }

        score.min(100) as u8
    }

    /// Map a score to a level via the configured thresholds
    fn level(&self, score: u8) -> RiskLevel {
        if score >= self.policy.high_threshold {
            RiskLevel::High
        } else if score >= self.policy.medium_threshold {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }
}
