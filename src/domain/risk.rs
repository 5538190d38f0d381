//! Risk summary data models

use crate::domain::finding::EntityKind;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Risk level derived from the weighted score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "Low"),
            Self::Medium => write!(f, "Medium"),
            Self::High => write!(f, "High"),
        }
    }
}

/// Risk classification result for one scan
///
/// Computed once per scan from a finding set; never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskSummary {
    /// Weighted risk score, clamped to 0-100
    pub score: u8,
    /// Low / Medium / High level from the threshold cut
    pub level: RiskLevel,
    /// Per-kind finding counts, every kind present
    pub counts: BTreeMap<EntityKind, usize>,
    /// Ordered compliance recommendations
    pub insights: Vec<String>,
}
