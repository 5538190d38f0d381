//! Detection and risk policy
//!
//! The policy document carries everything that is deployment-tunable but
//! fixed for the duration of a run: patterns and keyword sets per entity
//! kind, the context-confidence constants, the score weight table, the
//! level thresholds, and the diversity bonuses. A default policy is
//! embedded in the binary; deployments may point at their own TOML file.
//!
//! Tables are keyed by kind name and resolved through
//! [`EntityKind::from_name`]. Policy errors fail fast at load time; the
//! detector and classifier never see an incomplete policy.

use crate::domain::errors::PrivGuardError;
use crate::domain::finding::EntityKind;
use crate::domain::result::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Complete policy document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolicyFile {
    /// Detection patterns and confidence constants
    pub detection: DetectionPolicy,
    /// Risk scoring weights and thresholds
    pub risk: RiskPolicy,
}

/// Detection section of the policy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectionPolicy {
    /// Context-confidence constants
    #[serde(default)]
    pub confidence: ConfidencePolicy,
    /// Pattern and keyword set per entity kind name
    pub patterns: BTreeMap<String, PatternSpec>,
}

impl DetectionPolicy {
    /// Pattern spec for one kind, resolved through the kind's aliases
    pub fn spec_for(&self, kind: EntityKind) -> Option<&PatternSpec> {
        self.patterns
            .iter()
            .find(|(name, _)| EntityKind::from_name(name) == Some(kind))
            .map(|(_, spec)| spec)
    }

    /// Mutable pattern spec lookup, mainly for tests and tooling
    pub fn spec_for_mut(&mut self, kind: EntityKind) -> Option<&mut PatternSpec> {
        self.patterns
            .iter_mut()
            .find(|(name, _)| EntityKind::from_name(name) == Some(kind))
            .map(|(_, spec)| spec)
    }
}

/// One kind's pattern definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatternSpec {
    /// Regular expression for the kind (linear-time engine syntax)
    pub pattern: String,
    /// Context keywords; empty means the kind scores the bare baseline
    #[serde(default)]
    pub keywords: Vec<String>,
}

/// Context-confidence constants
///
/// The exact values are empirical; the invariant the code relies on is
/// only "more context keywords means higher confidence".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfidencePolicy {
    /// Two or more keyword hits in the context window
    #[serde(default = "default_strong_context")]
    pub strong_context: f32,
    /// Exactly one keyword hit
    #[serde(default = "default_weak_context")]
    pub weak_context: f32,
    /// No hits, but the kind has a keyword set
    #[serde(default = "default_keyword_baseline")]
    pub keyword_baseline: f32,
    /// The kind has no keyword set at all
    #[serde(default = "default_bare_baseline")]
    pub bare_baseline: f32,
    /// Characters inspected on each side of a match
    #[serde(default = "default_context_radius")]
    pub context_radius: usize,
}

fn default_strong_context() -> f32 {
    0.98
}

fn default_weak_context() -> f32 {
    0.90
}

fn default_keyword_baseline() -> f32 {
    0.78
}

fn default_bare_baseline() -> f32 {
    0.80
}

fn default_context_radius() -> usize {
    40
}

impl Default for ConfidencePolicy {
    fn default() -> Self {
        Self {
            strong_context: default_strong_context(),
            weak_context: default_weak_context(),
            keyword_baseline: default_keyword_baseline(),
            bare_baseline: default_bare_baseline(),
            context_radius: default_context_radius(),
        }
    }
}

/// Risk section of the policy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskPolicy {
    /// Score at or above which the level is High
    pub high_threshold: u8,
    /// Score at or above which the level is Medium
    pub medium_threshold: u8,
    /// Per-kind score weight table, keyed by kind name
    pub weights: BTreeMap<String, u32>,
    /// Diversity bonuses for multi-kind documents
    #[serde(default)]
    pub diversity: DiversityBonus,
}

impl RiskPolicy {
    /// Weight for one kind, resolved through the kind's aliases
    pub fn weight_for(&self, kind: EntityKind) -> Option<u32> {
        self.weights
            .iter()
            .find(|(name, _)| EntityKind::from_name(name) == Some(kind))
            .map(|(_, weight)| *weight)
    }
}

/// Bonuses applied when several distinct kinds co-occur
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiversityBonus {
    /// Added once when three or more kinds are active
    #[serde(default = "default_diversity_bonus")]
    pub three_kinds_bonus: u32,
    /// Added again when four or more kinds are active
    #[serde(default = "default_diversity_bonus")]
    pub four_kinds_bonus: u32,
}

fn default_diversity_bonus() -> u32 {
    10
}

impl Default for DiversityBonus {
    fn default() -> Self {
        Self {
            three_kinds_bonus: default_diversity_bonus(),
            four_kinds_bonus: default_diversity_bonus(),
        }
    }
}

impl PolicyFile {
    /// Load the policy embedded in the binary
    pub fn embedded_default() -> Result<Self> {
        Self::from_toml(include_str!("../../policies/privguard_policy.toml"))
    }

    /// Load a policy from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            PrivGuardError::Configuration(format!(
                "Failed to read policy file {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::from_toml(&content)
    }

    /// Parse and validate a policy from TOML content
    pub fn from_toml(content: &str) -> Result<Self> {
        let policy: PolicyFile = toml::from_str(content)
            .map_err(|e| PrivGuardError::Configuration(format!("Failed to parse policy: {e}")))?;
        policy.validate()?;
        Ok(policy)
    }

    /// Validate the policy, failing fast on anything incomplete
    pub fn validate(&self) -> Result<()> {
        for name in self.detection.patterns.keys() {
            if EntityKind::from_name(name).is_none() {
                return Err(PrivGuardError::Configuration(format!(
                    "Unknown entity kind '{name}' in detection patterns"
                )));
            }
        }
        for name in self.risk.weights.keys() {
            if EntityKind::from_name(name).is_none() {
                return Err(PrivGuardError::Configuration(format!(
                    "Unknown entity kind '{name}' in risk weights"
                )));
            }
        }

        for kind in EntityKind::ALL {
            let spec = self.detection.spec_for(kind).ok_or_else(|| {
                PrivGuardError::Configuration(format!(
                    "Policy is missing a pattern for entity kind '{}'",
                    kind.label()
                ))
            })?;
            regex::Regex::new(&spec.pattern).map_err(|e| {
                PrivGuardError::Configuration(format!(
                    "Invalid pattern for entity kind '{}': {}",
                    kind.label(),
                    e
                ))
            })?;
            if self.risk.weight_for(kind).is_none() {
                return Err(PrivGuardError::Configuration(format!(
                    "Policy is missing a risk weight for entity kind '{}'",
                    kind.label()
                )));
            }
        }

        if self.risk.high_threshold <= self.risk.medium_threshold {
            return Err(PrivGuardError::Configuration(format!(
                "high_threshold ({}) must be greater than medium_threshold ({})",
                self.risk.high_threshold, self.risk.medium_threshold
            )));
        }

        let c = &self.detection.confidence;
        for (name, value) in [
            ("strong_context", c.strong_context),
            ("weak_context", c.weak_context),
            ("keyword_baseline", c.keyword_baseline),
            ("bare_baseline", c.bare_baseline),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(PrivGuardError::Configuration(format!(
                    "Confidence constant '{name}' must be within [0, 1], got {value}"
                )));
            }
        }

        Ok(())
    }
}
