//! Compiled detection rules
//!
//! Compiles the policy's per-kind patterns into a fixed rule set. The
//! `regex` crate's automaton engine guarantees linear-time matching, so
//! pathological input cannot trigger catastrophic backtracking.

use crate::config::policy::{ConfidencePolicy, DetectionPolicy, PolicyFile};
use crate::domain::errors::PrivGuardError;
use crate::domain::finding::EntityKind;
use crate::domain::result::Result;
use regex::Regex;

/// Compiled pattern with metadata for one entity kind
#[derive(Debug, Clone)]
pub struct CompiledRule {
    /// Entity kind this rule produces
    pub kind: EntityKind,
    /// Compiled pattern
    pub regex: Regex,
    /// Lowercased context keywords; empty means bare-baseline confidence
    pub keywords: Vec<String>,
}

/// Fixed rule set for one detector instance
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<CompiledRule>,
    confidence: ConfidencePolicy,
}

impl RuleSet {
    /// Compile a rule set from a detection policy
    ///
    /// Rules are compiled in the canonical kind order so detection output
    /// is deterministic.
    pub fn from_policy(policy: &DetectionPolicy) -> Result<Self> {
        let mut rules = Vec::with_capacity(EntityKind::ALL.len());
        for kind in EntityKind::ALL {
            let spec = policy.spec_for(kind).ok_or_else(|| {
                PrivGuardError::Configuration(format!(
                    "Detection policy is missing entity kind '{}'",
                    kind.label()
                ))
            })?;
            let regex = Regex::new(&spec.pattern).map_err(|e| {
                PrivGuardError::Configuration(format!(
                    "Invalid pattern for '{}': {}",
                    kind.label(),
                    e
                ))
            })?;
            rules.push(CompiledRule {
                kind,
                regex,
                keywords: spec.keywords.iter().map(|k| k.to_lowercase()).collect(),
            });
        }
        Ok(Self {
            rules,
            confidence: policy.confidence.clone(),
        })
    }

    /// Compile the embedded default policy
    pub fn default_rules() -> Result<Self> {
        let policy = PolicyFile::embedded_default()?;
        Self::from_policy(&policy.detection)
    }

    /// All compiled rules in canonical kind order
    pub fn rules(&self) -> &[CompiledRule] {
        &self.rules
    }

    /// Confidence constants for this rule set
    pub fn confidence(&self) -> &ConfidencePolicy {
        &self.confidence
    }
}
