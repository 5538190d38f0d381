//! Protection result data models

use crate::domain::finding::EntityKind;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Protection action applied to a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProtectionAction {
    /// Irreversible replacement with a fixed marker
    Redact,
    /// Length-preserving partial obfuscation
    Mask,
    /// Reversible authenticated encryption of the full text
    Encrypt,
}

impl fmt::Display for ProtectionAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Redact => write!(f, "redact"),
            Self::Mask => write!(f, "mask"),
            Self::Encrypt => write!(f, "encrypt"),
        }
    }
}

/// Outcome of one protection operation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProtectionResult {
    /// Action that produced the output
    pub action: ProtectionAction,
    /// Protected text for redact/mask, opaque token for encrypt
    pub output: String,
    /// Leak verification report; present only for redact/mask
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality: Option<RedactionQuality>,
}

/// Verification verdict for a protected output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum QualityStatus {
    Pass,
    Fail,
}

/// One sensitive value still recoverable from protected output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeakedItem {
    pub kind: EntityKind,
    pub value: String,
}

/// Leak verification report
///
/// `status == Pass` iff `leak_count == 0`; coverage is 100 when there was
/// nothing to protect.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedactionQuality {
    /// Total finding count the verification ran against
    pub total_sensitive_items: usize,
    /// Number of values still recoverable as whole tokens
    pub leak_count: usize,
    /// The leaked values with their kinds
    pub leaked_items: Vec<LeakedItem>,
    /// Percentage of values no longer recoverable
    pub coverage_percent: f64,
    /// PASS / FAIL verdict
    pub status: QualityStatus,
}

impl RedactionQuality {
    /// Check whether the protected output leaked nothing
    pub fn passed(&self) -> bool {
        self.status == QualityStatus::Pass
    }
}
