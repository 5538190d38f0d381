//! Protection actions and leak verification
//!
//! Three protection operations (redact, mask, encrypt) plus the
//! verification pass that proves a protected output no longer contains
//! any detected value. Redact and mask never fail; only the encryption
//! boundary returns errors.

pub mod crypto;
pub mod mask;
pub mod redact;
pub mod verify;

pub use crypto::{
    decrypt_text, encrypt_text, load_key_file, save_key_file, validate_token_shape, EncryptionKey,
};
pub use mask::{mask_text, mask_value};
pub use redact::redact_text;
pub use verify::verify_quality;

use crate::config::schema::ProtectionConfig;
use crate::domain::finding::FindingSet;
use crate::domain::protection::{ProtectionAction, ProtectionResult};
use crate::domain::result::Result;
use std::collections::BTreeSet;

/// Unique normalized values across all kinds, longest first
///
/// Longest-first ordering prevents a shorter value that is a substring of
/// a longer one from corrupting the longer value's substitution. Ties
/// break lexicographically so the traversal is deterministic.
fn unique_values_longest_first(findings: &FindingSet) -> Vec<String> {
    let unique: BTreeSet<&str> = findings
        .iter()
        .flat_map(|(_, entries)| entries.iter().map(|f| f.value.as_str()))
        .collect();

    let mut values: Vec<String> = unique.into_iter().map(str::to_string).collect();
    values.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    values
}

/// Protection engine configured with marker and mask characters
pub struct Protector {
    marker: String,
    mask_char: char,
}

impl Protector {
    /// Create a protector from protection configuration
    pub fn new(config: &ProtectionConfig) -> Self {
        Self {
            marker: config.redaction_marker.clone(),
            mask_char: config.mask_char,
        }
    }

    /// Redact and verify in one step
    pub fn redact(&self, text: &str, findings: &FindingSet) -> ProtectionResult {
        let output = redact_text(text, findings, &self.marker);
        let quality = verify_quality(findings, &output);
        ProtectionResult {
            action: ProtectionAction::Redact,
            output,
            quality: Some(quality),
        }
    }

    /// Mask and verify in one step
    pub fn mask(&self, text: &str, findings: &FindingSet) -> ProtectionResult {
        let output = mask_text(text, findings, self.mask_char);
        let quality = verify_quality(findings, &output);
        ProtectionResult {
            action: ProtectionAction::Mask,
            output,
            quality: Some(quality),
        }
    }

    /// Encrypt the full text into an opaque token
    ///
    /// No quality report applies: the whole document is transformed, so
    /// there is no partially protected text to re-check.
    pub fn encrypt(&self, text: &str, key: &EncryptionKey) -> Result<ProtectionResult> {
        let output = encrypt_text(text, key)?;
        Ok(ProtectionResult {
            action: ProtectionAction::Encrypt,
            output,
            quality: None,
        })
    }
}

impl Default for Protector {
    fn default() -> Self {
        Self::new(&ProtectionConfig::default())
    }
}
