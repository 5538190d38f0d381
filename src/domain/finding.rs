//! Finding data models
//!
//! A [`Finding`] is one matched sensitive entity instance; a [`FindingSet`]
//! is the immutable per-scan snapshot of every finding, keyed by
//! [`EntityKind`] with every kind always present.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Sensitive entity kind enumeration
///
/// The set is fixed per run; which patterns match each kind is
/// deployment-configurable through the detection policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    /// National identity numbers
    NationalId,
    /// Mobile and landline phone numbers
    Phone,
    /// Email addresses
    Email,
    /// Tax authority PINs
    TaxPin,
    /// Payment card numbers
    PaymentCard,
    /// API keys, tokens, and other credentials
    ApiSecret,
}

impl EntityKind {
    /// All kinds, in the canonical order used by reports
    pub const ALL: [EntityKind; 6] = [
        Self::NationalId,
        Self::Phone,
        Self::Email,
        Self::TaxPin,
        Self::PaymentCard,
        Self::ApiSecret,
    ];

    /// Get human-readable label for the kind
    pub fn label(&self) -> &'static str {
        match self {
            Self::NationalId => "NATIONAL_ID",
            Self::Phone => "PHONE",
            Self::Email => "EMAIL",
            Self::TaxPin => "TAX_PIN",
            Self::PaymentCard => "PAYMENT_CARD",
            Self::ApiSecret => "API_SECRET",
        }
    }

    /// Canonical snake_case name used in policy files
    pub fn name(&self) -> &'static str {
        match self {
            Self::NationalId => "national_id",
            Self::Phone => "phone",
            Self::Email => "email",
            Self::TaxPin => "tax_pin",
            Self::PaymentCard => "payment_card",
            Self::ApiSecret => "api_secret",
        }
    }

    /// Parse a policy key into a kind, accepting common aliases
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "national_id" | "nationalid" => Some(Self::NationalId),
            "phone" | "phone_number" => Some(Self::Phone),
            "email" => Some(Self::Email),
            "tax_pin" | "kra_pin" | "tax_id" => Some(Self::TaxPin),
            "payment_card" | "credit_card" | "card" => Some(Self::PaymentCard),
            "api_secret" | "api_key" | "secret" => Some(Self::ApiSecret),
            _ => None,
        }
    }

    /// Check if this kind is a high-value identifier for compliance purposes
    pub fn is_high_value_identifier(&self) -> bool {
        matches!(self, Self::NationalId | Self::TaxPin)
    }
}

/// One detected sensitive entity instance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    /// Kind of sensitive entity
    pub kind: EntityKind,
    /// Matched value, whitespace-normalized (runs collapsed to one space)
    pub value: String,
    /// Start byte offset into the original text (inclusive)
    pub start: usize,
    /// End byte offset into the original text (exclusive)
    pub end: usize,
    /// Confidence score (0.0 - 1.0), derived from context keywords
    pub confidence: f32,
    /// Short explanation of how the confidence was derived
    pub reason: String,
}

impl Finding {
    /// Create a new finding
    ///
    /// The span is half-open `[start, end)` and must be non-empty.
    pub fn new(
        kind: EntityKind,
        value: impl Into<String>,
        start: usize,
        end: usize,
        confidence: f32,
    ) -> Self {
        debug_assert!(start < end, "finding span must be non-empty");
        Self {
            kind,
            value: value.into(),
            start,
            end,
            confidence: confidence.clamp(0.0, 1.0),
            reason: "regex+context".to_string(),
        }
    }
}

/// Immutable per-scan snapshot of findings keyed by entity kind
///
/// Every kind is always present, with an empty list when nothing matched.
/// Within one kind no two findings share the same normalized value, and
/// findings preserve first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FindingSet {
    findings: BTreeMap<EntityKind, Vec<Finding>>,
}

impl FindingSet {
    /// Create an empty finding set with every kind present
    pub fn new() -> Self {
        let mut findings = BTreeMap::new();
        for kind in EntityKind::ALL {
            findings.insert(kind, Vec::new());
        }
        Self { findings }
    }

    /// Append a finding, enforcing the per-kind unique-value invariant
    ///
    /// The first occurrence of a normalized value wins; later duplicates
    /// are dropped silently.
    pub fn push(&mut self, finding: Finding) {
        let entries = self.findings.entry(finding.kind).or_default();
        if entries.iter().any(|f| f.value == finding.value) {
            return;
        }
        entries.push(finding);
    }

    /// Findings for one kind (possibly empty, never absent)
    pub fn for_kind(&self, kind: EntityKind) -> &[Finding] {
        self.findings.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Iterate kinds with their findings in canonical order
    pub fn iter(&self) -> impl Iterator<Item = (EntityKind, &[Finding])> {
        self.findings.iter().map(|(k, v)| (*k, v.as_slice()))
    }

    /// Total finding count across all kinds
    pub fn total(&self) -> usize {
        self.findings.values().map(Vec::len).sum()
    }

    /// Number of kinds with at least one finding
    pub fn active_kinds(&self) -> usize {
        self.findings.values().filter(|v| !v.is_empty()).count()
    }

    /// Check if no kind has any finding
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Per-kind finding counts, every kind present
    pub fn counts(&self) -> BTreeMap<EntityKind, usize> {
        self.findings.iter().map(|(k, v)| (*k, v.len())).collect()
    }

    /// Drop national-ID findings whose normalized value duplicates a phone
    /// finding's value
    ///
    /// Runs once after all single-kind passes so a phone number is never
    /// double-counted as a national ID.
    pub fn resolve_phone_id_conflicts(&mut self) {
        let phone_values: Vec<String> = self
            .for_kind(EntityKind::Phone)
            .iter()
            .map(|f| f.value.clone())
            .collect();
        if let Some(ids) = self.findings.get_mut(&EntityKind::NationalId) {
            ids.retain(|f| !phone_values.contains(&f.value));
        }
    }
}
