//! Risk classification
//!
//! Turns a finding set into a weighted 0-100 risk score, a Low / Medium /
//! High level, and a list of compliance recommendations. Classification
//! is deterministic and total; the policy object injected at construction
//! carries every tunable constant.

pub mod classifier;
mod insights;

pub use classifier::RiskClassifier;
