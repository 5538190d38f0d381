//! Configuration management
//!
//! Two documents drive PrivGuard:
//!
//! - `privguard.toml`: application settings (logging, output locations,
//!   audit trail). Optional; defaults apply when absent.
//! - the policy document: detection patterns, keyword sets, confidence
//!   constants, risk weights, and thresholds. A default is embedded in the
//!   binary; deployments override it via `[policy] path`.
//!
//! Both are loaded once per process and treated as immutable for the
//! duration of every detect/classify call.

pub mod loader;
pub mod policy;
pub mod schema;

pub use loader::{load_config, load_config_or_default};
pub use policy::{
    ConfidencePolicy, DetectionPolicy, DiversityBonus, PatternSpec, PolicyFile, RiskPolicy,
};
pub use schema::{
    ApplicationConfig, AuditConfig, LoggingConfig, PolicyConfig, PrivGuardConfig, ProtectionConfig,
};

use crate::domain::result::Result;

impl PrivGuardConfig {
    /// Load the policy this configuration points at
    ///
    /// Falls back to the embedded default when no path is configured.
    pub fn load_policy(&self) -> Result<PolicyFile> {
        match self.policy.path {
            Some(ref path) => PolicyFile::from_file(path),
            None => PolicyFile::embedded_default(),
        }
    }
}
