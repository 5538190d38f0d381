//! Command implementations

pub mod decrypt;
pub mod init;
pub mod protect;
pub mod scan;
pub mod validate;
pub mod verify;

use crate::audit::AuditLogger;
use crate::classification::RiskClassifier;
use crate::config::{load_config_or_default, PrivGuardConfig};
use crate::detection::EntityDetector;
use crate::domain::result::Result;

/// Shared per-command context: configuration, policy-driven engines, audit
pub struct CommandContext {
    pub config: PrivGuardConfig,
    pub detector: EntityDetector,
    pub classifier: RiskClassifier,
    pub audit: AuditLogger,
}

impl CommandContext {
    /// Load configuration and construct the engines every command needs
    pub fn load(config_path: &str) -> Result<Self> {
        let config = load_config_or_default(config_path)?;
        let policy = config.load_policy()?;
        let detector = EntityDetector::from_policy(&policy.detection)?;
        let classifier = RiskClassifier::from_policy(policy.risk);
        let audit = AuditLogger::new(&config.audit)?;

        Ok(Self {
            config,
            detector,
            classifier,
            audit,
        })
    }
}

/// Write content to a path, creating parent directories as needed
pub(crate) fn write_output(path: &std::path::Path, content: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)
}
