//! Audit trail for scan and protection operations
//!
//! Append-only JSONL (or plain text) event log. Sensitive values never
//! reach the trail in plaintext; callers pass SHA-256 hashes produced by
//! [`hash_sensitive_value`].

use crate::config::schema::AuditConfig;
use crate::domain::errors::PrivGuardError;
use crate::domain::result::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use uuid::Uuid;

/// One audit event
#[derive(Debug, Serialize)]
struct AuditEntry {
    id: Uuid,
    timestamp: DateTime<Utc>,
    event_type: String,
    source: String,
    details: serde_json::Value,
}

/// Append-only audit logger
pub struct AuditLogger {
    log_path: PathBuf,
    json_format: bool,
    enabled: bool,
}

impl AuditLogger {
    /// Create an audit logger from configuration
    pub fn new(config: &AuditConfig) -> Result<Self> {
        if config.enabled {
            if let Some(parent) = config.log_path.parent() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    PrivGuardError::Audit(format!(
                        "Failed to create audit log directory {}: {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }

        Ok(Self {
            log_path: config.log_path.clone(),
            json_format: config.json_format,
            enabled: config.enabled,
        })
    }

    /// Record one event
    ///
    /// A disabled logger accepts and drops events so call sites need no
    /// branching.
    pub fn log_event(&self, event_type: &str, details: serde_json::Value) -> Result<()> {
        if !self.enabled {
            return Ok(());
        }

        let entry = AuditEntry {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            event_type: event_type.to_string(),
            source: "cli".to_string(),
            details,
        };

        self.write_entry(&entry)
    }

    fn write_entry(&self, entry: &AuditEntry) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| {
                PrivGuardError::Audit(format!(
                    "Failed to open audit log {}: {}",
                    self.log_path.display(),
                    e
                ))
            })?;

        if self.json_format {
            let json_line = serde_json::to_string(entry)
                .map_err(|e| PrivGuardError::Audit(format!("Failed to serialize entry: {e}")))?;
            writeln!(file, "{json_line}")
                .map_err(|e| PrivGuardError::Audit(format!("Failed to write entry: {e}")))?;
        } else {
            writeln!(
                file,
                "[{}] {} | {}",
                entry.timestamp.to_rfc3339(),
                entry.event_type,
                entry.details
            )
            .map_err(|e| PrivGuardError::Audit(format!("Failed to write entry: {e}")))?;
        }

        Ok(())
    }
}

/// SHA-256 hash of a sensitive value for audit purposes
pub fn hash_sensitive_value(value: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(value.as_bytes());
    let result = hasher.finalize();
    format!("{result:x}")
}
