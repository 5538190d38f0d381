//! Configuration schema types
//!
//! This module defines the configuration structure that maps to the
//! `privguard.toml` file. Everything has a sensible default so the tool
//! also runs without any configuration file at all.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main PrivGuard configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PrivGuardConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Policy document location
    #[serde(default)]
    pub policy: PolicyConfig,

    /// Protection output settings
    #[serde(default)]
    pub protection: ProtectionConfig,

    /// Audit trail configuration
    #[serde(default)]
    pub audit: AuditConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl PrivGuardConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.policy.validate()?;
        self.protection.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

/// Policy document location
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PolicyConfig {
    /// Path to a policy TOML file; the embedded default is used when unset
    pub path: Option<PathBuf>,
}

impl PolicyConfig {
    fn validate(&self) -> Result<(), String> {
        if let Some(ref path) = self.path {
            if !path.exists() {
                return Err(format!("Policy file not found: {}", path.display()));
            }
            if path.extension().and_then(|s| s.to_str()) != Some("toml") {
                return Err(format!("Policy file must be TOML: {}", path.display()));
            }
        }
        Ok(())
    }
}

/// Protection output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProtectionConfig {
    /// Directory where protected outputs are written
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Marker substituted for redacted values
    #[serde(default = "default_redaction_marker")]
    pub redaction_marker: String,

    /// Character used for masking
    #[serde(default = "default_mask_char")]
    pub mask_char: char,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("outputs")
}

fn default_redaction_marker() -> String {
    "[REDACTED]".to_string()
}

fn default_mask_char() -> char {
    '*'
}

impl Default for ProtectionConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            redaction_marker: default_redaction_marker(),
            mask_char: default_mask_char(),
        }
    }
}

impl ProtectionConfig {
    fn validate(&self) -> Result<(), String> {
        if self.redaction_marker.is_empty() {
            return Err("redaction_marker must not be empty".to_string());
        }
        // A marker that is itself a word-character run could be mistaken for
        // data by the leak verifier's boundary matching.
        if self.redaction_marker.chars().all(|c| c.is_alphanumeric()) {
            return Err(
                "redaction_marker should contain a non-alphanumeric delimiter".to_string(),
            );
        }
        Ok(())
    }
}

/// Audit trail configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditConfig {
    /// Enable audit logging
    #[serde(default = "default_audit_enabled")]
    pub enabled: bool,

    /// Audit log file path
    #[serde(default = "default_audit_log_path")]
    pub log_path: PathBuf,

    /// Use JSON format for audit entries
    #[serde(default = "default_audit_json_format")]
    pub json_format: bool,
}

fn default_audit_enabled() -> bool {
    true
}

fn default_audit_log_path() -> PathBuf {
    PathBuf::from("./audit/privguard.log")
}

fn default_audit_json_format() -> bool {
    true
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            enabled: default_audit_enabled(),
            log_path: default_audit_log_path(),
            json_format: default_audit_json_format(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local file logging in addition to the console
    #[serde(default)]
    pub local_enabled: bool,

    /// Directory for local log files
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Rotation policy: daily or hourly
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

fn default_local_path() -> String {
    "./logs".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }
        Ok(())
    }
}
