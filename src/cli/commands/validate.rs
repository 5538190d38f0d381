//! Validate config command implementation
//!
//! Loads the configuration file and the policy document it points at,
//! failing fast on anything a scan would later trip over.

use crate::config::{load_config, load_config_or_default};
use clap::Args;
use std::path::Path;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration: {config_path}");
        println!();

        let config = if Path::new(config_path).exists() {
            match load_config(config_path) {
                Ok(c) => {
                    println!("✅ Configuration file loaded successfully");
                    c
                }
                Err(e) => {
                    println!("❌ Failed to load configuration file");
                    println!("   Error: {e}");
                    return Ok(2); // Configuration error exit code
                }
            }
        } else {
            println!("ℹ️  No configuration file found, validating defaults");
            match load_config_or_default(config_path) {
                Ok(c) => c,
                Err(e) => {
                    println!("❌ Default configuration invalid");
                    println!("   Error: {e}");
                    return Ok(2);
                }
            }
        };

        let policy = match config.load_policy() {
            Ok(p) => {
                println!("✅ Policy loaded and validated");
                p
            }
            Err(e) => {
                println!("❌ Policy validation failed");
                println!("   Error: {e}");
                return Ok(2);
            }
        };

        println!();
        println!("Configuration Summary:");
        println!("  Log Level: {}", config.application.log_level);
        println!(
            "  Policy Source: {}",
            config
                .policy
                .path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "embedded default".to_string())
        );
        println!("  Output Dir: {}", config.protection.output_dir.display());
        println!(
            "  Redaction Marker: {}",
            config.protection.redaction_marker
        );
        println!("  Audit Enabled: {}", config.audit.enabled);
        println!();
        println!("Policy Summary:");
        println!("  Entity Kinds: {}", policy.detection.patterns.len());
        println!(
            "  Risk Thresholds: medium ≥ {}, high ≥ {}",
            policy.risk.medium_threshold, policy.risk.high_threshold
        );
        for (name, weight) in &policy.risk.weights {
            println!("  Weight {name:14} {weight:>3}");
        }
        println!();

        Ok(0)
    }
}
