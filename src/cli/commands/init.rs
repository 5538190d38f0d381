//! Init command implementation
//!
//! Generates a starter configuration file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "privguard.toml")]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing PrivGuard configuration");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2); // Configuration error exit code
        }

        match fs::write(&self.output, Self::generate_config()) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your settings", self.output);
                println!("  2. Optionally point [policy] path at a custom policy TOML");
                println!("  3. Validate configuration: privguard validate-config");
                println!("  4. Run a scan: privguard scan --input document.txt");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {e}");
                Ok(5) // Fatal error exit code
            }
        }
    }

    /// Generate the starter configuration
    fn generate_config() -> String {
        r#"# PrivGuard Configuration File
# Offline Sensitive Data Protection

[application]
# Log level (trace, debug, info, warn, error)
log_level = "info"

[policy]
# Path to a custom detection/risk policy TOML.
# When unset, the policy embedded in the binary is used.
# path = "policies/privguard_policy.toml"

[protection]
# Directory where protected outputs are written
output_dir = "outputs"

# Marker substituted for redacted values
redaction_marker = "[REDACTED]"

# Character used for masking
mask_char = "*"

[audit]
# Append-only event log; sensitive values are stored as SHA-256 hashes
enabled = true
log_path = "./audit/privguard.log"
json_format = true

[logging]
# Enable local file logging in addition to the console
local_enabled = false
local_path = "./logs"
local_rotation = "daily"
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_config_parses_and_validates() {
        let content = InitArgs::generate_config();
        let config: crate::config::PrivGuardConfig = toml::from_str(&content).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.application.log_level, "info");
    }

    #[test]
    fn test_init_args_defaults() {
        let args = InitArgs {
            output: "privguard.toml".to_string(),
            force: false,
        };
        assert_eq!(args.output, "privguard.toml");
        assert!(!args.force);
    }
}
