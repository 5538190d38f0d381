//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for PrivGuard using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// PrivGuard - Offline Sensitive Data Protection
#[derive(Parser, Debug)]
#[command(name = "privguard")]
#[command(version, about, long_about = None)]
#[command(author = "PrivGuard Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "privguard.toml", env = "PRIVGUARD_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "PRIVGUARD_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Detect sensitive data and show the risk summary
    Scan(commands::scan::ScanArgs),

    /// Apply a protection action: redact, mask, or encrypt
    Protect(commands::protect::ProtectArgs),

    /// Decrypt a previously encrypted output file
    Decrypt(commands::decrypt::DecryptArgs),

    /// Check whether protected output still leaks sensitive values
    VerifyRedaction(commands::verify::VerifyArgs),

    /// Validate configuration and policy files
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_scan() {
        let cli = Cli::parse_from(["privguard", "scan", "--input", "report.txt"]);
        assert_eq!(cli.config, "privguard.toml");
        assert!(matches!(cli.command, Commands::Scan(_)));
    }

    #[test]
    fn test_cli_parse_with_config() {
        let cli = Cli::parse_from([
            "privguard",
            "--config",
            "custom.toml",
            "scan",
            "--input",
            "report.txt",
        ]);
        assert_eq!(cli.config, "custom.toml");
    }

    #[test]
    fn test_cli_parse_protect_actions() {
        for action in ["redact", "mask", "encrypt"] {
            let cli = Cli::parse_from([
                "privguard",
                "protect",
                "--input",
                "report.txt",
                "--action",
                action,
            ]);
            assert!(matches!(cli.command, Commands::Protect(_)));
        }
    }

    #[test]
    fn test_cli_rejects_unknown_action() {
        let result = Cli::try_parse_from([
            "privguard",
            "protect",
            "--input",
            "report.txt",
            "--action",
            "shred",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_parse_decrypt_requires_key() {
        let result = Cli::try_parse_from(["privguard", "decrypt", "--input", "report.txt"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_parse_verify_redaction() {
        let cli = Cli::parse_from([
            "privguard",
            "verify-redaction",
            "--original",
            "report.txt",
            "--protected",
            "report.redacted.txt",
        ]);
        assert!(matches!(cli.command, Commands::VerifyRedaction(_)));
    }

    #[test]
    fn test_cli_parse_validate_config() {
        let cli = Cli::parse_from(["privguard", "validate-config"]);
        assert!(matches!(cli.command, Commands::ValidateConfig(_)));
    }

    #[test]
    fn test_cli_parse_init() {
        let cli = Cli::parse_from(["privguard", "init"]);
        assert!(matches!(cli.command, Commands::Init(_)));
    }
}
