//! Verify-redaction command implementation
//!
//! Re-detects sensitive values in the original document and checks the
//! protected file for whole-token leaks of any of them.

use super::{write_output, CommandContext};
use crate::protection::verify_quality;
use clap::Args;
use serde_json::json;
use std::path::PathBuf;

/// Arguments for the verify-redaction command
#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// Path to the original document
    #[arg(long)]
    pub original: PathBuf,

    /// Path to the redacted/masked text file
    #[arg(long)]
    pub protected: PathBuf,

    /// Optional path to save the verification report JSON
    #[arg(long)]
    pub json_output: Option<PathBuf>,
}

impl VerifyArgs {
    /// Execute the verify-redaction command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(
            original = %self.original.display(),
            protected = %self.protected.display(),
            "Verifying redaction quality"
        );

        let ctx = CommandContext::load(config_path)?;
        let original_text = crate::extraction::read_document_text(&self.original)?;
        let protected_text = crate::extraction::read_document_text(&self.protected)?;

        let original_findings = ctx.detector.detect(&original_text);
        let quality = verify_quality(&original_findings, &protected_text);

        ctx.audit.log_event(
            "verify_redaction",
            json!({
                "original_file": self.original.file_name().and_then(|n| n.to_str()),
                "protected_file": self.protected.file_name().and_then(|n| n.to_str()),
                "quality_status": quality.status,
                "leak_count": quality.leak_count,
            }),
        )?;

        println!("{}", serde_json::to_string_pretty(&quality)?);

        if let Some(ref json_path) = self.json_output {
            write_output(json_path, &serde_json::to_string_pretty(&quality)?)?;
            println!("Verification report saved to {}", json_path.display());
        }

        Ok(if quality.passed() { 0 } else { 3 })
    }
}
