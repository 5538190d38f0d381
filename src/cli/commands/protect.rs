//! Protect command implementation
//!
//! One-step protection: redact or mask in place with leak verification,
//! or encrypt the whole document with a freshly generated key.

use super::{write_output, CommandContext};
use crate::domain::protection::{ProtectionAction, RedactionQuality};
use crate::protection::{save_key_file, EncryptionKey, Protector};
use clap::Args;
use serde::Serialize;
use serde_json::json;
use std::path::PathBuf;

/// Arguments for the protect command
#[derive(Args, Debug)]
pub struct ProtectArgs {
    /// Path to a supported file (.txt/.md/.csv/.log)
    #[arg(long)]
    pub input: PathBuf,

    /// Protection action to apply
    #[arg(long, value_enum)]
    pub action: ProtectAction,

    /// Directory where protected output will be written
    /// (defaults to the configured output directory)
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Optional key file location for the encrypt action
    #[arg(long)]
    pub key_path: Option<PathBuf>,
}

/// CLI-level protection action selector
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ProtectAction {
    Redact,
    Mask,
    Encrypt,
}

impl From<ProtectAction> for ProtectionAction {
    fn from(action: ProtectAction) -> Self {
        match action {
            ProtectAction::Redact => ProtectionAction::Redact,
            ProtectAction::Mask => ProtectionAction::Mask,
            ProtectAction::Encrypt => ProtectionAction::Encrypt,
        }
    }
}

/// Console/JSON response for a protect run
#[derive(Debug, Serialize)]
struct ProtectResponse {
    action: ProtectionAction,
    output_file: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    key_file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    quality: Option<RedactionQuality>,
}

impl ProtectArgs {
    /// Execute the protect command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let action: ProtectionAction = self.action.into();
        tracing::info!(input = %self.input.display(), %action, "Applying protection");

        let ctx = CommandContext::load(config_path)?;
        let text = crate::extraction::read_document_text(&self.input)?;

        let output_dir = self
            .output_dir
            .clone()
            .unwrap_or_else(|| ctx.config.protection.output_dir.clone());
        let base_name = self
            .input
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("document");

        let protector = Protector::new(&ctx.config.protection);

        let response = match action {
            ProtectionAction::Redact | ProtectionAction::Mask => {
                let findings = ctx.detector.detect(&text);
                let result = if action == ProtectionAction::Redact {
                    protector.redact(&text, &findings)
                } else {
                    protector.mask(&text, &findings)
                };

                let suffix = if action == ProtectionAction::Redact {
                    "redacted"
                } else {
                    "masked"
                };
                let output_file = output_dir.join(format!("{base_name}.{suffix}.txt"));
                write_output(&output_file, &result.output)?;

                let quality = result.quality.expect("redact/mask always verify");
                ctx.audit.log_event(
                    &format!("protect_{action}"),
                    json!({
                        "filename": self.input.file_name().and_then(|n| n.to_str()),
                        "output_file": output_file.display().to_string(),
                        "quality_status": quality.status,
                        "leak_count": quality.leak_count,
                    }),
                )?;

                ProtectResponse {
                    action,
                    output_file: output_file.display().to_string(),
                    key_file: None,
                    quality: Some(quality),
                }
            }
            ProtectionAction::Encrypt => {
                let key = EncryptionKey::generate();
                let key_path = self
                    .key_path
                    .clone()
                    .unwrap_or_else(|| output_dir.join(format!("{base_name}.key")));
                save_key_file(&key, &key_path)?;

                let result = protector.encrypt(&text, &key)?;
                let output_file = output_dir.join(format!("{base_name}.encrypted.txt"));
                write_output(&output_file, &result.output)?;

                ctx.audit.log_event(
                    "protect_encrypt",
                    json!({
                        "filename": self.input.file_name().and_then(|n| n.to_str()),
                        "output_file": output_file.display().to_string(),
                        "key_file": key_path.display().to_string(),
                    }),
                )?;

                ProtectResponse {
                    action,
                    output_file: output_file.display().to_string(),
                    key_file: Some(key_path.display().to_string()),
                    quality: None,
                }
            }
        };

        println!("{}", serde_json::to_string_pretty(&response)?);

        // A failed verification is visible in the response; reflect it in
        // the exit code as well so scripts can gate on it.
        let verification_failed = response
            .quality
            .as_ref()
            .is_some_and(|q| !q.passed());
        Ok(if verification_failed { 3 } else { 0 })
    }
}
