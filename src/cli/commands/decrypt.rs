//! Decrypt command implementation

use super::{write_output, CommandContext};
use crate::domain::errors::{CryptoError, PrivGuardError};
use crate::protection::{decrypt_text, load_key_file, validate_token_shape};
use clap::Args;
use serde_json::json;
use std::path::PathBuf;

/// Arguments for the decrypt command
#[derive(Args, Debug)]
pub struct DecryptArgs {
    /// Path to the encrypted text file
    #[arg(long)]
    pub input: PathBuf,

    /// Path to the key file
    #[arg(long)]
    pub key_path: PathBuf,

    /// Directory where decrypted output will be written
    /// (defaults to the configured output directory)
    #[arg(long)]
    pub output_dir: Option<PathBuf>,
}

impl DecryptArgs {
    /// Execute the decrypt command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(input = %self.input.display(), "Decrypting");

        let ctx = CommandContext::load(config_path)?;
        let token = crate::extraction::read_document_text(&self.input)?;
        let token = token.trim();

        // Shallow shape check before touching key material.
        if !validate_token_shape(token) {
            return Err(PrivGuardError::Crypto(CryptoError::InvalidToken(
                "input does not look like an encrypted token".to_string(),
            ))
            .into());
        }

        let key = load_key_file(&self.key_path)?;
        let plain_text = decrypt_text(token, &key)?;

        let output_dir = self
            .output_dir
            .clone()
            .unwrap_or_else(|| ctx.config.protection.output_dir.clone());
        let base_name = self
            .input
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("document");
        let output_file = output_dir.join(format!("{base_name}.decrypted.txt"));
        write_output(&output_file, &plain_text)?;

        ctx.audit.log_event(
            "decrypt",
            json!({
                "input_file": self.input.file_name().and_then(|n| n.to_str()),
                "key_file": self.key_path.file_name().and_then(|n| n.to_str()),
                "output_file": output_file.display().to_string(),
            }),
        )?;

        println!(
            "{}",
            serde_json::to_string_pretty(&json!({
                "output_file": output_file.display().to_string()
            }))?
        );

        Ok(0)
    }
}
