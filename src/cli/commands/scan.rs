//! Scan command implementation
//!
//! Extracts text from the input document, detects sensitive entities,
//! classifies the disclosure risk, and renders a console summary.

use super::{write_output, CommandContext};
use crate::audit::hash_sensitive_value;
use crate::domain::finding::FindingSet;
use crate::domain::risk::RiskSummary;
use clap::Args;
use serde::Serialize;
use serde_json::json;
use std::path::PathBuf;

/// Arguments for the scan command
#[derive(Args, Debug)]
pub struct ScanArgs {
    /// Path to a supported file (.txt/.md/.csv/.log)
    #[arg(long)]
    pub input: PathBuf,

    /// Optional path to save the JSON scan report
    #[arg(long)]
    pub json_output: Option<PathBuf>,

    /// Optional path to save the extracted text
    #[arg(long)]
    pub extracted_output: Option<PathBuf>,
}

/// Full scan report written by `--json-output`
#[derive(Debug, Serialize)]
pub struct ScanReport {
    pub input_file: String,
    pub extracted_text: String,
    pub findings: FindingSet,
    pub risk: RiskSummary,
}

impl ScanArgs {
    /// Execute the scan command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(input = %self.input.display(), "Starting scan");

        let ctx = CommandContext::load(config_path)?;
        let text = crate::extraction::read_document_text(&self.input)?;

        let findings = ctx.detector.detect(&text);
        let risk = ctx.classifier.classify(&findings);

        render_summary(&findings, &risk);

        ctx.audit.log_event(
            "scan",
            json!({
                "filename": self.input.file_name().and_then(|n| n.to_str()),
                "risk_level": risk.level.to_string(),
                "risk_score": risk.score,
                "total_sensitive_items": findings.total(),
                "value_hashes": findings
                    .iter()
                    .flat_map(|(_, entries)| entries.iter())
                    .map(|f| hash_sensitive_value(&f.value))
                    .collect::<Vec<_>>(),
            }),
        )?;

        if let Some(ref extracted_path) = self.extracted_output {
            write_output(extracted_path, &text)?;
            println!("Extracted text saved to {}", extracted_path.display());
        }

        if let Some(ref json_path) = self.json_output {
            let report = ScanReport {
                input_file: self.input.display().to_string(),
                extracted_text: text,
                findings,
                risk,
            };
            write_output(json_path, &serde_json::to_string_pretty(&report)?)?;
            println!("Scan report saved to {}", json_path.display());
        }

        Ok(0)
    }
}

/// Render the risk summary to the console
fn render_summary(findings: &FindingSet, risk: &RiskSummary) {
    println!();
    println!("🔍 SCAN SUMMARY");
    println!("───────────────────────────────────────────────");
    for (kind, entries) in findings.iter() {
        println!("  {:14} {:>4}", kind.label(), entries.len());
    }
    println!("───────────────────────────────────────────────");
    println!("  Risk score: {} / 100", risk.score);
    println!("  Risk level: {}", risk.level);
    println!();
    println!("📋 RECOMMENDATIONS");
    for insight in &risk.insights {
        println!("  • {insight}");
    }
    println!();
}
