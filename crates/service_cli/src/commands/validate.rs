//! Validate command implementation
//!
//! Runs loader validation only; no calculation.

use std::io::Write;
use std::path::Path;

use adapter_loader::{LoaderError, RecordIssue};
use infra_config::{OutputFormat, SaccrConfig};
use serde_json::json;
use tracing::info;

use super::open;
use crate::Result;

/// Run the validate command
///
/// Prints the outcome in every case and fails when any record is invalid,
/// so that the exit status reflects the file.
pub fn run(input: &Path, config: &SaccrConfig, out: &mut dyn Write) -> Result<()> {
    info!(input = %input.display(), "validating trade file");

    let loader = open(input)?;
    let records = loader.records().len();
    let outcome = loader.validate();
    let issues: &[RecordIssue] = match &outcome {
        Err(LoaderError::Validation(issues)) => issues,
        _ => &[],
    };

    match config.output_format {
        OutputFormat::Json => {
            let report = json!({
                "input": input.display().to_string(),
                "records": records,
                "valid": issues.is_empty(),
                "issues": issues.iter().map(issue_json).collect::<Vec<_>>(),
            });
            serde_json::to_writer_pretty(&mut *out, &report)?;
            writeln!(out)?;
        }
        OutputFormat::Table => {
            if issues.is_empty() {
                writeln!(out, "{}: {} record(s), all valid", input.display(), records)?;
            } else {
                writeln!(
                    out,
                    "{}: {} record(s), {} issue(s)",
                    input.display(),
                    records,
                    issues.len()
                )?;
                for issue in issues {
                    writeln!(out, "  {}", issue)?;
                }
            }
        }
    }

    Ok(outcome?)
}

fn issue_json(issue: &RecordIssue) -> serde_json::Value {
    json!({
        "index": issue.index,
        "id": issue.id,
        "field": issue.field,
        "message": issue.message,
    })
}
