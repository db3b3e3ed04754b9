//! Implementation of the `vitae validate` command.
//!
//! Exit status carries the verdict: 0 when the document is valid, 2 with
//! every issue listed when it is not.

use std::path::Path;

use serde_json::{Value, json};
use tracing::{debug, instrument};

use vitae_core::domain::SectionReport;
use vitae_core::error::VitaeError;

use crate::{
    cli::{OutputFormat, ReportFormat, ValidateArgs},
    commands::open_service,
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

const STDIN: &str = "-";

#[instrument(skip_all, fields(input = %args.input.display()))]
pub fn execute(args: ValidateArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let (label, raw) = read_input(&args.input)?;
    let format = args.format.unwrap_or(match output.format() {
        OutputFormat::Json => ReportFormat::Json,
        _ => ReportFormat::Human,
    });
    let service = open_service(&config);

    if args.sections {
        let reports = service.validate_sections(&raw);
        return report_sections(&label, &reports, format, &output);
    }

    match service.validate(&raw) {
        Ok(document) => {
            debug!(custom = document.sections.custom.len(), "Document accepted");
            match format {
                ReportFormat::Human => {
                    output.success(&format!("{label} is a valid document"))?;
                    if !document.sections.custom.is_empty() {
                        output.info(&format!(
                            "{} custom section(s)",
                            document.sections.custom.len()
                        ))?;
                    }
                }
                ReportFormat::Json => {
                    output.data(&to_json(&json!({ "valid": true, "issues": [] }))?)?
                }
            }
            Ok(())
        }
        Err(err) => {
            let Some(errors) = err.validation_errors().cloned() else {
                return Err(err.into());
            };
            if format == ReportFormat::Json {
                output.data(&to_json(&json!({ "valid": false, "issues": errors.issues() }))?)?;
            }
            Err(CliError::InvalidDocument {
                input: label,
                errors,
            })
        }
    }
}

fn report_sections(
    label: &str,
    reports: &[SectionReport],
    format: ReportFormat,
    output: &OutputManager,
) -> CliResult<()> {
    match format {
        ReportFormat::Human => {
            for report in reports {
                match report.errors() {
                    None => output.success(&report.key.to_string())?,
                    Some(errors) => {
                        output.failure(&format!("{} ({} issue(s))", report.key, errors.len()))?;
                        for issue in errors.iter() {
                            output.print(&format!("    {issue}"))?;
                        }
                    }
                }
            }
        }
        ReportFormat::Json => {
            let rows: Vec<Value> = reports
                .iter()
                .map(|report| {
                    json!({
                        "section": report.key,
                        "valid": report.is_valid(),
                        "issues": report.errors().map(|e| e.issues()).unwrap_or_default(),
                    })
                })
                .collect();
            output.data(&to_json(&Value::Array(rows))?)?;
        }
    }

    let failed = reports.iter().filter(|r| !r.is_valid()).count();
    if failed > 0 {
        return Err(CliError::InvalidSections {
            input: label.to_string(),
            failed,
            total: reports.len(),
        });
    }
    Ok(())
}

/// Read and parse `input`; `-` means stdin.
fn read_input(input: &Path) -> CliResult<(String, Value)> {
    let (label, text) = if input == Path::new(STDIN) {
        let text = std::io::read_to_string(std::io::stdin())
            .with_cli_context(|| "Failed to read stdin")?;
        ("<stdin>".to_string(), text)
    } else {
        let text = std::fs::read_to_string(input)
            .with_cli_context(|| format!("Failed to read '{}'", input.display()))?;
        (input.display().to_string(), text)
    };

    let raw = serde_json::from_str(&text).map_err(|e| CliError::InvalidInput {
        message: format!("{label} is not valid JSON: {e}"),
        source: Some(Box::new(e)),
    })?;
    Ok((label, raw))
}

fn to_json(value: &Value) -> CliResult<String> {
    serde_json::to_string_pretty(value).map_err(|e| {
        VitaeError::Internal {
            message: format!("Failed to serialise report: {e}"),
        }
        .into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unreadable_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_input(&dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, CliError::IoError { .. }));
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn malformed_json_is_invalid_input() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cv.json");
        std::fs::write(&path, "{ nope").unwrap();
        let err = read_input(&path).unwrap_err();
        assert!(matches!(err, CliError::InvalidInput { .. }));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn file_label_is_its_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cv.json");
        std::fs::write(&path, "{}").unwrap();
        let (label, raw) = read_input(&path).unwrap();
        assert_eq!(label, path.display().to_string());
        assert!(raw.is_object());
    }
}
