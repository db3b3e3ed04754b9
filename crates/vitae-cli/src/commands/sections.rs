//! Implementation of the `vitae sections` command.

use serde::Serialize;

use vitae_core::domain::{Locale, SectionKind, section_name};
use vitae_core::error::VitaeError;

use crate::{
    cli::{ListFormat, OutputFormat, SectionsArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

#[derive(Debug, Serialize)]
struct Row {
    key: &'static str,
    name: &'static str,
}

pub fn execute(args: SectionsArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let tag = args.locale.unwrap_or(config.defaults.locale);
    let locale = Locale::resolve(&tag);
    let rows = rows(locale);

    let format = args.format.unwrap_or(match output.format() {
        OutputFormat::Json => ListFormat::Json,
        _ => ListFormat::Table,
    });

    match format {
        ListFormat::Table => {
            output.header(&format!("Built-in sections ({locale}):"))?;
            let width = rows.iter().map(|r| r.key.len()).max().unwrap_or(0);
            for row in &rows {
                output.data(&format!("  {:<width$}  {}", row.key, row.name))?;
            }
        }

        ListFormat::List => {
            for row in &rows {
                output.data(row.key)?;
            }
        }

        ListFormat::Json => {
            let json = serde_json::to_string_pretty(&rows).map_err(|e| VitaeError::Internal {
                message: format!("Failed to serialise sections: {e}"),
            })?;
            output.data(&json)?;
        }

        ListFormat::Csv => {
            output.data("key,name")?;
            for row in &rows {
                output.data(&format!("{},{}", row.key, row.name))?;
            }
        }
    }

    Ok(())
}

fn rows(locale: Locale) -> Vec<Row> {
    SectionKind::ALL
        .into_iter()
        .map(|kind| Row {
            key: kind.as_str(),
            name: section_name(kind, locale),
        })
        .collect()
}
