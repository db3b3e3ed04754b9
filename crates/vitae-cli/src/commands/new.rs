//! Implementation of the `vitae new` command.
//!
//! Responsibility: pick the locale, generate (and optionally store) the
//! default document, and write it out. No business logic lives here.

use tracing::{debug, info, instrument};

use vitae_core::{
    application::{ApplicationError, DocumentId},
    domain::{Document, Locale},
    error::VitaeError,
};

use crate::{
    cli::NewArgs,
    config::AppConfig,
    commands::open_service,
    error::{CliResult, IntoCli},
    output::OutputManager,
};

/// Execute the `vitae new` command.
#[instrument(skip_all, fields(locale))]
pub fn execute(args: NewArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let tag = args
        .locale
        .clone()
        .unwrap_or_else(|| config.defaults.locale.clone());
    let locale = Locale::resolve(&tag);
    tracing::Span::current().record("locale", locale.as_str());
    debug!(tag = %tag, "Locale resolved");

    let document = match &args.save {
        Some(id) => {
            let id = DocumentId::new(id).map_err(VitaeError::from)?;
            let document = open_service(&config).create(&id, &tag)?;
            output.success(&format!(
                "Saved '{}' to {}",
                id,
                config.store.dir.display()
            ))?;
            document
        }
        None => vitae_core::create_default_document(&tag),
    };

    let pretty = config.output.pretty && !args.compact;
    let text = render(&document, pretty)?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, format!("{text}\n"))
                .with_cli_context(|| format!("Failed to write '{}'", path.display()))?;
            output.success(&format!(
                "Wrote {} document to {}",
                locale,
                path.display()
            ))?;
        }
        None => output.data(&text)?,
    }

    info!("Default document generated");
    Ok(())
}

fn render(document: &Document, pretty: bool) -> CliResult<String> {
    let text = if pretty {
        serde_json::to_string_pretty(document)
    } else {
        serde_json::to_string(document)
    };
    text.map_err(|e| {
        VitaeError::from(ApplicationError::Serialization {
            reason: e.to_string(),
        })
    })
    .with_cli_context(|| "rendering document")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compact_render_is_single_line() {
        let doc = Document::default_for(Locale::En);
        let text = render(&doc, false).unwrap();
        assert!(!text.contains('\n'));
        let pretty = render(&doc, true).unwrap();
        assert!(pretty.lines().count() > 10);
    }

    #[test]
    fn rendered_default_validates() {
        let doc = Document::default_for(Locale::Pl);
        let raw: serde_json::Value = serde_json::from_str(&render(&doc, true).unwrap()).unwrap();
        assert_eq!(vitae_core::validate_document(&raw).unwrap(), doc);
    }
}
