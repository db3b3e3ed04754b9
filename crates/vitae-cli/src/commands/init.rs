//! `vitae init`: write the built-in defaults as a TOML file.

use std::{fs, path::PathBuf};

use crate::{
    cli::InitArgs,
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// `target` is the global `--config` path, if one was given.
pub fn execute(args: InitArgs, target: Option<PathBuf>, output: OutputManager) -> CliResult<()> {
    let path = target.unwrap_or_else(AppConfig::config_path);

    if path.exists() && !args.force {
        output.warning(&format!(
            "{} already exists; pass --force to replace it",
            path.display()
        ))?;
        return Ok(());
    }

    let contents =
        toml::to_string_pretty(&AppConfig::default()).map_err(|e| CliError::ConfigError {
            message: format!("cannot render default configuration: {e}"),
            source: Some(Box::new(e)),
        })?;

    // A bare file name has an empty parent.
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)
            .with_cli_context(|| format!("creating {}", dir.display()))?;
    }
    fs::write(&path, contents).with_cli_context(|| format!("writing {}", path.display()))?;

    output.success(&format!("Wrote {}", path.display()))?;
    Ok(())
}
