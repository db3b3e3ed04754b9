//! `vitae config`: show the effective configuration.

use crate::{
    cli::ConfigCommands,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

pub fn execute(cmd: ConfigCommands, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let payload = match cmd {
        ConfigCommands::Get { key } => lookup(&config, &key)?,
        ConfigCommands::List => {
            output.header("Effective configuration:")?;
            toml::to_string_pretty(&config)
                .map_err(|e| CliError::ConfigError {
                    message: format!("cannot render configuration as TOML: {e}"),
                    source: Some(Box::new(e)),
                })?
                .trim_end()
                .to_owned()
        }
        ConfigCommands::Path => AppConfig::config_path().display().to_string(),
    };
    output.data(&payload)?;
    Ok(())
}

/// Dotted keys mirror the TOML tables, e.g. `store.dir`.
fn lookup(config: &AppConfig, key: &str) -> CliResult<String> {
    let value = match key {
        "defaults.locale" => config.defaults.locale.clone(),
        "output.no_color" => config.output.no_color.to_string(),
        "output.format" => config.output.format.clone(),
        "output.pretty" => config.output.pretty.to_string(),
        "store.dir" => config.store.dir.display().to_string(),
        _ => {
            return Err(CliError::ConfigError {
                message: format!("no configuration key named '{key}'"),
                source: None,
            });
        }
    };
    Ok(value)
}
