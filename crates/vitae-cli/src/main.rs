//! `vitae`: check resume documents and generate localized starting points.
//!
//! Exit status: 0 on success, 2 for a bad argument or invalid document,
//! 3 when a file or stored document is missing, 4 for configuration
//! problems, and 1 for anything else.

use std::io::IsTerminal as _;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info, instrument};

use crate::{
    cli::{Cli, Commands},
    config::AppConfig,
    error::{CliError, CliResult},
    logging::init_logging,
    output::OutputManager,
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;

fn main() -> ExitCode {
    let _ = dotenvy::dotenv();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // `--help` and `--version` land here too, on stdout with status 0.
        Err(e) => {
            // If stdout or stderr is gone there is nowhere left to report it.
            let _ = e.print();
            return ExitCode::from(if e.use_stderr() { 2 } else { 0 });
        }
    };

    if let Err(e) = init_logging(&cli.global) {
        eprintln!("Failed to initialise logging: {e}");
        return ExitCode::from(1);
    }
    debug!(
        command = ?cli.command,
        verbose = cli.global.verbose,
        quiet = cli.global.quiet,
        "starting"
    );

    // `init` creates the file `--config` points at, so it cannot load it.
    let config = if matches!(cli.command, Commands::Init(_)) {
        AppConfig::default()
    } else {
        match AppConfig::load(cli.global.config.as_ref()) {
            Ok(config) => config,
            Err(e) => {
                tracing::error!("configuration: {e:#}");
                eprintln!("Error: {e:#}");
                return ExitCode::from(4);
            }
        }
    };

    let output = OutputManager::new(&cli.global, &config);
    let verbose = cli.global.verbose > 0;
    let color = output.supports_color();

    match run(cli, config, output) {
        Ok(()) => {
            info!("done");
            ExitCode::SUCCESS
        }
        Err(e) => handle_error(e, verbose, color),
    }
}

/// Route the parsed subcommand to its handler.
#[instrument(skip_all)]
fn run(cli: Cli, config: AppConfig, output: OutputManager) -> CliResult<()> {
    match cli.command {
        Commands::New(cmd) => commands::new::execute(cmd, config, output),
        Commands::Validate(cmd) => commands::validate::execute(cmd, config, output),
        Commands::Sections(cmd) => commands::sections::execute(cmd, config, output),
        Commands::Init(cmd) => commands::init::execute(cmd, cli.global.config, output),
        Commands::Completions(cmd) => commands::completions::execute(cmd),
        Commands::Config(cmd) => commands::config::execute(cmd, config, output),
    }
}

/// Report `err` on stderr and turn it into the process exit code.
fn handle_error(err: CliError, verbose: bool, color: bool) -> ExitCode {
    err.log();
    let color = color && std::io::stderr().is_terminal();
    eprint!("{}", err.render(verbose, color));
    ExitCode::from(err.exit_code())
}
