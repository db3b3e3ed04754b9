//! Tracing subscriber setup for the `vitae` binary.
//!
//! The library crates only emit events; this is the one place a subscriber
//! is installed. Everything is written to stderr so stdout carries nothing
//! but command output.
//!
//! | Flags       | Level |
//! |-------------|-------|
//! | (none)      | warn  |
//! | `-v`        | info  |
//! | `-vv`       | debug |
//! | `-vvv`      | trace |
//! | `-q`        | error |
//!
//! A set `RUST_LOG` replaces the table entirely.

use std::io::IsTerminal as _;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::GlobalArgs;

/// Crates whose events are shown at the chosen level.
const TARGETS: [&str; 3] = ["vitae", "vitae_core", "vitae_adapters"];

/// Install the global subscriber. Fails if one is already installed.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(from_env) => from_env,
        Err(_) => EnvFilter::try_new(directive(level_for(args)))?,
    };

    let stderr = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!args.no_color && std::io::stderr().is_terminal())
        .with_target(false)
        .without_time();

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("tracing subscriber already set: {e}"))
}

fn level_for(args: &GlobalArgs) -> LevelFilter {
    match (args.quiet, args.verbose) {
        (true, _) => LevelFilter::ERROR,
        (false, 0) => LevelFilter::WARN,
        (false, 1) => LevelFilter::INFO,
        (false, 2) => LevelFilter::DEBUG,
        (false, _) => LevelFilter::TRACE,
    }
}

fn directive(level: LevelFilter) -> String {
    TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;

    fn flags(verbose: u8, quiet: bool) -> GlobalArgs {
        GlobalArgs {
            verbose,
            quiet,
            no_color: true,
            config: None,
            output_format: OutputFormat::Auto,
        }
    }

    #[test]
    fn default_is_warn() {
        assert_eq!(level_for(&flags(0, false)), LevelFilter::WARN);
    }

    #[test]
    fn each_v_lowers_the_threshold() {
        let levels: Vec<_> = (1..=4).map(|v| level_for(&flags(v, false))).collect();
        assert_eq!(
            levels,
            [
                LevelFilter::INFO,
                LevelFilter::DEBUG,
                LevelFilter::TRACE,
                LevelFilter::TRACE
            ]
        );
    }

    #[test]
    fn quiet_beats_verbose() {
        assert_eq!(level_for(&flags(3, true)), LevelFilter::ERROR);
    }

    #[test]
    fn directive_names_every_crate() {
        let d = directive(LevelFilter::DEBUG);
        assert_eq!(
            d.to_lowercase(),
            "vitae=debug,vitae_core=debug,vitae_adapters=debug"
        );
        assert!(EnvFilter::try_new(d).is_ok());
    }
}
