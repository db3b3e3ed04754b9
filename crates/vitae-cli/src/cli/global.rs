//! Flags shared by every subcommand.
//!
//! Flattened into [`super::Cli`] and marked `global`, so `vitae validate cv.json -vv`
//! and `vitae -vv validate cv.json` mean the same thing.

use std::path::PathBuf;

use clap::{ArgAction, Args, ValueEnum};

#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// More log output: -v info, -vv debug, -vvv trace.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only print errors and command output.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Never emit ANSI colour codes (also set by NO_COLOR).
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,

    /// Read configuration from FILE instead of the platform config dir.
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Rendering of reports and listings.
    ///
    /// `auto` defers to `output.format` in the configuration, then picks
    /// `human` on a terminal and `plain` otherwise.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Auto)]
    pub output_format: OutputFormat,
}

/// How reports and listings are rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Auto,
    /// Coloured, for terminals.
    Human,
    /// No colour, for logs and pipes.
    Plain,
    /// Machine-readable JSON on stdout.
    Json,
}

impl OutputFormat {
    /// Parse the `output.format` configuration value. Unknown names are `None`.
    pub fn from_config(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "human" => Some(Self::Human),
            "plain" => Some(Self::Plain),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}
