//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "vitae",
    bin_name = "vitae",
    version  = env!("CARGO_PKG_VERSION"),
    about    = "Validate resume documents and generate localized defaults",
    long_about = "Vitae checks JSON resume documents against the resume schema, \
                  reporting every problem with its path, and generates \
                  default documents with section names in English or Polish.",
    after_help = "EXAMPLES:\n\
        \x20 vitae new --locale pl-PL --output cv.json\n\
        \x20 vitae validate cv.json\n\
        \x20 cat cv.json | vitae validate - --sections\n\
        \x20 vitae sections --locale pl\n\
        \x20 vitae completions bash > /usr/share/bash-completion/completions/vitae",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a default document.
    #[command(
        visible_alias = "n",
        about = "Generate a default resume document",
        after_help = "EXAMPLES:\n\
            \x20 vitae new\n\
            \x20 vitae new --locale pl-PL --output cv.json\n\
            \x20 vitae new --save jane --compact"
    )]
    New(NewArgs),

    /// Validate a document.
    #[command(
        visible_alias = "check",
        about = "Validate a resume document",
        after_help = "EXAMPLES:\n\
            \x20 vitae validate cv.json\n\
            \x20 vitae validate cv.json --format json\n\
            \x20 cat cv.json | vitae validate - --sections"
    )]
    Validate(ValidateArgs),

    /// List the built-in sections.
    #[command(
        visible_alias = "ls",
        about = "List built-in sections with localized names",
        after_help = "EXAMPLES:\n\
            \x20 vitae sections\n\
            \x20 vitae sections --locale pl --format csv"
    )]
    Sections(SectionsArgs),

    /// Initialise a Vitae configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 vitae init\n\
            \x20 vitae init --force"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 vitae completions bash > ~/.local/share/bash-completion/completions/vitae\n\
            \x20 vitae completions zsh  > ~/.zfunc/_vitae\n\
            \x20 vitae completions fish > ~/.config/fish/completions/vitae.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the Vitae configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 vitae config get defaults.locale\n\
            \x20 vitae config list\n\
            \x20 vitae config path"
    )]
    Config(ConfigCommands),
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `vitae new`.
#[derive(Debug, Args)]
pub struct NewArgs {
    /// Locale tag for section names, e.g. `en-US` or `pl-PL`.
    ///
    /// Only the first two characters matter; unsupported tags fall back to
    /// English.
    #[arg(
        short = 'l',
        long = "locale",
        value_name = "TAG",
        help = "Locale tag (default: defaults.locale from config)"
    )]
    pub locale: Option<String>,

    /// Write the document to a file instead of stdout.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        help = "Write to FILE instead of stdout"
    )]
    pub output: Option<PathBuf>,

    /// Also store the document under this id in the store directory.
    #[arg(long = "save", value_name = "ID", help = "Save to the document store as ID")]
    pub save: Option<String>,

    /// Emit single-line JSON.
    #[arg(long = "compact", help = "Emit compact JSON")]
    pub compact: bool,
}

// ── validate ──────────────────────────────────────────────────────────────────

/// Arguments for `vitae validate`.
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Document to validate; `-` reads stdin.
    #[arg(value_name = "FILE", help = "JSON document to validate ('-' for stdin)")]
    pub input: PathBuf,

    /// Report format.
    #[arg(
        short = 'f',
        long = "format",
        value_enum,
        help = "Report format (default: follows --output-format)"
    )]
    pub format: Option<ReportFormat>,

    /// Validate every section on its own and report each.
    #[arg(long = "sections", help = "Report per-section status")]
    pub sections: bool,
}

/// Output format for the `validate` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// One line per issue.
    Human,
    /// A JSON report on stdout.
    Json,
}

// ── sections ──────────────────────────────────────────────────────────────────

/// Arguments for `vitae sections`.
#[derive(Debug, Args)]
pub struct SectionsArgs {
    /// Locale tag for the names.
    #[arg(short = 'l', long = "locale", value_name = "TAG", help = "Locale tag")]
    pub locale: Option<String>,

    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        help = "Output format (default: table, or json with --output-format json)"
    )]
    pub format: Option<ListFormat>,
}

/// Output format for the `sections` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One key per line.
    List,
    /// JSON array.
    Json,
    /// CSV rows.
    Csv,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `vitae init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `vitae completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `vitae config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.locale`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the default configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_new_with_flags() {
        let cli = Cli::parse_from([
            "vitae", "new", "--locale", "pl-PL", "--save", "jane", "--compact",
        ]);
        let Commands::New(args) = cli.command else {
            panic!("expected new");
        };
        assert_eq!(args.locale.as_deref(), Some("pl-PL"));
        assert_eq!(args.save.as_deref(), Some("jane"));
        assert!(args.compact);
        assert!(args.output.is_none());
    }

    #[test]
    fn parse_validate_stdin() {
        let cli = Cli::parse_from(["vitae", "validate", "-", "--format", "json", "--sections"]);
        let Commands::Validate(args) = cli.command else {
            panic!("expected validate");
        };
        assert_eq!(args.input, PathBuf::from("-"));
        assert_eq!(args.format, Some(ReportFormat::Json));
        assert!(args.sections);
    }

    #[test]
    fn sections_alias() {
        let cli = Cli::parse_from(["vitae", "ls", "--format", "csv"]);
        assert!(matches!(
            cli.command,
            Commands::Sections(SectionsArgs {
                format: Some(ListFormat::Csv),
                ..
            })
        ));
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from(["vitae", "sections", "-vv", "--no-color"]);
        assert_eq!(cli.global.verbose, 2);
        assert!(cli.global.no_color);
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["vitae", "-q", "-v", "sections"]).is_err());
    }

    #[test]
    fn validate_requires_input() {
        assert!(Cli::try_parse_from(["vitae", "validate"]).is_err());
    }
}
