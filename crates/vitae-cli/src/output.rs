//! Terminal output.
//!
//! Two channels: status lines (success marks, warnings, headers) go to
//! stderr, and [`OutputManager::data`] writes the command's payload to
//! stdout. A generated document or JSON report can therefore be piped while
//! status stays visible.

use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::{OwoColorize, Style};

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

pub struct OutputManager {
    format: OutputFormat,
    quiet: bool,
    color: bool,
    stderr: Term,
    stdout: Term,
}

impl OutputManager {
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let format = match args.output_format {
            OutputFormat::Auto => OutputFormat::from_config(&config.output.format)
                .unwrap_or(if io::stdout().is_terminal() {
                    OutputFormat::Human
                } else {
                    OutputFormat::Plain
                }),
            explicit => explicit,
        };
        let color =
            !(args.no_color || config.output.no_color || format == OutputFormat::Plain);

        Self {
            format,
            quiet: args.quiet,
            color,
            stderr: Term::stderr(),
            stdout: Term::stdout(),
        }
    }

    /// Command payload on stdout. Printed even with `--quiet`.
    pub fn data(&self, payload: &str) -> io::Result<()> {
        self.stdout.write_line(payload)
    }

    /// Undecorated status line.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        self.status(None, msg, Style::new())
    }

    /// `✓ msg`
    pub fn success(&self, msg: &str) -> io::Result<()> {
        self.status(Some('\u{2713}'), msg, Style::new().green())
    }

    /// `✗ msg`, shown even with `--quiet`.
    pub fn failure(&self, msg: &str) -> io::Result<()> {
        self.write_status(Some('\u{2717}'), msg, Style::new().red())
    }

    /// `⚠ msg`
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        self.status(Some('\u{26a0}'), msg, Style::new().yellow())
    }

    /// `ℹ msg`
    pub fn info(&self, msg: &str) -> io::Result<()> {
        self.status(Some('\u{2139}'), msg, Style::new().blue())
    }

    pub fn header(&self, text: &str) -> io::Result<()> {
        self.status(None, text, Style::new().cyan().bold())
    }

    pub fn supports_color(&self) -> bool {
        self.color
    }

    /// Resolved format; never `Auto`.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    fn status(&self, glyph: Option<char>, msg: &str, style: Style) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.write_status(glyph, msg, style)
    }

    fn write_status(&self, glyph: Option<char>, msg: &str, style: Style) -> io::Result<()> {
        self.stderr.write_line(&self.decorate(glyph, msg, style))
    }

    fn decorate(&self, glyph: Option<char>, msg: &str, style: Style) -> String {
        match (glyph, self.color) {
            (None, false) => msg.to_owned(),
            (None, true) => msg.style(style).to_string(),
            (Some(g), false) => format!("{g} {msg}"),
            (Some(g), true) => format!("{} {}", g.style(style.bold()), msg.style(style)),
        }
    }
}
