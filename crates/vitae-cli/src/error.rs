//! Errors as the user sees them.
//!
//! Every failure a command can hit ends up as a [`CliError`], which knows
//! its exit status, the hints printed under it, and how to render itself
//! for stderr.

use std::error::Error as _;
use std::io;

use owo_colors::{OwoColorize, Style};
use thiserror::Error;

use vitae_core::domain::ValidationErrors;
use vitae_core::error::{ErrorCategory as CoreCategory, VitaeError};

pub type CliResult<T> = Result<T, CliError>;

type BoxedError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
pub enum CliError {
    /// Bad input caught before validation, such as unparsable JSON.
    #[error("Invalid input: {message}")]
    InvalidInput {
        message: String,
        #[source]
        source: Option<BoxedError>,
    },

    /// The document parsed but broke schema rules.
    #[error("{input} is not a valid document ({} issue(s))", .errors.len())]
    InvalidDocument {
        input: String,
        errors: ValidationErrors,
    },

    #[error("{failed} of {total} section(s) in {input} failed validation")]
    InvalidSections {
        input: String,
        failed: usize,
        total: usize,
    },

    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<BoxedError>,
    },

    #[error("{0}")]
    Core(#[from] VitaeError),

    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: io::Error,
    },
}

impl From<io::Error> for CliError {
    fn from(source: io::Error) -> Self {
        Self::IoError {
            message: source.to_string(),
            source,
        }
    }
}

/// Exit status classes. The numeric codes live in [`CliError::exit_code`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    UserError,
    NotFound,
    Configuration,
    Internal,
}

impl CliError {
    /// Lines printed under the headline. For an invalid document these are
    /// the issues themselves, all of them.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidInput { message, .. } => vec![
                format!("Fix the input: {message}"),
                "Run with --help to see accepted arguments".into(),
            ],
            Self::InvalidDocument { errors, .. } => {
                errors.iter().map(ToString::to_string).collect()
            }
            Self::InvalidSections { input, .. } => vec![
                "Sections marked with \u{2717} above need fixing".into(),
                format!("Run 'vitae validate {input}' for the full report"),
            ],
            Self::ConfigError { .. } => vec![
                format!(
                    "The default config file is {}",
                    crate::config::AppConfig::config_path().display()
                ),
                "VITAE_* environment variables override it".into(),
                "'vitae init' writes a fresh one".into(),
            ],
            Self::Core(inner) => inner.suggestions(),
            Self::IoError { .. } => vec![
                "Make sure the path exists and is readable".into(),
                "Check the permissions on it".into(),
            ],
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidInput { .. } | Self::InvalidDocument { .. } | Self::InvalidSections { .. } => {
                ErrorCategory::UserError
            }
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::Core(inner) => match inner.category() {
                CoreCategory::Validation => ErrorCategory::UserError,
                CoreCategory::NotFound => ErrorCategory::NotFound,
                CoreCategory::Configuration => ErrorCategory::Configuration,
                CoreCategory::Internal => ErrorCategory::Internal,
            },
            Self::IoError { source, .. } if source.kind() == io::ErrorKind::NotFound => {
                ErrorCategory::NotFound
            }
            Self::IoError { .. } => ErrorCategory::Internal,
        }
    }

    /// 2 for user mistakes, 3 for missing things, 4 for configuration,
    /// 1 otherwise.
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::Internal => 1,
            ErrorCategory::UserError => 2,
            ErrorCategory::NotFound => 3,
            ErrorCategory::Configuration => 4,
        }
    }

    /// Render for stderr: headline, causes when `verbose`, then the
    /// suggestion (or issue) list. `color` adds ANSI styling.
    pub fn render(&self, verbose: bool, color: bool) -> String {
        let paint = |text: &str, style: Style| {
            if color {
                text.style(style).to_string()
            } else {
                text.to_owned()
            }
        };
        let mut out = format!(
            "\n{} {}\n",
            paint("Error:", Style::new().red().bold()),
            paint(&self.to_string(), Style::new().red())
        );

        if verbose {
            let mut cause = self.source();
            while let Some(err) = cause {
                out += &format!("  Caused by: {}\n", paint(&err.to_string(), Style::new().dimmed()));
                cause = err.source();
            }
        }

        let heading = match self {
            Self::InvalidDocument { .. } => "Issues:",
            _ => "Suggestions:",
        };
        let lines = self.suggestions();
        if !lines.is_empty() {
            out += &format!("\n{}\n", paint(heading, Style::new().yellow().bold()));
            for line in lines {
                out += &format!("  {line}\n");
            }
        }

        if !verbose {
            out += &format!(
                "\n{}\n",
                paint("Use -v / --verbose for more details.", Style::new().dimmed())
            );
        }
        out
    }

    /// Emit one event at a severity matching the category.
    pub fn log(&self) {
        let code = self.exit_code();
        match self.category() {
            ErrorCategory::UserError | ErrorCategory::NotFound => {
                tracing::warn!(code, "{self}")
            }
            ErrorCategory::Configuration | ErrorCategory::Internal => {
                tracing::error!(code, "{self}")
            }
        }
        if let Some(source) = self.source() {
            tracing::debug!(%source, "caused by");
        }
    }
}

/// `.with_cli_context(|| "reading cv.json")` on fallible calls.
pub trait IntoCli<T> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>;
}

impl<T> IntoCli<T> for io::Result<T> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|source| CliError::IoError {
            message: f().into(),
            source,
        })
    }
}

impl<T> IntoCli<T> for Result<T, VitaeError> {
    /// Core errors describe themselves; the context is not used.
    fn with_cli_context<F, S>(self, _: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(CliError::Core)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitae_core::application::ApplicationError;

    fn invalid_document() -> CliError {
        let raw = serde_json::json!({ "basics": 1 });
        let errors = vitae_core::validate_document(&raw).unwrap_err();
        CliError::InvalidDocument {
            input: "cv.json".into(),
            errors,
        }
    }

    fn io_failure(kind: io::ErrorKind) -> CliError {
        CliError::IoError {
            message: "reading cv.json".into(),
            source: io::Error::new(kind, "denied"),
        }
    }

    #[test]
    fn invalid_document_lists_every_issue() {
        let err = invalid_document();
        let CliError::InvalidDocument { errors, .. } = &err else {
            unreachable!()
        };
        assert_eq!(err.suggestions().len(), errors.len());
        assert!(err.suggestions().iter().any(|s| s.starts_with("basics")));
    }

    #[test]
    fn missing_stored_document_points_at_new() {
        let err = CliError::Core(ApplicationError::NotFound { id: "cv".into() }.into());
        assert!(err.suggestions().iter().any(|s| s.contains("vitae new")));
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn exit_codes_by_category() {
        let bad_input = CliError::InvalidInput {
            message: "not json".into(),
            source: None,
        };
        let bad_config = CliError::ConfigError {
            message: "x".into(),
            source: None,
        };
        assert_eq!(invalid_document().exit_code(), 2);
        assert_eq!(bad_input.exit_code(), 2);
        assert_eq!(io_failure(io::ErrorKind::NotFound).exit_code(), 3);
        assert_eq!(bad_config.exit_code(), 4);
        assert_eq!(io_failure(io::ErrorKind::Other).exit_code(), 1);
    }

    #[test]
    fn plain_render_lists_issues() {
        let s = invalid_document().render(false, false);
        assert!(s.contains("Error: cv.json is not a valid document"));
        assert!(s.contains("Issues:"));
        assert!(s.contains("--verbose"));
    }

    #[test]
    fn verbose_render_shows_cause() {
        let s = io_failure(io::ErrorKind::PermissionDenied).render(true, false);
        assert!(s.contains("Caused by: denied"));
        assert!(!s.contains("--verbose"));
        assert!(!s.contains('\u{1b}'));
    }

    #[test]
    fn colour_render_styles_headline() {
        let s = invalid_document().render(false, true);
        assert!(s.contains('\u{1b}'));
        assert!(s.contains("cv.json is not a valid document"));
    }

    #[test]
    fn io_context_replaces_message() {
        let result: io::Result<()> = Err(io::Error::new(io::ErrorKind::NotFound, "missing"));
        let err = result.with_cli_context(|| "reading document").unwrap_err();
        assert!(matches!(err, CliError::IoError { ref message, .. } if message == "reading document"));
    }
}
