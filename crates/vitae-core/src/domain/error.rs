// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

use crate::domain::diagnostics::{IssueCategory, ValidationErrors};

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (services hand them back unchanged)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    /// A document or section failed its schema. Carries every issue found.
    #[error("Document is invalid: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Column count {0} is outside 1..=5")]
    InvalidColumns(i64),

    #[error("Invalid identifier '{0}': expected lowercase letters and digits")]
    InvalidIdentifier(String),

    // ========================================================================
    // Lookup Errors (404-level equivalent)
    // ========================================================================
    #[error("Unknown section key: {0}")]
    UnknownSection(String),

    #[error("Unsupported locale: {0}")]
    UnsupportedLocale(String),
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Validation(errors) => {
                let mut out: Vec<String> = errors
                    .iter()
                    .take(10)
                    .map(|issue| format!("{issue}"))
                    .collect();
                if errors.len() > 10 {
                    out.push(format!("... and {} more", errors.len() - 10));
                }
                if errors.has_category(IssueCategory::Discriminator) {
                    out.push("A built-in section's `id` must equal its key".into());
                }
                out
            }
            Self::InvalidColumns(_) => vec!["Use a column count between 1 and 5".into()],
            Self::InvalidIdentifier(id) => vec![
                format!("'{id}' is not a valid identifier"),
                "Identifiers use only a-z and 0-9, e.g. 'k9x2m4'".into(),
            ],
            Self::UnknownSection(key) => vec![
                format!("'{key}' is not a built-in section"),
                "Try: vitae sections".into(),
                "User-defined sections live under `sections.custom.<key>`".into(),
            ],
            Self::UnsupportedLocale(code) => vec![
                format!("'{code}' is not a supported locale"),
                "Supported locales: en, pl".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Validation(_) | Self::InvalidColumns(_) | Self::InvalidIdentifier(_) => {
                ErrorCategory::Validation
            }
            Self::UnknownSection(_) | Self::UnsupportedLocale(_) => ErrorCategory::NotFound,
        }
    }

    /// The issue set, if this is a validation failure.
    pub fn validation_errors(&self) -> Option<&ValidationErrors> {
        match self {
            Self::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}
