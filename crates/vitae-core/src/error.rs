//! [`VitaeError`]: the one error type crossing the crate boundary.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::{DomainError, ValidationErrors};

#[derive(Debug, Error, Clone)]
pub enum VitaeError {
    /// Schema violations and unknown section keys.
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Store failures and lookups by id.
    #[error("{0}")]
    Application(#[from] ApplicationError),

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl VitaeError {
    /// Hints shown under the error message.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Configuration { message } => vec![
                format!("Configuration issue: {}", message),
                "Check your config file and VITAE_* environment variables".into(),
            ],
            Self::Internal { .. } => vec![
                "This appears to be a bug in Vitae".into(),
                "Please report it together with the input document".into(),
            ],
        }
    }

    /// Coarse class, used by the CLI to pick an exit status.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::NotFound => ErrorCategory::NotFound,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
            Self::Configuration { .. } => ErrorCategory::Configuration,
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }

    /// The issue set behind a validation failure, wherever it was raised.
    pub fn validation_errors(&self) -> Option<&ValidationErrors> {
        match self {
            Self::Domain(e) => e.validation_errors(),
            Self::Application(ApplicationError::CorruptDocument { errors, .. }) => Some(errors),
            _ => None,
        }
    }

    /// Only lock contention in the store clears up by itself.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Application(ApplicationError::StoreLockError))
    }
}

impl From<ValidationErrors> for VitaeError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Domain(DomainError::Validation(errors))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Configuration,
    Internal,
}

pub type VitaeResult<T> = Result<T, VitaeError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FieldPath, IssueKind, ValidationIssue};

    fn invalid() -> ValidationErrors {
        ValidationErrors::from(ValidationIssue::new(
            FieldPath::root().key("basics").key("email"),
            IssueKind::InvalidFormat {
                format: "email address",
                found: "nope".into(),
            },
        ))
    }

    #[test]
    fn validation_errors_map_to_validation_category() {
        let err = VitaeError::from(invalid());
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert_eq!(err.validation_errors().map(ValidationErrors::len), Some(1));
        assert!(!err.is_retryable());
    }

    #[test]
    fn unknown_section_is_not_found() {
        let err = VitaeError::from(DomainError::UnknownSection("talks".into()));
        assert_eq!(err.category(), ErrorCategory::NotFound);
    }

    #[test]
    fn lock_errors_are_retryable() {
        let err = VitaeError::from(ApplicationError::StoreLockError);
        assert!(err.is_retryable());
        assert_eq!(err.category(), ErrorCategory::Internal);
    }
}
