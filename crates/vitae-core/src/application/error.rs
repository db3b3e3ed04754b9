//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Schema violations are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ValidationErrors;
use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// No document is stored under the id.
    #[error("Document '{id}' not found")]
    NotFound { id: String },

    /// A document is already stored under the id.
    #[error("Document '{id}' already exists")]
    AlreadyExists { id: String },

    /// The id cannot name a stored document.
    #[error("Invalid document id '{0}'")]
    InvalidDocumentId(String),

    /// A stored document no longer passes validation.
    #[error("Stored document '{id}' is invalid: {errors}")]
    CorruptDocument { id: String, errors: ValidationErrors },

    /// Store access failed (lock poisoned, etc.).
    #[error("Document store error")]
    StoreLockError,

    /// Reading or writing backing storage failed.
    #[error("Storage error at {path}: {reason}")]
    Storage { path: PathBuf, reason: String },

    /// A document could not be encoded or decoded.
    #[error("Serialization failed: {reason}")]
    Serialization { reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::NotFound { id } => vec![
                format!("No document named '{}'", id),
                "Create one with: vitae new --save <ID>".into(),
            ],
            Self::AlreadyExists { id } => vec![
                format!("'{}' is already taken", id),
                "Choose a different id or remove the existing document".into(),
            ],
            Self::InvalidDocumentId(_) => vec![
                "Ids use letters, digits, '-' and '_' (at most 64 characters)".into(),
            ],
            Self::CorruptDocument { errors, .. } => {
                let mut out = vec!["The stored file was edited outside vitae".into()];
                out.extend(errors.iter().take(5).map(|issue| issue.to_string()));
                out
            }
            Self::StoreLockError => vec![
                "The document store is locked".into(),
                "Try again in a moment".into(),
            ],
            Self::Storage { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that the store directory exists and is writable".into(),
            ],
            Self::Serialization { .. } => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::NotFound { .. } => ErrorCategory::NotFound,
            Self::AlreadyExists { .. }
            | Self::InvalidDocumentId(_)
            | Self::CorruptDocument { .. } => ErrorCategory::Validation,
            Self::StoreLockError | Self::Storage { .. } | Self::Serialization { .. } => {
                ErrorCategory::Internal
            }
        }
    }
}
