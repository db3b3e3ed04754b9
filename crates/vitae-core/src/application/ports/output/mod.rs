//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `vitae-adapters` crate provides implementations.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::application::ApplicationError;
use crate::domain::Document;
use crate::error::VitaeResult;

static DOCUMENT_ID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]{1,64}$").expect("valid document id regex"));

/// Name of a stored document.
///
/// Letters, digits, `-` and `_`, 1 to 64 characters, so it is always safe
/// as a file stem.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct DocumentId(String);

impl DocumentId {
    pub fn new(id: impl Into<String>) -> Result<Self, ApplicationError> {
        let id = id.into();
        if DOCUMENT_ID.is_match(&id) {
            Ok(Self(id))
        } else {
            Err(ApplicationError::InvalidDocumentId(id))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for DocumentId {
    type Err = ApplicationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Port for document persistence.
///
/// Implemented by:
/// - `vitae_adapters::document_store::InMemoryStore` (tests, embedding)
/// - `vitae_adapters::document_store::DirectoryStore` (one JSON file per document)
///
/// ## Design Notes
///
/// - Stores only ever receive validated `Document`s
/// - `get` on a missing id is `ApplicationError::NotFound`
/// - `put` replaces any existing snapshot
#[cfg_attr(test, mockall::automock)]
pub trait DocumentStore: Send + Sync {
    /// Load a document.
    fn get(&self, id: &DocumentId) -> VitaeResult<Document>;

    /// Insert or replace a document.
    fn put(&self, id: &DocumentId, document: &Document) -> VitaeResult<()>;

    /// All stored ids, sorted.
    fn list(&self) -> VitaeResult<Vec<DocumentId>>;

    /// Remove a document.
    fn remove(&self, id: &DocumentId) -> VitaeResult<()>;

    /// Check if a document is stored under `id`.
    fn exists(&self, id: &DocumentId) -> VitaeResult<bool>;
}
