//! Résumé documents: schema validation and localized empty defaults.
//!
//! `domain` holds the document model, the section schemas and the
//! validator; it performs no I/O. `application` wraps it in
//! [`application::DocumentService`], which persists documents through the
//! [`application::DocumentStore`] port. Stores live in `vitae-adapters`.
//!
//! ## Example
//!
//! ```rust
//! use vitae_core::{create_default_document, validate_document};
//!
//! let document = create_default_document("pl-PL");
//! assert_eq!(document.sections.education.attrs.name, "Edukacja");
//!
//! let validated = validate_document(&document.to_json()).unwrap();
//! assert_eq!(validated, document);
//! ```

pub mod application;
pub mod domain;
pub mod error;

use serde_json::Value;

use crate::domain::{Document, DomainValidator, ValidationErrors};

pub mod prelude {
    pub use crate::application::{DocumentId, DocumentService, DocumentStore};
    pub use crate::domain::{
        AnySection, Document, DomainValidator, FieldPath, IssueCategory, ItemId, Locale,
        SectionKey, SectionKind, SectionReport, ValidationErrors, ValidationIssue,
    };
    pub use crate::error::{VitaeError, VitaeResult};
    pub use crate::{create_default_document, validate_document};
}

/// Validate a raw document. On failure every issue is reported with its
/// path, e.g. `sections.education.items[2].date`.
pub fn validate_document(raw: &Value) -> Result<Document, ValidationErrors> {
    DomainValidator::validate_document(raw)
}

/// The complete, valid, empty document for a locale tag such as `"en-US"`.
pub fn create_default_document(locale_tag: &str) -> Document {
    DomainValidator::create_default_document(locale_tag)
}
