// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Vitae.
//!
//! Schemas, validation and default generation for résumé documents. Pure
//! functions over `serde_json::Value`; all storage and presentation concerns
//! are handled via ports defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or logging
//! - **Immutable entities**: A `Document` only exists validated
//! - **Collect-all validation**: Every issue is reported with its path
//!
// Public API - what the world sees
pub mod diagnostics;
pub mod entities;
pub mod error;
pub mod fields;
pub mod locale;
pub mod value_objects;

mod validation;

// Re-exports for convenience
pub use diagnostics::{
    FieldPath, IssueCategory, IssueKind, PathSegment, ValidationErrors, ValidationIssue,
};
pub use entities::{
    AnySection, Basics, CustomField, CustomSection, Document, Link, Metadata, Section,
    SectionAttrs, SectionKey, Sections, SummarySection, default_section, validate_custom_section,
    validate_section,
    records::{
        Award, Certification, CustomItem, Education, Experience, Interest, Language, Profile,
        Project, Publication, Record, Reference, Skill, Volunteer, validate_record,
    },
};
pub use error::{DomainError, ErrorCategory};
pub use locale::section_name;
pub use validation::{DomainValidator, SectionReport};
pub use value_objects::{Columns, ItemId, Locale, PageFormat, SectionKind};
