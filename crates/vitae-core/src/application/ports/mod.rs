//! Traits the application needs implemented elsewhere.
//!
//! `vitae-adapters` provides the in-memory and on-disk stores.

pub mod output;

pub use output::{DocumentId, DocumentStore};

#[cfg(test)]
pub use output::MockDocumentStore;
