//! Infrastructure adapters for Vitae.
//!
//! This crate implements the ports defined in `vitae-core::application::ports`.
//! It contains all I/O operations.

pub mod document_store;

// Re-export commonly used adapters
pub use document_store::{DirectoryStore, InMemoryStore};
