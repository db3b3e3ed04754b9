//! Use cases over stored documents.
//!
//! [`DocumentService`] runs every document through the domain validator
//! before it reaches a [`DocumentStore`]; the store itself never checks
//! schema rules.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::{DocumentId, DocumentStore};
pub use services::DocumentService;
