//! Command handlers, one module per subcommand.
//!
//! Handlers translate parsed arguments into calls on `vitae-core` and render
//! the result. No business logic lives here.

pub mod completions;
pub mod config;
pub mod init;
pub mod new;
pub mod sections;
pub mod validate;

use tracing::debug;
use vitae_adapters::DirectoryStore;
use vitae_core::application::DocumentService;

use crate::config::AppConfig;

/// Document service backed by the configured store directory.
pub(crate) fn open_service(config: &AppConfig) -> DocumentService {
    debug!(dir = %config.store.dir.display(), "Opening document store");
    DocumentService::new(Box::new(DirectoryStore::new(config.store.dir.clone())))
}
