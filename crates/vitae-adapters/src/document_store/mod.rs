//! Document store adapters.

mod directory;
mod memory;

pub use directory::DirectoryStore;
pub use memory::InMemoryStore;
