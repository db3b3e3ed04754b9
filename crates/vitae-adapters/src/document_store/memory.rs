//! In-memory document store.

use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};

use vitae_core::{
    application::{ApplicationError, DocumentId, DocumentStore},
    domain::Document,
    error::VitaeResult,
};

/// Thread-safe in-memory document store. Clones share the same map.
#[derive(Clone)]
pub struct InMemoryStore {
    inner: Arc<RwLock<HashMap<DocumentId, Document>>>,
}

impl InMemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Get the number of documents.
    pub fn len(&self) -> VitaeResult<usize> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;
        Ok(inner.len())
    }

    /// Check if store is empty.
    pub fn is_empty(&self) -> VitaeResult<bool> {
        Ok(self.len()? == 0)
    }

    /// Clear all documents.
    pub fn clear(&self) -> VitaeResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;
        inner.clear();
        Ok(())
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentStore for InMemoryStore {
    fn get(&self, id: &DocumentId) -> VitaeResult<Document> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        inner.get(id).cloned().ok_or_else(|| {
            ApplicationError::NotFound { id: id.to_string() }.into()
        })
    }

    fn put(&self, id: &DocumentId, document: &Document) -> VitaeResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        inner.insert(id.clone(), document.clone());
        Ok(())
    }

    fn list(&self) -> VitaeResult<Vec<DocumentId>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        let mut ids: Vec<DocumentId> = inner.keys().cloned().collect();
        ids.sort();
        Ok(ids)
    }

    fn remove(&self, id: &DocumentId) -> VitaeResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        inner
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| ApplicationError::NotFound { id: id.to_string() }.into())
    }

    fn exists(&self, id: &DocumentId) -> VitaeResult<bool> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;
        Ok(inner.contains_key(id))
    }
}
