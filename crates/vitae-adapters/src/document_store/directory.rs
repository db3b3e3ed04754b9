//! Directory-backed document store: one pretty-printed JSON file per document.

use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use vitae_core::{
    application::{ApplicationError, DocumentId, DocumentStore},
    domain::{Document, DomainValidator as validator},
    error::{VitaeError, VitaeResult},
};

const EXTENSION: &str = "json";

/// Stores `<root>/<id>.json`.
///
/// Files are re-validated on load, so a hand-edited file that no longer
/// passes the schema surfaces as `CorruptDocument` instead of a half-read
/// document.
#[derive(Debug, Clone)]
pub struct DirectoryStore {
    root: PathBuf,
}

impl DirectoryStore {
    /// Create a store rooted at `root`. The directory is created on first write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the file holding `id`.
    pub fn path_for(&self, id: &DocumentId) -> PathBuf {
        self.root.join(format!("{}.{EXTENSION}", id.as_str()))
    }
}

impl DocumentStore for DirectoryStore {
    fn get(&self, id: &DocumentId) -> VitaeResult<Document> {
        let path = self.path_for(id);
        let text = std::fs::read_to_string(&path).map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                ApplicationError::NotFound { id: id.to_string() }.into()
            } else {
                map_io_error(&path, e, "read document")
            }
        })?;

        let raw: serde_json::Value =
            serde_json::from_str(&text).map_err(|e| ApplicationError::Serialization {
                reason: format!("{}: {}", path.display(), e),
            })?;

        validator::validate_document(&raw).map_err(|errors| {
            warn!(id = %id, issues = errors.len(), "Stored document failed validation");
            ApplicationError::CorruptDocument {
                id: id.to_string(),
                errors,
            }
            .into()
        })
    }

    fn put(&self, id: &DocumentId, document: &Document) -> VitaeResult<()> {
        std::fs::create_dir_all(&self.root)
            .map_err(|e| map_io_error(&self.root, e, "create store directory"))?;

        let text = serde_json::to_string_pretty(document).map_err(|e| {
            ApplicationError::Serialization {
                reason: e.to_string(),
            }
        })?;

        // Write beside the target, then rename over it.
        let path = self.path_for(id);
        let staging = path.with_extension("json.tmp");
        let staged = std::fs::write(&staging, text + "\n")
            .map_err(|e| map_io_error(&staging, e, "write document"))
            .and_then(|()| {
                std::fs::rename(&staging, &path)
                    .map_err(|e| map_io_error(&path, e, "replace document"))
            });
        if let Err(err) = staged {
            match std::fs::remove_file(&staging) {
                Err(e) if e.kind() != io::ErrorKind::NotFound => {
                    warn!(path = %staging.display(), error = %e, "Could not remove staging file");
                }
                _ => {}
            }
            return Err(err);
        }

        debug!(path = %path.display(), "Document written");
        Ok(())
    }

    fn list(&self) -> VitaeResult<Vec<DocumentId>> {
        let entries = match std::fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(map_io_error(&self.root, e, "list store directory")),
        };

        let mut ids = Vec::new();
        for entry in entries {
            let path = entry
                .map_err(|e| map_io_error(&self.root, e, "list store directory"))?
                .path();
            if path.extension().and_then(|x| x.to_str()) != Some(EXTENSION) {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            match DocumentId::new(stem) {
                Ok(id) => ids.push(id),
                Err(_) => debug!(path = %path.display(), "Skipping file with invalid id"),
            }
        }
        ids.sort();
        Ok(ids)
    }

    fn remove(&self, id: &DocumentId) -> VitaeResult<()> {
        let path = self.path_for(id);
        std::fs::remove_file(&path).map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                ApplicationError::NotFound { id: id.to_string() }.into()
            } else {
                map_io_error(&path, e, "remove document")
            }
        })
    }

    fn exists(&self, id: &DocumentId) -> VitaeResult<bool> {
        Ok(self.path_for(id).is_file())
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> VitaeError {
    ApplicationError::Storage {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitae_core::domain::Locale;
    use vitae_core::error::ErrorCategory;

    fn id(s: &str) -> DocumentId {
        DocumentId::new(s).unwrap()
    }

    #[test]
    fn round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let store = DirectoryStore::new(dir.path().join("docs"));
        let doc = Document::default_for(Locale::Pl);

        store.put(&id("cv"), &doc).unwrap();
        assert!(store.path_for(&id("cv")).is_file());
        assert_eq!(store.get(&id("cv")).unwrap(), doc);
    }

    #[test]
    fn missing_directory_lists_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = DirectoryStore::new(dir.path().join("nope"));
        assert!(store.list().unwrap().is_empty());
        assert!(!store.exists(&id("cv")).unwrap());
    }

    #[test]
    fn foreign_files_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let store = DirectoryStore::new(dir.path());
        store.put(&id("b"), &Document::default_for(Locale::En)).unwrap();
        store.put(&id("a"), &Document::default_for(Locale::En)).unwrap();
        std::fs::write(dir.path().join("notes.txt"), "hi").unwrap();
        std::fs::write(dir.path().join("bad name.json"), "{}").unwrap();

        let ids: Vec<_> = store.list().unwrap().iter().map(|i| i.to_string()).collect();
        assert_eq!(ids, ["a", "b"]);
    }

    #[test]
    fn edited_file_is_corrupt() {
        let dir = tempfile::tempdir().unwrap();
        let store = DirectoryStore::new(dir.path());
        store.put(&id("cv"), &Document::default_for(Locale::En)).unwrap();

        let path = store.path_for(&id("cv"));
        let mut raw: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        raw["sections"]["skills"]["columns"] = serde_json::json!(8);
        std::fs::write(&path, raw.to_string()).unwrap();

        let err = store.get(&id("cv")).unwrap_err();
        assert!(matches!(
            err,
            VitaeError::Application(ApplicationError::CorruptDocument { .. })
        ));
        assert_eq!(err.validation_errors().unwrap().len(), 1);
    }

    #[test]
    fn unparsable_file_is_serialization_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = DirectoryStore::new(dir.path());
        std::fs::write(dir.path().join("cv.json"), "{ not json").unwrap();
        let err = store.get(&id("cv")).unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Internal);
    }

    #[test]
    fn failed_replace_leaves_no_staging_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = DirectoryStore::new(dir.path());
        // A non-empty directory where the document should go makes the rename fail.
        let target = store.path_for(&id("cv"));
        std::fs::create_dir_all(target.join("occupied")).unwrap();

        let err = store.put(&id("cv"), &Document::default_for(Locale::En)).unwrap_err();
        assert!(matches!(
            err,
            VitaeError::Application(ApplicationError::Storage { .. })
        ));
        assert!(!target.with_extension("json.tmp").exists());
        assert!(target.is_dir());
    }

    #[test]
    fn remove_deletes_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = DirectoryStore::new(dir.path());
        store.put(&id("cv"), &Document::default_for(Locale::En)).unwrap();
        store.remove(&id("cv")).unwrap();
        assert!(!store.exists(&id("cv")).unwrap());
        assert_eq!(
            store.remove(&id("cv")).unwrap_err().category(),
            ErrorCategory::NotFound
        );
    }
}
