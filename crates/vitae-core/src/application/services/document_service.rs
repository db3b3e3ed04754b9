//! Document Service - résumé lifecycle operations.
//!
//! Creates localized defaults, imports raw documents, and hands snapshots to
//! the store. Nothing reaches the store without passing validation first.

use serde_json::Value;
use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{DocumentId, DocumentStore},
    },
    domain::{Document, DomainValidator as validator, Locale, SectionReport},
    error::{VitaeError, VitaeResult},
};

/// Service for document operations.
pub struct DocumentService {
    store: Box<dyn DocumentStore>,
}

impl DocumentService {
    /// Create a new document service over `store`.
    pub fn new(store: Box<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Store a fresh default document under `id`.
    ///
    /// Fails with `AlreadyExists` rather than replacing a stored document.
    #[instrument(skip(self), fields(id = %id))]
    pub fn create(&self, id: &DocumentId, locale_tag: &str) -> VitaeResult<Document> {
        if self.store.exists(id)? {
            warn!("Refusing to overwrite existing document");
            return Err(ApplicationError::AlreadyExists { id: id.to_string() }.into());
        }

        let locale = Locale::resolve(locale_tag);
        if !locale_tag.starts_with(locale.as_str()) {
            debug!(requested = locale_tag, resolved = %locale, "Locale fell back");
        }

        let document = validator::create_default_document(locale_tag);
        self.store.put(id, &document)?;
        info!(locale = %locale, "Document created");
        Ok(document)
    }

    /// Validate `raw` and store it under `id`, replacing any previous snapshot.
    #[instrument(skip(self, raw), fields(id = %id))]
    pub fn import(&self, id: &DocumentId, raw: &Value) -> VitaeResult<Document> {
        let document = self.validate(raw)?;
        self.store.put(id, &document)?;
        info!("Document imported");
        Ok(document)
    }

    /// Validate without storing.
    pub fn validate(&self, raw: &Value) -> VitaeResult<Document> {
        validator::validate_document(raw).map_err(|errors| {
            debug!(issues = errors.len(), "Document rejected");
            VitaeError::from(errors)
        })
    }

    /// Validate each section of `raw` on its own.
    pub fn validate_sections(&self, raw: &Value) -> Vec<SectionReport> {
        validator::validate_sections_individually(raw)
    }

    /// Load a stored document.
    pub fn get(&self, id: &DocumentId) -> VitaeResult<Document> {
        self.store.get(id)
    }

    /// List stored document ids.
    pub fn list(&self) -> VitaeResult<Vec<DocumentId>> {
        self.store.list()
    }

    /// Remove a stored document.
    #[instrument(skip(self), fields(id = %id))]
    pub fn remove(&self, id: &DocumentId) -> VitaeResult<()> {
        self.store.remove(id)?;
        info!("Document removed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::MockDocumentStore;
    use crate::error::ErrorCategory;
    use mockall::predicate::*;
    use serde_json::json;

    fn id(s: &str) -> DocumentId {
        DocumentId::new(s).unwrap()
    }

    #[test]
    fn create_stores_localized_default() {
        let mut store = MockDocumentStore::new();
        store.expect_exists().returning(|_| Ok(false));
        store
            .expect_put()
            .with(eq(id("cv")), function(|doc: &Document| {
                doc.sections.education.attrs.name == "Edukacja"
            }))
            .times(1)
            .returning(|_, _| Ok(()));

        let service = DocumentService::new(Box::new(store));
        let doc = service.create(&id("cv"), "pl-PL").unwrap();
        assert_eq!(doc.sections.skills.attrs.name, "Umiejętności");
    }

    #[test]
    fn create_refuses_existing_id() {
        let mut store = MockDocumentStore::new();
        store.expect_exists().returning(|_| Ok(true));
        store.expect_put().never();

        let service = DocumentService::new(Box::new(store));
        let err = service.create(&id("cv"), "en").unwrap_err();
        assert!(matches!(
            err,
            VitaeError::Application(ApplicationError::AlreadyExists { .. })
        ));
    }

    #[test]
    fn import_never_writes_invalid_documents() {
        let mut store = MockDocumentStore::new();
        store.expect_put().never();

        let service = DocumentService::new(Box::new(store));
        let err = service
            .import(&id("cv"), &json!({ "basics": {}, "sections": {} }))
            .unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert!(err.validation_errors().unwrap().len() > 1);
    }

    #[test]
    fn import_writes_validated_snapshot() {
        let raw = Document::default_for(Locale::En).to_json();
        let mut store = MockDocumentStore::new();
        store.expect_put().times(1).returning(|_, _| Ok(()));

        let service = DocumentService::new(Box::new(store));
        let doc = service.import(&id("cv"), &raw).unwrap();
        assert_eq!(doc.to_json(), raw);
    }

    #[test]
    fn get_passes_not_found_through() {
        let mut store = MockDocumentStore::new();
        store.expect_get().returning(|id| {
            Err(ApplicationError::NotFound { id: id.to_string() }.into())
        });

        let service = DocumentService::new(Box::new(store));
        let err = service.get(&id("missing")).unwrap_err();
        assert_eq!(err.category(), ErrorCategory::NotFound);
    }

    #[test]
    fn list_and_remove_delegate() {
        let mut store = MockDocumentStore::new();
        store
            .expect_list()
            .returning(|| Ok(vec![id("a"), id("b")]));
        store
            .expect_remove()
            .with(eq(id("a")))
            .times(1)
            .returning(|_| Ok(()));

        let service = DocumentService::new(Box::new(store));
        assert_eq!(service.list().unwrap().len(), 2);
        service.remove(&id("a")).unwrap();
    }

    #[test]
    fn section_reports_need_no_store() {
        let service = DocumentService::new(Box::new(MockDocumentStore::new()));
        let raw = Document::default_for(Locale::En).to_json();
        assert!(service.validate_sections(&raw).iter().all(SectionReport::is_valid));
    }
}
