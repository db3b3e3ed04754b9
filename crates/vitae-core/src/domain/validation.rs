use serde_json::Value;

use crate::domain::diagnostics::{IssueKind, ValidationErrors};
use crate::domain::entities::section::{self, AnySection, CustomSection, SectionKey};
use crate::domain::entities::Document;
use crate::domain::fields::{self, Cursor};
use crate::domain::value_objects::{Locale, SectionKind};

/// Outcome of validating one section on its own.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionReport {
    pub key: SectionKey,
    pub outcome: Result<AnySection, ValidationErrors>,
}

impl SectionReport {
    pub fn is_valid(&self) -> bool {
        self.outcome.is_ok()
    }

    pub fn errors(&self) -> Option<&ValidationErrors> {
        self.outcome.as_ref().err()
    }
}

/// Centralized domain validation and default generation.
///
/// Every entry point is a pure function of its input.
pub struct DomainValidator;

impl DomainValidator {
    /// Validate a whole raw document, collecting every issue.
    pub fn validate_document(raw: &Value) -> Result<Document, ValidationErrors> {
        Document::validate(raw)
    }

    pub fn validate_section(kind: SectionKind, raw: &Value) -> Result<AnySection, ValidationErrors> {
        section::validate_section(kind, raw)
    }

    pub fn validate_custom_section(
        key: &str,
        raw: &Value,
    ) -> Result<CustomSection, ValidationErrors> {
        section::validate_custom_section(key, raw)
    }

    /// Validate each section of a raw document independently.
    ///
    /// Built-in sections come first in [`SectionKind::ALL`] order, then one
    /// report per custom key in key order. A failure in one section never
    /// affects another's report.
    ///
    /// A `sections` value that is absent or not an object yields a single
    /// [`SectionKey::Sections`] report. The same holds for `sections.custom`,
    /// reported under [`SectionKey::CustomGroups`] after the built-ins.
    pub fn validate_sections_individually(raw_document: &Value) -> Vec<SectionReport> {
        let sections = match raw_document.get("sections") {
            Some(Value::Object(sections)) => sections,
            other => return vec![malformed(SectionKey::Sections, other)],
        };

        let mut reports: Vec<SectionReport> = SectionKind::ALL
            .into_iter()
            .map(|kind| {
                let key = SectionKey::BuiltIn(kind);
                let outcome = match sections.get(kind.as_str()) {
                    Some(raw) => section::validate_section(kind, raw),
                    None => missing(&key),
                };
                SectionReport { key, outcome }
            })
            .collect();

        match sections.get("custom") {
            Some(Value::Object(custom)) => {
                let mut keys: Vec<&String> = custom.keys().collect();
                keys.sort();
                for name in keys {
                    let outcome = section::validate_custom_section(name, &custom[name.as_str()])
                        .map(AnySection::Custom);
                    reports.push(SectionReport {
                        key: SectionKey::Custom(name.clone()),
                        outcome,
                    });
                }
            }
            other => reports.push(malformed(SectionKey::CustomGroups, other)),
        }
        reports
    }

    /// The complete empty document for a locale tag such as `"pl-PL"`.
    ///
    /// Unsupported tags fall back to English. This cannot fail.
    pub fn create_default_document(locale_tag: &str) -> Document {
        Document::default_for(Locale::resolve(locale_tag))
    }
}

fn missing(key: &SectionKey) -> Result<AnySection, ValidationErrors> {
    let mut cx = Cursor::at(key.path());
    cx.report(IssueKind::Missing);
    cx.finish(None)
}

/// Failed report for a container that is absent or not an object.
fn malformed(key: SectionKey, raw: Option<&Value>) -> SectionReport {
    let outcome = match raw {
        None => missing(&key),
        Some(raw) => {
            let mut cx = Cursor::at(key.path());
            let _ = fields::object(&mut cx, raw);
            cx.finish(None)
        }
    };
    SectionReport { key, outcome }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::diagnostics::{FieldPath, IssueCategory};
    use serde_json::json;

    fn default_raw(tag: &str) -> Value {
        DomainValidator::create_default_document(tag).to_json()
    }

    fn with_extra_custom(mut raw: Value) -> Value {
        raw["sections"]["custom"]["extra"] = json!({
            "id": "extra",
            "name": "Extra",
            "items": [{ "id": "i1", "name": "Keynote", "venue": "Oslo" }]
        });
        raw
    }

    #[test]
    fn defaults_validate_for_any_tag() {
        for tag in ["en-US", "pl-PL", "pl", "de", "", "x", "EN-us", "plural", "日本語"] {
            let raw = default_raw(tag);
            DomainValidator::validate_document(&raw)
                .unwrap_or_else(|e| panic!("{tag:?}: {}", e.report()));
        }
    }

    #[test]
    fn locale_selection() {
        assert_eq!(
            DomainValidator::create_default_document("pl-PL").sections.education.attrs.name,
            "Edukacja"
        );
        assert_eq!(
            DomainValidator::create_default_document("en-GB").sections.education.attrs.name,
            "Education"
        );
    }

    #[test]
    fn discriminator_integrity() {
        for kind in SectionKind::ALL {
            for other in SectionKind::ALL.into_iter().filter(|o| *o != kind) {
                let mut raw = default_raw("en");
                raw["sections"][kind.as_str()]["id"] = json!(other.as_str());
                let err = DomainValidator::validate_document(&raw).unwrap_err();
                assert!(err.has_category(IssueCategory::Discriminator), "{kind} <- {other}");
                let expected = FieldPath::root().key("sections").key(kind.as_str()).key("id");
                assert!(err.iter().all(|i| i.path == expected));
            }
        }
    }

    #[test]
    fn custom_validates_despite_broken_builtin() {
        let mut raw = with_extra_custom(default_raw("en"));
        raw["sections"]["skills"]["columns"] = json!(9);

        let err = DomainValidator::validate_document(&raw).unwrap_err();
        let custom_path = SectionKey::Custom("extra".into()).path();
        assert!(err.touches(&FieldPath::root().key("sections").key("skills")));
        assert!(!err.touches(&custom_path));

        let custom = DomainValidator::validate_custom_section(
            "extra",
            &raw["sections"]["custom"]["extra"],
        )
        .unwrap();
        assert_eq!(custom.items[0].extra["venue"], "Oslo");
    }

    #[test]
    fn custom_failures_stay_under_their_key() {
        let mut raw = with_extra_custom(default_raw("en"));
        raw["sections"]["custom"]["broken"] = json!({ "id": "Broken!", "name": "B", "items": [] });
        let err = DomainValidator::validate_document(&raw).unwrap_err();
        let broken = SectionKey::Custom("broken".into()).path();
        assert!(err.iter().all(|i| i.path.starts_with(&broken)));
    }

    #[test]
    fn individual_reports_cover_every_key() {
        let mut raw = with_extra_custom(default_raw("en"));
        raw["sections"]["awards"]["items"] = json!([{ "title": 1 }]);
        raw["sections"]
            .as_object_mut()
            .unwrap()
            .remove("skills");

        let reports = DomainValidator::validate_sections_individually(&raw);
        assert_eq!(reports.len(), SectionKind::ALL.len() + 1);

        let status = |key: &str| {
            reports
                .iter()
                .find(|r| r.key.to_string() == key)
                .map(SectionReport::is_valid)
        };
        assert_eq!(status("awards"), Some(false));
        assert_eq!(status("skills"), Some(false));
        assert_eq!(status("education"), Some(true));
        assert_eq!(status("custom.extra"), Some(true));

        let skills = reports.iter().find(|r| r.key.to_string() == "skills").unwrap();
        assert_eq!(skills.errors().unwrap().issues()[0].path.to_string(), "sections.skills");
    }

    #[test]
    fn missing_sections_is_one_report() {
        let reports = DomainValidator::validate_sections_individually(&json!({}));
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].key, SectionKey::Sections);
        let issues = reports[0].errors().unwrap().issues();
        assert_eq!(issues[0].kind, IssueKind::Missing);
        assert_eq!(issues[0].path.to_string(), "sections");
    }

    #[test]
    fn non_object_sections_is_a_type_mismatch() {
        let mut raw = default_raw("en");
        raw["sections"] = json!([]);
        assert!(DomainValidator::validate_document(&raw).is_err());

        let reports = DomainValidator::validate_sections_individually(&raw);
        assert_eq!(reports.len(), 1);
        let issues = reports[0].errors().unwrap().issues();
        assert_eq!(
            issues[0].kind,
            IssueKind::InvalidType { expected: "object", found: "array" }
        );
        assert_eq!(issues[0].path.to_string(), "sections");
    }

    #[test]
    fn broken_custom_mapping_fails_its_own_report() {
        for bad in [json!([]), json!("x"), Value::Null] {
            let mut raw = default_raw("en");
            raw["sections"]["custom"] = bad.clone();
            assert!(DomainValidator::validate_document(&raw).is_err(), "{bad}");

            let reports = DomainValidator::validate_sections_individually(&raw);
            assert_eq!(reports.len(), SectionKind::ALL.len() + 1, "{bad}");
            let custom = reports.last().unwrap();
            assert_eq!(custom.key, SectionKey::CustomGroups);
            let issue = &custom.errors().unwrap().issues()[0];
            assert_eq!(issue.path.to_string(), "sections.custom");
            assert!(matches!(issue.kind, IssueKind::InvalidType { expected: "object", .. }));
            assert_eq!(reports.iter().filter(|r| !r.is_valid()).count(), 1);
        }
    }

    #[test]
    fn absent_custom_mapping_is_missing() {
        let mut raw = default_raw("en");
        raw["sections"].as_object_mut().unwrap().remove("custom");
        assert!(DomainValidator::validate_document(&raw).is_err());

        let reports = DomainValidator::validate_sections_individually(&raw);
        let custom = reports.last().unwrap();
        assert_eq!(custom.key, SectionKey::CustomGroups);
        assert_eq!(custom.errors().unwrap().issues()[0].kind, IssueKind::Missing);
    }

    #[test]
    fn empty_custom_mapping_adds_no_report() {
        let reports = DomainValidator::validate_sections_individually(&default_raw("pl"));
        assert_eq!(reports.len(), SectionKind::ALL.len());
        assert!(reports.iter().all(SectionReport::is_valid));
    }
}
