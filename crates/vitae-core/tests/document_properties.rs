//! Whole-document properties: default validity, locale handling,
//! discriminator integrity, custom-section independence, round trips and
//! column bounds.

use proptest::prelude::*;
use serde_json::{Value, json};
use vitae_core::domain::{
    FieldPath, IssueCategory, IssueKind, SectionKey, SectionKind, validate_custom_section,
};
use vitae_core::{create_default_document, validate_document};

fn default_raw(tag: &str) -> Value {
    create_default_document(tag).to_json()
}

fn section_names(tag: &str) -> Vec<String> {
    let doc = create_default_document(tag);
    SectionKind::ALL
        .into_iter()
        .map(|kind| doc.sections.attrs(kind).name.clone())
        .collect()
}

/// A filled-in document touching every section kind and a custom group.
fn sample() -> Value {
    let mut raw = default_raw("en-US");
    raw["basics"] = json!({
        "name": "Jane Doe",
        "headline": "Systems Engineer",
        "email": "jane@example.com",
        "phone": "+48 600 000 000",
        "location": "Gdańsk",
        "url": { "label": "Site", "href": "https://jane.dev" },
        "customFields": [{ "id": "f1", "icon": "star", "name": "Pronouns", "value": "she/her" }],
        "picture": { "url": "", "size": 128, "aspectRatio": 1.5, "borderRadius": 4,
                     "effects": { "hidden": false, "border": true, "grayscale": false } }
    });
    let s = &mut raw["sections"];
    s["summary"]["content"] = json!("<p>Builds compilers.</p>");
    s["experience"]["items"] = json!([{
        "visible": true, "company": "Acme", "position": "Engineer", "location": "Remote",
        "date": "2019 - Present", "summary": "", "url": { "label": "", "href": "" }
    }]);
    s["education"]["items"] = json!([{
        "visible": true, "institution": "PG", "studyType": "MSc", "area": "CS", "score": "5.0",
        "date": "2014 - 2019", "summary": "", "url": { "label": "", "href": "" }
    }]);
    s["skills"]["columns"] = json!(3);
    s["skills"]["items"] = json!([{
        "visible": true, "name": "Rust", "description": "Expert", "level": 5,
        "keywords": ["serde", "tokio"]
    }]);
    s["languages"]["items"] = json!([{
        "visible": true, "name": "Polish", "description": "Native", "level": 5
    }]);
    s["profiles"]["items"] = json!([{
        "visible": true, "network": "GitHub", "username": "jane", "icon": "github",
        "url": { "label": "", "href": "https://github.com/jane" }
    }]);
    s["custom"]["talks"] = json!({
        "id": "talks", "name": "Talks", "columns": 2, "visible": true,
        "items": [{ "id": "t1", "visible": true, "name": "Zero-copy parsing",
                    "date": "2024", "venue": "RustConf", "slides": { "pages": 42 } }]
    });
    raw
}

#[test]
fn sample_document_is_valid() {
    validate_document(&sample()).unwrap_or_else(|e| panic!("{}", e.report()));
}

#[test]
fn locale_selection() {
    let pl = create_default_document("pl-PL");
    assert_eq!(pl.sections.education.attrs.name, "Edukacja");
    let en = create_default_document("en-GB");
    assert_eq!(en.sections.education.attrs.name, "Education");
}

#[test]
fn locale_prefix_is_case_sensitive() {
    assert_eq!(section_names("PL-pl"), section_names("en-US"));
}

#[test]
fn discriminator_integrity() {
    for kind in SectionKind::ALL {
        for other in SectionKind::ALL.into_iter().filter(|o| *o != kind) {
            let mut raw = default_raw("en");
            raw["sections"][kind.as_str()]["id"] = json!(other.as_str());
            let err = validate_document(&raw).expect_err("swapped discriminator must fail");
            assert!(err.has_category(IssueCategory::Discriminator));
        }
    }
}

#[test]
fn custom_section_independence() {
    let mut raw = default_raw("en");
    raw["sections"]["education"]["items"] = json!([{ "visible": true, "institution": 7 }]);
    raw["sections"]["custom"]["extra"] = json!({
        "id": "extra",
        "name": "Extra",
        "items": [{ "id": "e1", "name": "Anything", "free": ["form"] }]
    });

    let err = validate_document(&raw).unwrap_err();
    let education = SectionKey::BuiltIn(SectionKind::Education).path();
    let extra = SectionKey::Custom("extra".into()).path();
    assert!(err.touches(&education));
    assert!(!err.touches(&extra));

    let custom = validate_custom_section("extra", &raw["sections"]["custom"]["extra"]).unwrap();
    assert_eq!(custom.items.len(), 1);
}

#[test]
fn custom_duplicate_keys_last_wins() {
    let text = r#"{"id":"a1","name":"First","items":[]}"#;
    let second = r#"{"id":"b2","name":"Second","items":[]}"#;
    let mut raw = default_raw("en");
    let doc = format!(
        r#"{{"basics":{},"sections":{},"metadata":{}}}"#,
        raw["basics"], raw["sections"], raw["metadata"]
    );
    // Splice two groups under the same key into the raw text.
    let doc = doc.replacen(
        r#""custom":{}"#,
        &format!(r#""custom":{{"dup":{text},"dup":{second}}}"#),
        1,
    );
    raw = serde_json::from_str(&doc).unwrap();
    let parsed = validate_document(&raw).unwrap();
    assert_eq!(parsed.sections.custom.len(), 1);
    assert_eq!(parsed.sections.custom["dup"].attrs.name, "Second");
}

#[test]
fn round_trip_is_idempotent() {
    let once = validate_document(&sample()).unwrap().to_json();
    let twice = validate_document(&once).unwrap().to_json();
    assert_eq!(once, twice);
    assert_eq!(
        serde_json::to_string(&once).unwrap(),
        serde_json::to_string(&twice).unwrap()
    );
}

#[test]
fn custom_item_content_passes_through() {
    let doc = validate_document(&sample()).unwrap().to_json();
    let item = &doc["sections"]["custom"]["talks"]["items"][0];
    assert_eq!(item["venue"], "RustConf");
    assert_eq!(item["slides"], json!({ "pages": 42 }));
}

#[test]
fn column_bounds() {
    for (columns, ok) in [(json!(0), false), (json!(6), false), (json!(1), true), (json!(5), true)]
    {
        let mut raw = default_raw("en");
        raw["sections"]["awards"]["columns"] = columns.clone();
        assert_eq!(validate_document(&raw).is_ok(), ok, "columns = {columns}");
    }

    let mut raw = default_raw("en");
    raw["sections"]["awards"].as_object_mut().unwrap().remove("columns");
    let doc = validate_document(&raw).unwrap();
    assert_eq!(doc.sections.awards.attrs.columns.get(), 1);
}

#[test]
fn errors_are_collected_across_the_document() {
    let mut raw = sample();
    raw["basics"]["email"] = json!("not-an-email");
    raw["sections"]["skills"]["items"][0]["level"] = json!(9);
    raw["sections"]["education"]["items"][0]["date"] = json!(2019);
    raw["metadata"]["page"]["format"] = json!("a5");

    let err = validate_document(&raw).unwrap_err();
    let paths: Vec<String> = err.iter().map(|i| i.path.to_string()).collect();
    for expected in [
        "basics.email",
        "sections.skills.items[0].level",
        "sections.education.items[0].date",
        "metadata.page.format",
    ] {
        assert!(paths.iter().any(|p| p == expected), "missing {expected} in {paths:?}");
    }
    assert_eq!(err.len(), 4);
}

#[test]
fn missing_section_is_structural() {
    let mut raw = default_raw("en");
    raw["sections"].as_object_mut().unwrap().remove("projects");
    let err = validate_document(&raw).unwrap_err();
    assert_eq!(err.len(), 1);
    assert_eq!(err.issues()[0].kind, IssueKind::Missing);
    assert_eq!(err.issues()[0].category(), IssueCategory::Structural);
    assert_eq!(
        err.issues()[0].path,
        FieldPath::root().key("sections").key("projects")
    );
}

#[test]
fn error_paths_parse_back() {
    let mut raw = sample();
    raw["sections"]["education"]["items"][0]["date"] = json!(null);
    let err = validate_document(&raw).unwrap_err();
    let path = &err.issues()[0].path;
    assert_eq!(path.to_string().parse::<FieldPath>().unwrap(), *path);
}

proptest! {
    #[test]
    fn default_validates_for_any_locale(tag in ".{0,12}") {
        let raw = default_raw(&tag);
        prop_assert!(validate_document(&raw).is_ok());
    }

    #[test]
    fn unsupported_prefix_falls_back_to_english(tag in "[a-zA-Z]{2}(-[A-Z]{2})?") {
        prop_assume!(!tag.starts_with("en") && !tag.starts_with("pl"));
        prop_assert_eq!(section_names(&tag), section_names("en-US"));
    }

    #[test]
    fn out_of_range_columns_always_fail(columns in prop_oneof![i64::MIN..1i64, 6i64..i64::MAX]) {
        let mut raw = default_raw("en");
        raw["sections"]["skills"]["columns"] = json!(columns);
        let err = validate_document(&raw).unwrap_err();
        let is_range = matches!(err.issues()[0].kind, IssueKind::OutOfRange { .. });
        prop_assert!(is_range);
    }
}
