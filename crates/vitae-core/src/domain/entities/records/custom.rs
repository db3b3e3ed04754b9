//! The generic item held by custom section groups.
//!
//! Unlike built-in records a custom item carries an explicit identifier, most
//! of its fields are optional, and keys it does not recognize are kept
//! verbatim in [`CustomItem::extra`] so renderers can pass them through.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::domain::entities::common::Link;
use crate::domain::fields::{Cursor, Fields};
use crate::domain::value_objects::ItemId;

const KNOWN: &[&str] = &[
    "id",
    "visible",
    "name",
    "description",
    "date",
    "location",
    "summary",
    "keywords",
    "url",
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomItem {
    pub id: ItemId,
    pub visible: bool,
    pub name: String,
    pub description: String,
    pub date: String,
    pub location: String,
    pub summary: String,
    pub keywords: Vec<String>,
    pub url: Link,
    /// Unrecognized keys, preserved as-is.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CustomItem {
    /// A blank item. The identifier is the only field without a default.
    pub fn blank(id: ItemId) -> Self {
        Self {
            id,
            visible: true,
            name: String::new(),
            description: String::new(),
            date: String::new(),
            location: String::new(),
            summary: String::new(),
            keywords: Vec::new(),
            url: Link::default(),
            extra: Map::new(),
        }
    }

    /// A blank item with a freshly generated identifier.
    pub fn generate() -> Self {
        Self::blank(ItemId::generate())
    }

    pub(crate) fn parse(cx: &mut Cursor, f: Fields<'_>) -> Option<Self> {
        let id = f.identifier(cx, "id");
        let visible = f.flag_or(cx, "visible", true);
        let name = f.text_or(cx, "name", "");
        let description = f.text_or(cx, "description", "");
        let date = f.text_or(cx, "date", "");
        let location = f.text_or(cx, "location", "");
        let summary = f.text_or(cx, "summary", "");
        let keywords = f.text_list_or(cx, "keywords", Vec::new);
        let url = f.object_or(cx, "url", Link::default, Link::parse);
        Some(Self {
            id: id?,
            visible: visible?,
            name: name?,
            description: description?,
            date: date?,
            location: location?,
            summary: summary?,
            keywords: keywords?,
            url: url?,
            extra: f.rest(KNOWN),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::diagnostics::{IssueKind, ValidationErrors};
    use crate::domain::fields::object;
    use serde_json::json;

    fn parse(raw: Value) -> Result<CustomItem, ValidationErrors> {
        let mut cx = Cursor::new();
        let item = object(&mut cx, &raw).and_then(|f| CustomItem::parse(&mut cx, f));
        cx.finish(item)
    }

    #[test]
    fn only_id_is_required() {
        let item = parse(json!({ "id": "a1b2c3" })).unwrap();
        assert_eq!(item, CustomItem::blank(ItemId::new("a1b2c3").unwrap()));
    }

    #[test]
    fn missing_id_is_reported() {
        let err = parse(json!({ "name": "Talk" })).unwrap_err();
        assert_eq!(err.issues()[0].path.to_string(), "id");
        assert_eq!(err.issues()[0].kind, IssueKind::Missing);
    }

    #[test]
    fn unknown_keys_pass_through() {
        let raw = json!({
            "id": "x9",
            "name": "Talk",
            "venue": "RustConf",
            "attendees": [1, 2, 3]
        });
        let item = parse(raw).unwrap();
        assert_eq!(item.extra.get("venue"), Some(&json!("RustConf")));

        let out = serde_json::to_value(&item).unwrap();
        assert_eq!(out["venue"], "RustConf");
        assert_eq!(out["attendees"], json!([1, 2, 3]));
        assert_eq!(out["id"], "x9");
    }

    #[test]
    fn known_fields_are_still_typed() {
        let err = parse(json!({ "id": "x9", "keywords": "a,b", "url": "https://x.dev" }))
            .unwrap_err();
        let paths: Vec<_> = err.iter().map(|i| i.path.to_string()).collect();
        assert_eq!(paths, ["keywords", "url"]);
    }

    #[test]
    fn generated_items_validate() {
        let item = CustomItem::generate();
        let raw = serde_json::to_value(&item).unwrap();
        assert_eq!(parse(raw).unwrap(), item);
    }
}
