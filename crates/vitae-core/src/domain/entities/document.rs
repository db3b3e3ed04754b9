use serde::Serialize;
use serde_json::Value;

use crate::domain::diagnostics::ValidationErrors;
use crate::domain::entities::basics::Basics;
use crate::domain::entities::metadata::Metadata;
use crate::domain::entities::sections::Sections;
use crate::domain::fields::{Cursor, Fields, object};
use crate::domain::value_objects::Locale;

/// The root aggregate: `{ basics, sections, metadata }`.
///
/// A `Document` only exists in validated form. Build one with
/// [`Document::default_for`] or [`Document::validate`]; mutate it by
/// validating a new snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Document {
    pub basics: Basics,
    pub sections: Sections,
    pub metadata: Metadata,
}

impl Document {
    /// The empty document with section names in `locale`.
    pub fn default_for(locale: Locale) -> Self {
        Self {
            basics: Basics::default(),
            sections: Sections::default_for(locale),
            metadata: Metadata::default(),
        }
    }

    /// Validate a raw JSON value, collecting every issue in the document.
    pub fn validate(raw: &Value) -> Result<Self, ValidationErrors> {
        let mut cx = Cursor::new();
        let document = object(&mut cx, raw).and_then(|f| Self::parse(&mut cx, f));
        cx.finish(document)
    }

    pub(crate) fn parse(cx: &mut Cursor, f: Fields<'_>) -> Option<Self> {
        let basics = f.object(cx, "basics", Basics::parse);
        let sections = f.object(cx, "sections", Sections::parse);
        let metadata = f.object(cx, "metadata", Metadata::parse);
        Some(Self {
            basics: basics?,
            sections: sections?,
            metadata: metadata?,
        })
    }

    pub fn to_json(&self) -> Value {
        // Serializing plain strings, numbers and maps cannot fail.
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}
