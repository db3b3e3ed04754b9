//! The person the document is about.

use serde::Serialize;

use crate::domain::entities::common::Link;
use crate::domain::fields::{Cursor, Fields, object};
use crate::domain::value_objects::ItemId;

/// An extra contact line shown under the headline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomField {
    pub id: ItemId,
    pub icon: String,
    pub name: String,
    pub value: String,
}

impl CustomField {
    fn parse(cx: &mut Cursor, f: Fields<'_>) -> Option<Self> {
        let id = f.identifier(cx, "id");
        let icon = f.text(cx, "icon");
        let name = f.text(cx, "name");
        let value = f.text(cx, "value");
        Some(Self {
            id: id?,
            icon: icon?,
            name: name?,
            value: value?,
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PictureEffects {
    pub hidden: bool,
    pub border: bool,
    pub grayscale: bool,
}

impl PictureEffects {
    fn parse(cx: &mut Cursor, f: Fields<'_>) -> Option<Self> {
        let hidden = f.flag_or(cx, "hidden", false);
        let border = f.flag_or(cx, "border", false);
        let grayscale = f.flag_or(cx, "grayscale", false);
        Some(Self {
            hidden: hidden?,
            border: border?,
            grayscale: grayscale?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Picture {
    pub url: String,
    /// Rendered edge length in points.
    pub size: u32,
    pub aspect_ratio: f64,
    pub border_radius: f64,
    pub effects: PictureEffects,
}

impl Default for Picture {
    fn default() -> Self {
        Self {
            url: String::new(),
            size: 64,
            aspect_ratio: 1.0,
            border_radius: 0.0,
            effects: PictureEffects::default(),
        }
    }
}

impl Picture {
    fn parse(cx: &mut Cursor, f: Fields<'_>) -> Option<Self> {
        let url = f.text(cx, "url");
        let size = f
            .integer_or(cx, "size", 0, i64::from(u32::MAX), 64)
            .and_then(|n| u32::try_from(n).ok());
        let aspect_ratio = f.number_or(cx, "aspectRatio", 1.0);
        let border_radius = f.number_or(cx, "borderRadius", 0.0);
        let effects = f.object_or(cx, "effects", PictureEffects::default, PictureEffects::parse);
        Some(Self {
            url: url?,
            size: size?,
            aspect_ratio: aspect_ratio?,
            border_radius: border_radius?,
            effects: effects?,
        })
    }
}

/// Name, contact details and photo.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Basics {
    pub name: String,
    pub headline: String,
    /// Empty, or an e-mail address.
    pub email: String,
    pub phone: String,
    pub location: String,
    pub url: Link,
    pub custom_fields: Vec<CustomField>,
    pub picture: Picture,
}

impl Basics {
    pub(crate) fn parse(cx: &mut Cursor, f: Fields<'_>) -> Option<Self> {
        let name = f.text(cx, "name");
        let headline = f.text(cx, "headline");
        let email = f.email(cx, "email");
        let phone = f.text(cx, "phone");
        let location = f.text(cx, "location");
        let url = f.object(cx, "url", Link::parse);
        let custom_fields = f.list(cx, "customFields", |cx, raw| {
            object(cx, raw).and_then(|field| CustomField::parse(cx, field))
        });
        let picture = f.object(cx, "picture", Picture::parse);
        Some(Self {
            name: name?,
            headline: headline?,
            email: email?,
            phone: phone?,
            location: location?,
            url: url?,
            custom_fields: custom_fields?,
            picture: picture?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::diagnostics::ValidationErrors;
    use serde_json::{Value, json};

    fn parse(raw: Value) -> Result<Basics, ValidationErrors> {
        let mut cx = Cursor::new();
        let basics = object(&mut cx, &raw).and_then(|f| Basics::parse(&mut cx, f));
        cx.finish(basics)
    }

    #[test]
    fn default_basics_validate() {
        let raw = serde_json::to_value(Basics::default()).unwrap();
        assert_eq!(parse(raw).unwrap(), Basics::default());
    }

    #[test]
    fn picture_defaults_fill_in() {
        let raw = json!({
            "name": "Jane Doe",
            "headline": "Engineer",
            "email": "jane@example.com",
            "phone": "",
            "location": "Kraków",
            "url": { "label": "", "href": "" },
            "customFields": [],
            "picture": { "url": "" }
        });
        let basics = parse(raw).unwrap();
        assert_eq!(basics.picture, Picture::default());
    }

    #[test]
    fn bad_email_and_custom_field_are_both_reported() {
        let mut raw = serde_json::to_value(Basics::default()).unwrap();
        raw["email"] = json!("jane at example");
        raw["customFields"] = json!([{ "id": "", "icon": "", "name": "", "value": "" }]);
        let err = parse(raw).unwrap_err();
        let paths: Vec<_> = err.iter().map(|i| i.path.to_string()).collect();
        assert_eq!(paths, ["email", "customFields[0].id"]);
    }

    #[test]
    fn camel_case_keys() {
        let raw = serde_json::to_value(Basics::default()).unwrap();
        assert!(raw.get("customFields").is_some());
        assert_eq!(raw["picture"]["aspectRatio"], 1.0);
        assert_eq!(raw["picture"]["size"], 64);
    }
}
