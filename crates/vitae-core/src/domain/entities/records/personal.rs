//! Short, tag-like entries: interests, languages, profiles, skills.

use serde::Serialize;

use super::{LEVEL_RANGE, Record};
use crate::domain::entities::common::Link;
use crate::domain::fields::{Cursor, Fields};
use crate::domain::value_objects::SectionKind;

fn level(cx: &mut Cursor, f: Fields<'_>) -> Option<u8> {
    let (min, max) = LEVEL_RANGE;
    f.integer(cx, "level", min, max).and_then(|n| u8::try_from(n).ok())
}

// ── Interest ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Interest {
    pub visible: bool,
    pub name: String,
    pub keywords: Vec<String>,
}

impl Default for Interest {
    fn default() -> Self {
        Self {
            visible: true,
            name: String::new(),
            keywords: Vec::new(),
        }
    }
}

impl Record for Interest {
    const KIND: SectionKind = SectionKind::Interests;

    fn parse(cx: &mut Cursor, f: Fields<'_>) -> Option<Self> {
        let visible = f.flag(cx, "visible");
        let name = f.text(cx, "name");
        let keywords = f.text_list(cx, "keywords");
        Some(Self {
            visible: visible?,
            name: name?,
            keywords: keywords?,
        })
    }
}

// ── Language ──────────────────────────────────────────────────────────────────

/// A spoken language and proficiency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Language {
    pub visible: bool,
    pub name: String,
    /// Free-text proficiency, e.g. "Native speaker".
    pub description: String,
    /// Proficiency on a 0..=5 scale.
    pub level: u8,
}

impl Default for Language {
    fn default() -> Self {
        Self {
            visible: true,
            name: String::new(),
            description: String::new(),
            level: 1,
        }
    }
}

impl Record for Language {
    const KIND: SectionKind = SectionKind::Languages;

    fn parse(cx: &mut Cursor, f: Fields<'_>) -> Option<Self> {
        let visible = f.flag(cx, "visible");
        let name = f.text(cx, "name");
        let description = f.text(cx, "description");
        let level = level(cx, f);
        Some(Self {
            visible: visible?,
            name: name?,
            description: description?,
            level: level?,
        })
    }
}

// ── Profile ───────────────────────────────────────────────────────────────────

/// An account on an external network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Profile {
    pub visible: bool,
    pub network: String,
    pub username: String,
    /// Icon slug understood by the renderer, e.g. "github".
    pub icon: String,
    pub url: Link,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            visible: true,
            network: String::new(),
            username: String::new(),
            icon: String::new(),
            url: Link::default(),
        }
    }
}

impl Record for Profile {
    const KIND: SectionKind = SectionKind::Profiles;

    fn parse(cx: &mut Cursor, f: Fields<'_>) -> Option<Self> {
        let visible = f.flag(cx, "visible");
        let network = f.text(cx, "network");
        let username = f.text(cx, "username");
        let icon = f.text(cx, "icon");
        let url = f.object(cx, "url", Link::parse);
        Some(Self {
            visible: visible?,
            network: network?,
            username: username?,
            icon: icon?,
            url: url?,
        })
    }
}

// ── Skill ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Skill {
    pub visible: bool,
    pub name: String,
    pub description: String,
    pub level: u8,
    pub keywords: Vec<String>,
}

impl Default for Skill {
    fn default() -> Self {
        Self {
            visible: true,
            name: String::new(),
            description: String::new(),
            level: 1,
            keywords: Vec::new(),
        }
    }
}

impl Record for Skill {
    const KIND: SectionKind = SectionKind::Skills;

    fn parse(cx: &mut Cursor, f: Fields<'_>) -> Option<Self> {
        let visible = f.flag(cx, "visible");
        let name = f.text(cx, "name");
        let description = f.text(cx, "description");
        let level = level(cx, f);
        let keywords = f.text_list(cx, "keywords");
        Some(Self {
            visible: visible?,
            name: name?,
            description: description?,
            level: level?,
            keywords: keywords?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::diagnostics::IssueKind;
    use crate::domain::entities::records::validate_record;
    use serde_json::json;

    fn skill(level: serde_json::Value) -> serde_json::Value {
        json!({
            "visible": true,
            "name": "Rust",
            "description": "Advanced",
            "level": level,
            "keywords": ["tokio", "serde"]
        })
    }

    #[test]
    fn skill_level_bounds() {
        assert_eq!(validate_record::<Skill>(&skill(json!(0))).unwrap().level, 0);
        assert_eq!(validate_record::<Skill>(&skill(json!(5))).unwrap().level, 5);
        let err = validate_record::<Skill>(&skill(json!(6))).unwrap_err();
        assert_eq!(err.issues()[0].kind, IssueKind::OutOfRange { min: 0, max: 5, found: 6 });
        assert!(validate_record::<Skill>(&skill(json!(-1))).is_err());
    }

    #[test]
    fn language_requires_level() {
        let raw = json!({ "visible": true, "name": "Polish", "description": "Native" });
        let err = validate_record::<Language>(&raw).unwrap_err();
        assert_eq!(err.issues()[0].path.to_string(), "level");
        assert_eq!(err.issues()[0].kind, IssueKind::Missing);
    }

    #[test]
    fn profile_keeps_all_fields() {
        let raw = json!({
            "visible": false,
            "network": "GitHub",
            "username": "jane",
            "icon": "github",
            "url": { "label": "", "href": "https://github.com/jane" }
        });
        let profile: Profile = validate_record(&raw).unwrap();
        assert!(!profile.visible);
        assert_eq!(serde_json::to_value(&profile).unwrap(), raw);
    }

    #[test]
    fn interest_keywords_must_be_strings() {
        let raw = json!({ "visible": true, "name": "Chess", "keywords": ["openings", 3] });
        let err = validate_record::<Interest>(&raw).unwrap_err();
        assert_eq!(err.issues()[0].path.to_string(), "keywords[1]");
    }
}
