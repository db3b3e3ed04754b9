//! Domain value objects: SectionKind, Locale, Columns, ItemId, PageFormat.
//!
//! # Design
//!
//! These are pure value types with no identity. They hold NO lookup tables;
//! localized names live in `locale.rs`. This file's only job is to define the
//! types, their string representations, and their `FromStr` parsers.
//!
//! # Adding a section kind
//!
//! 1. Add the variant to [`SectionKind`] and to [`SectionKind::ALL`]
//! 2. Add the `as_str` arm here
//! 3. Add a name entry in `locale.rs` and a record type in `entities/records`
//! 4. The compiler points at every `match` that still needs an arm

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

// ── SectionKind ──────────────────────────────────────────────────────────────

/// One of the thirteen built-in section slots of a document.
///
/// The string form is the section key and, at the same time, the literal
/// discriminator stored in the section's `id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    Summary,
    Awards,
    Certifications,
    Education,
    Experience,
    Volunteer,
    Interests,
    Languages,
    Profiles,
    Projects,
    Publications,
    References,
    Skills,
}

impl SectionKind {
    /// Every built-in kind, in document order.
    pub const ALL: [SectionKind; 13] = [
        Self::Summary,
        Self::Awards,
        Self::Certifications,
        Self::Education,
        Self::Experience,
        Self::Volunteer,
        Self::Interests,
        Self::Languages,
        Self::Profiles,
        Self::Projects,
        Self::Publications,
        Self::References,
        Self::Skills,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Summary => "summary",
            Self::Awards => "awards",
            Self::Certifications => "certifications",
            Self::Education => "education",
            Self::Experience => "experience",
            Self::Volunteer => "volunteer",
            Self::Interests => "interests",
            Self::Languages => "languages",
            Self::Profiles => "profiles",
            Self::Projects => "projects",
            Self::Publications => "publications",
            Self::References => "references",
            Self::Skills => "skills",
        }
    }

    /// Whether the section holds free text instead of a list of records.
    pub const fn is_text(&self) -> bool {
        matches!(self, Self::Summary)
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exact, case-sensitive match on the section key.
impl FromStr for SectionKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| DomainError::UnknownSection(s.to_string()))
    }
}

// ── Locale ───────────────────────────────────────────────────────────────────

/// A language the default factory can localize section names into.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Pl,
}

impl Locale {
    pub const SUPPORTED: [Locale; 2] = [Self::En, Self::Pl];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Pl => "pl",
        }
    }

    /// Resolve a locale tag such as `"pl-PL"` to a supported locale.
    ///
    /// Only the first two characters are inspected, case-sensitively.
    /// Anything unsupported resolves to [`Locale::En`]; this never fails.
    pub fn resolve(tag: &str) -> Self {
        let code: String = tag.chars().take(2).collect();
        code.parse().unwrap_or_default()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Strict parser for a bare two-letter code; use [`Locale::resolve`] for tags.
impl FromStr for Locale {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::SUPPORTED
            .into_iter()
            .find(|locale| locale.as_str() == s)
            .ok_or_else(|| DomainError::UnsupportedLocale(s.to_string()))
    }
}

// ── Columns ──────────────────────────────────────────────────────────────────

/// Layout column count of a section, always within `1..=5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Columns(u8);

impl Columns {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(count: u8) -> Result<Self, DomainError> {
        if (Self::MIN..=Self::MAX).contains(&count) {
            Ok(Self(count))
        } else {
            Err(DomainError::InvalidColumns(i64::from(count)))
        }
    }

    pub const fn get(&self) -> u8 {
        self.0
    }
}

impl Default for Columns {
    fn default() -> Self {
        Self(Self::MIN)
    }
}

// ── ItemId ───────────────────────────────────────────────────────────────────

static ITEM_ID: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9a-z]+$").expect("valid id regex"));

/// Identifier of a custom section, custom item, or custom field.
///
/// Non-empty, lowercase alphanumeric.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Result<Self, DomainError> {
        let id = id.into();
        if Self::is_well_formed(&id) {
            Ok(Self(id))
        } else {
            Err(DomainError::InvalidIdentifier(id))
        }
    }

    /// A fresh random identifier (a simple-format UUID v4).
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().simple().to_string())
    }

    pub fn is_well_formed(id: &str) -> bool {
        ITEM_ID.is_match(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ItemId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

// ── PageFormat ───────────────────────────────────────────────────────────────

/// Paper size the rendering layer lays pages out on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageFormat {
    #[default]
    A4,
    Letter,
}

impl PageFormat {
    pub const NAMES: &'static [&'static str] = &["a4", "letter"];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::A4 => "a4",
            Self::Letter => "letter",
        }
    }
}

impl FromStr for PageFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "a4" => Ok(Self::A4),
            "letter" => Ok(Self::Letter),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_kinds_are_exact_vocabulary() {
        let keys: Vec<_> = SectionKind::ALL.iter().map(|k| k.as_str()).collect();
        assert_eq!(
            keys,
            [
                "summary",
                "awards",
                "certifications",
                "education",
                "experience",
                "volunteer",
                "interests",
                "languages",
                "profiles",
                "projects",
                "publications",
                "references",
                "skills",
            ]
        );
    }

    #[test]
    fn section_kind_parse_is_case_sensitive() {
        assert_eq!("awards".parse::<SectionKind>().unwrap(), SectionKind::Awards);
        assert!("Awards".parse::<SectionKind>().is_err());
        assert!("custom".parse::<SectionKind>().is_err());
    }

    #[test]
    fn section_kind_serializes_as_key() {
        let json = serde_json::to_value(SectionKind::Certifications).unwrap();
        assert_eq!(json, "certifications");
    }

    #[test]
    fn only_summary_is_text() {
        assert!(SectionKind::Summary.is_text());
        assert_eq!(SectionKind::ALL.iter().filter(|k| k.is_text()).count(), 1);
    }

    #[test]
    fn locale_resolves_by_prefix() {
        assert_eq!(Locale::resolve("pl-PL"), Locale::Pl);
        assert_eq!(Locale::resolve("en-GB"), Locale::En);
        assert_eq!(Locale::resolve("pl"), Locale::Pl);
    }

    #[test]
    fn locale_falls_back_to_english() {
        assert_eq!(Locale::resolve("de-DE"), Locale::En);
        assert_eq!(Locale::resolve(""), Locale::En);
        assert_eq!(Locale::resolve("p"), Locale::En);
        assert_eq!(Locale::resolve("PL-pl"), Locale::En);
        assert_eq!(Locale::resolve("żółw"), Locale::En);
    }

    #[test]
    fn locale_strict_parse_rejects_tags() {
        assert!("pl-PL".parse::<Locale>().is_err());
        assert_eq!("pl".parse::<Locale>().unwrap(), Locale::Pl);
    }

    #[test]
    fn columns_bounds() {
        assert!(Columns::new(0).is_err());
        assert!(Columns::new(6).is_err());
        assert_eq!(Columns::new(5).unwrap().get(), 5);
        assert_eq!(Columns::default().get(), 1);
    }

    #[test]
    fn item_id_format() {
        assert!(ItemId::new("abc123").is_ok());
        assert!(ItemId::new("").is_err());
        assert!(ItemId::new("ABC").is_err());
        assert!(ItemId::new("a-b").is_err());
    }

    #[test]
    fn generated_ids_are_well_formed_and_distinct() {
        let a = ItemId::generate();
        let b = ItemId::generate();
        assert!(ItemId::is_well_formed(a.as_str()));
        assert_eq!(a.as_str().len(), 32);
        assert_ne!(a, b);
    }

    #[test]
    fn page_format_names_match_parser() {
        for name in PageFormat::NAMES {
            assert_eq!(name.parse::<PageFormat>().unwrap().as_str(), *name);
        }
        assert!("A4".parse::<PageFormat>().is_err());
    }
}
