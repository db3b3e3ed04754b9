//! Section composition.
//!
//! A section is the shared [`SectionAttrs`] embedded by value next to its
//! content. Built-in sections bind a fixed discriminator (`id == key`);
//! custom groups carry an assigned identifier instead.

use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::domain::diagnostics::{FieldPath, ValidationErrors};
use crate::domain::entities::records::{
    Award, Certification, CustomItem, Education, Experience, Interest, Language, Profile, Project,
    Publication, Record, Reference, Skill, Volunteer, parse_item,
};
use crate::domain::fields::{Cursor, Fields, object};
use crate::domain::locale::section_name;
use crate::domain::value_objects::{Columns, ItemId, Locale, SectionKind};

// ── Shared attributes ────────────────────────────────────────────────────────

/// Attributes every section has, whatever its content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionAttrs {
    pub name: String,
    pub columns: Columns,
    pub visible: bool,
}

impl SectionAttrs {
    /// One column, visible.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            columns: Columns::default(),
            visible: true,
        }
    }

    pub(crate) fn parse(cx: &mut Cursor, f: Fields<'_>) -> Option<Self> {
        let name = f.text(cx, "name");
        let columns = f
            .integer_or(
                cx,
                "columns",
                i64::from(Columns::MIN),
                i64::from(Columns::MAX),
                i64::from(Columns::MIN),
            )
            .and_then(|n| u8::try_from(n).ok())
            .and_then(|n| Columns::new(n).ok());
        let visible = f.flag_or(cx, "visible", true);
        Some(Self {
            name: name?,
            columns: columns?,
            visible: visible?,
        })
    }
}

// ── Built-in list section ────────────────────────────────────────────────────

/// A built-in section holding records of one kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section<R> {
    pub id: SectionKind,
    #[serde(flatten)]
    pub attrs: SectionAttrs,
    pub items: Vec<R>,
}

impl<R: Record> Section<R> {
    /// An empty section of `R`'s kind.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: R::KIND,
            attrs: SectionAttrs::named(name),
            items: Vec::new(),
        }
    }

    pub(crate) fn parse(cx: &mut Cursor, f: Fields<'_>) -> Option<Self> {
        let id = f.discriminator(cx, "id", R::KIND.as_str());
        let attrs = SectionAttrs::parse(cx, f);
        let items = f.list(cx, "items", parse_item::<R>);
        id?;
        Some(Self {
            id: R::KIND,
            attrs: attrs?,
            items: items?,
        })
    }
}

// ── Summary ──────────────────────────────────────────────────────────────────

/// The one text-valued built-in section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummarySection {
    pub id: SectionKind,
    #[serde(flatten)]
    pub attrs: SectionAttrs,
    /// Rich text (HTML) body.
    pub content: String,
}

impl SummarySection {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: SectionKind::Summary,
            attrs: SectionAttrs::named(name),
            content: String::new(),
        }
    }

    pub(crate) fn parse(cx: &mut Cursor, f: Fields<'_>) -> Option<Self> {
        let id = f.discriminator(cx, "id", SectionKind::Summary.as_str());
        let attrs = SectionAttrs::parse(cx, f);
        let content = f.text_or(cx, "content", "");
        id?;
        Some(Self {
            id: SectionKind::Summary,
            attrs: attrs?,
            content: content?,
        })
    }
}

// ── Custom group ─────────────────────────────────────────────────────────────

/// A user-defined section of free-form items.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomSection {
    pub id: ItemId,
    #[serde(flatten)]
    pub attrs: SectionAttrs,
    pub items: Vec<CustomItem>,
}

impl CustomSection {
    pub fn new(id: ItemId, name: impl Into<String>) -> Self {
        Self {
            id,
            attrs: SectionAttrs::named(name),
            items: Vec::new(),
        }
    }

    pub(crate) fn parse(cx: &mut Cursor, f: Fields<'_>) -> Option<Self> {
        let id = f.identifier(cx, "id");
        let attrs = SectionAttrs::parse(cx, f);
        let items = f.list(cx, "items", |cx, raw| {
            object(cx, raw).and_then(|item| CustomItem::parse(cx, item))
        });
        Some(Self {
            id: id?,
            attrs: attrs?,
            items: items?,
        })
    }
}

// ── Any section ──────────────────────────────────────────────────────────────

/// Any one section: the thirteen built-in kinds plus a custom group.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AnySection {
    Summary(SummarySection),
    Awards(Section<Award>),
    Certifications(Section<Certification>),
    Education(Section<Education>),
    Experience(Section<Experience>),
    Volunteer(Section<Volunteer>),
    Interests(Section<Interest>),
    Languages(Section<Language>),
    Profiles(Section<Profile>),
    Projects(Section<Project>),
    Publications(Section<Publication>),
    References(Section<Reference>),
    Skills(Section<Skill>),
    Custom(CustomSection),
}

impl AnySection {
    /// The built-in kind, or `None` for a custom group.
    pub fn kind(&self) -> Option<SectionKind> {
        Some(match self {
            Self::Summary(_) => SectionKind::Summary,
            Self::Awards(_) => SectionKind::Awards,
            Self::Certifications(_) => SectionKind::Certifications,
            Self::Education(_) => SectionKind::Education,
            Self::Experience(_) => SectionKind::Experience,
            Self::Volunteer(_) => SectionKind::Volunteer,
            Self::Interests(_) => SectionKind::Interests,
            Self::Languages(_) => SectionKind::Languages,
            Self::Profiles(_) => SectionKind::Profiles,
            Self::Projects(_) => SectionKind::Projects,
            Self::Publications(_) => SectionKind::Publications,
            Self::References(_) => SectionKind::References,
            Self::Skills(_) => SectionKind::Skills,
            Self::Custom(_) => return None,
        })
    }

    pub fn attrs(&self) -> &SectionAttrs {
        match self {
            Self::Summary(s) => &s.attrs,
            Self::Awards(s) => &s.attrs,
            Self::Certifications(s) => &s.attrs,
            Self::Education(s) => &s.attrs,
            Self::Experience(s) => &s.attrs,
            Self::Volunteer(s) => &s.attrs,
            Self::Interests(s) => &s.attrs,
            Self::Languages(s) => &s.attrs,
            Self::Profiles(s) => &s.attrs,
            Self::Projects(s) => &s.attrs,
            Self::Publications(s) => &s.attrs,
            Self::References(s) => &s.attrs,
            Self::Skills(s) => &s.attrs,
            Self::Custom(s) => &s.attrs,
        }
    }

    /// Number of items; `0` or `1` for the summary (whether it has content).
    pub fn len(&self) -> usize {
        match self {
            Self::Summary(s) => usize::from(!s.content.is_empty()),
            Self::Awards(s) => s.items.len(),
            Self::Certifications(s) => s.items.len(),
            Self::Education(s) => s.items.len(),
            Self::Experience(s) => s.items.len(),
            Self::Volunteer(s) => s.items.len(),
            Self::Interests(s) => s.items.len(),
            Self::Languages(s) => s.items.len(),
            Self::Profiles(s) => s.items.len(),
            Self::Projects(s) => s.items.len(),
            Self::Publications(s) => s.items.len(),
            Self::References(s) => s.items.len(),
            Self::Skills(s) => s.items.len(),
            Self::Custom(s) => s.items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ── Section keys ─────────────────────────────────────────────────────────────

/// Where a section lives under `sections`.
///
/// `Sections` and `CustomGroups` name the containers themselves; they key
/// reports for a `sections` or `sections.custom` value of the wrong shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SectionKey {
    BuiltIn(SectionKind),
    Custom(String),
    Sections,
    CustomGroups,
}

impl SectionKey {
    /// Document path of the section, e.g. `sections.custom.extra`.
    pub fn path(&self) -> FieldPath {
        let sections = FieldPath::root().key("sections");
        match self {
            Self::BuiltIn(kind) => sections.key(kind.as_str()),
            Self::Custom(key) => sections.key("custom").key(key.as_str()),
            Self::Sections => sections,
            Self::CustomGroups => sections.key("custom"),
        }
    }
}

impl fmt::Display for SectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BuiltIn(kind) => write!(f, "{kind}"),
            Self::Custom(key) => write!(f, "custom.{key}"),
            Self::Sections => f.write_str("sections"),
            Self::CustomGroups => f.write_str("custom"),
        }
    }
}

impl Serialize for SectionKey {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

// ── Dispatch ─────────────────────────────────────────────────────────────────

/// Validate `raw` as the section of `kind` at the cursor's position.
pub(crate) fn parse_section(cx: &mut Cursor, kind: SectionKind, raw: &Value) -> Option<AnySection> {
    let f = object(cx, raw)?;
    match kind {
        SectionKind::Summary => SummarySection::parse(cx, f).map(AnySection::Summary),
        SectionKind::Awards => Section::parse(cx, f).map(AnySection::Awards),
        SectionKind::Certifications => Section::parse(cx, f).map(AnySection::Certifications),
        SectionKind::Education => Section::parse(cx, f).map(AnySection::Education),
        SectionKind::Experience => Section::parse(cx, f).map(AnySection::Experience),
        SectionKind::Volunteer => Section::parse(cx, f).map(AnySection::Volunteer),
        SectionKind::Interests => Section::parse(cx, f).map(AnySection::Interests),
        SectionKind::Languages => Section::parse(cx, f).map(AnySection::Languages),
        SectionKind::Profiles => Section::parse(cx, f).map(AnySection::Profiles),
        SectionKind::Projects => Section::parse(cx, f).map(AnySection::Projects),
        SectionKind::Publications => Section::parse(cx, f).map(AnySection::Publications),
        SectionKind::References => Section::parse(cx, f).map(AnySection::References),
        SectionKind::Skills => Section::parse(cx, f).map(AnySection::Skills),
    }
}

pub(crate) fn parse_custom_section(cx: &mut Cursor, raw: &Value) -> Option<CustomSection> {
    let f = object(cx, raw)?;
    CustomSection::parse(cx, f)
}

/// Validate one built-in section. Issue paths are document-relative
/// (`sections.<kind>...`).
pub fn validate_section(kind: SectionKind, raw: &Value) -> Result<AnySection, ValidationErrors> {
    let mut cx = Cursor::at(SectionKey::BuiltIn(kind).path());
    let section = parse_section(&mut cx, kind, raw);
    cx.finish(section)
}

/// Validate one custom group stored under `sections.custom.<key>`.
pub fn validate_custom_section(key: &str, raw: &Value) -> Result<CustomSection, ValidationErrors> {
    let mut cx = Cursor::at(SectionKey::Custom(key.to_string()).path());
    let section = parse_custom_section(&mut cx, raw);
    cx.finish(section)
}

/// The empty section of `kind`, named for `locale` unless `name` is given.
pub fn default_section(kind: SectionKind, locale: Locale, name: Option<&str>) -> AnySection {
    let name = name.unwrap_or_else(|| section_name(kind, locale));
    match kind {
        SectionKind::Summary => AnySection::Summary(SummarySection::new(name)),
        SectionKind::Awards => AnySection::Awards(Section::new(name)),
        SectionKind::Certifications => AnySection::Certifications(Section::new(name)),
        SectionKind::Education => AnySection::Education(Section::new(name)),
        SectionKind::Experience => AnySection::Experience(Section::new(name)),
        SectionKind::Volunteer => AnySection::Volunteer(Section::new(name)),
        SectionKind::Interests => AnySection::Interests(Section::new(name)),
        SectionKind::Languages => AnySection::Languages(Section::new(name)),
        SectionKind::Profiles => AnySection::Profiles(Section::new(name)),
        SectionKind::Projects => AnySection::Projects(Section::new(name)),
        SectionKind::Publications => AnySection::Publications(Section::new(name)),
        SectionKind::References => AnySection::References(Section::new(name)),
        SectionKind::Skills => AnySection::Skills(Section::new(name)),
    }
}
