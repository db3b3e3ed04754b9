//! Dated, linkable entries: awards, certifications, education, experience,
//! volunteering, projects, publications, references.
//!
//! Dates are display text ("2019 - Present"), not calendar values.

use serde::Serialize;

use super::Record;
use crate::domain::entities::common::Link;
use crate::domain::fields::{Cursor, Fields};
use crate::domain::value_objects::SectionKind;

// ── Award ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Award {
    pub visible: bool,
    pub title: String,
    pub awarder: String,
    pub date: String,
    pub summary: String,
    pub url: Link,
}

impl Default for Award {
    fn default() -> Self {
        Self {
            visible: true,
            title: String::new(),
            awarder: String::new(),
            date: String::new(),
            summary: String::new(),
            url: Link::default(),
        }
    }
}

impl Record for Award {
    const KIND: SectionKind = SectionKind::Awards;

    fn parse(cx: &mut Cursor, f: Fields<'_>) -> Option<Self> {
        let visible = f.flag(cx, "visible");
        let title = f.text(cx, "title");
        let awarder = f.text(cx, "awarder");
        let date = f.text(cx, "date");
        let summary = f.text(cx, "summary");
        let url = f.object(cx, "url", Link::parse);
        Some(Self {
            visible: visible?,
            title: title?,
            awarder: awarder?,
            date: date?,
            summary: summary?,
            url: url?,
        })
    }
}

// ── Certification ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Certification {
    pub visible: bool,
    pub name: String,
    pub issuer: String,
    pub date: String,
    pub summary: String,
    pub url: Link,
}

impl Default for Certification {
    fn default() -> Self {
        Self {
            visible: true,
            name: String::new(),
            issuer: String::new(),
            date: String::new(),
            summary: String::new(),
            url: Link::default(),
        }
    }
}

impl Record for Certification {
    const KIND: SectionKind = SectionKind::Certifications;

    fn parse(cx: &mut Cursor, f: Fields<'_>) -> Option<Self> {
        let visible = f.flag(cx, "visible");
        let name = f.text(cx, "name");
        let issuer = f.text(cx, "issuer");
        let date = f.text(cx, "date");
        let summary = f.text(cx, "summary");
        let url = f.object(cx, "url", Link::parse);
        Some(Self {
            visible: visible?,
            name: name?,
            issuer: issuer?,
            date: date?,
            summary: summary?,
            url: url?,
        })
    }
}

// ── Education ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub visible: bool,
    pub institution: String,
    /// Degree or programme type, e.g. "Bachelor's".
    pub study_type: String,
    pub area: String,
    pub score: String,
    pub date: String,
    pub summary: String,
    pub url: Link,
}

impl Default for Education {
    fn default() -> Self {
        Self {
            visible: true,
            institution: String::new(),
            study_type: String::new(),
            area: String::new(),
            score: String::new(),
            date: String::new(),
            summary: String::new(),
            url: Link::default(),
        }
    }
}

impl Record for Education {
    const KIND: SectionKind = SectionKind::Education;

    fn parse(cx: &mut Cursor, f: Fields<'_>) -> Option<Self> {
        let visible = f.flag(cx, "visible");
        let institution = f.text(cx, "institution");
        let study_type = f.text(cx, "studyType");
        let area = f.text(cx, "area");
        let score = f.text(cx, "score");
        let date = f.text(cx, "date");
        let summary = f.text(cx, "summary");
        let url = f.object(cx, "url", Link::parse);
        Some(Self {
            visible: visible?,
            institution: institution?,
            study_type: study_type?,
            area: area?,
            score: score?,
            date: date?,
            summary: summary?,
            url: url?,
        })
    }
}

// ── Experience ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Experience {
    pub visible: bool,
    pub company: String,
    pub position: String,
    pub location: String,
    pub date: String,
    pub summary: String,
    pub url: Link,
}

impl Default for Experience {
    fn default() -> Self {
        Self {
            visible: true,
            company: String::new(),
            position: String::new(),
            location: String::new(),
            date: String::new(),
            summary: String::new(),
            url: Link::default(),
        }
    }
}

impl Record for Experience {
    const KIND: SectionKind = SectionKind::Experience;

    fn parse(cx: &mut Cursor, f: Fields<'_>) -> Option<Self> {
        let visible = f.flag(cx, "visible");
        let company = f.text(cx, "company");
        let position = f.text(cx, "position");
        let location = f.text(cx, "location");
        let date = f.text(cx, "date");
        let summary = f.text(cx, "summary");
        let url = f.object(cx, "url", Link::parse);
        Some(Self {
            visible: visible?,
            company: company?,
            position: position?,
            location: location?,
            date: date?,
            summary: summary?,
            url: url?,
        })
    }
}

// ── Volunteer ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Volunteer {
    pub visible: bool,
    pub organization: String,
    pub position: String,
    pub location: String,
    pub date: String,
    pub summary: String,
    pub url: Link,
}

impl Default for Volunteer {
    fn default() -> Self {
        Self {
            visible: true,
            organization: String::new(),
            position: String::new(),
            location: String::new(),
            date: String::new(),
            summary: String::new(),
            url: Link::default(),
        }
    }
}

impl Record for Volunteer {
    const KIND: SectionKind = SectionKind::Volunteer;

    fn parse(cx: &mut Cursor, f: Fields<'_>) -> Option<Self> {
        let visible = f.flag(cx, "visible");
        let organization = f.text(cx, "organization");
        let position = f.text(cx, "position");
        let location = f.text(cx, "location");
        let date = f.text(cx, "date");
        let summary = f.text(cx, "summary");
        let url = f.object(cx, "url", Link::parse);
        Some(Self {
            visible: visible?,
            organization: organization?,
            position: position?,
            location: location?,
            date: date?,
            summary: summary?,
            url: url?,
        })
    }
}

// ── Project ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Project {
    pub visible: bool,
    pub name: String,
    pub description: String,
    pub date: String,
    pub summary: String,
    pub keywords: Vec<String>,
    pub url: Link,
}

impl Default for Project {
    fn default() -> Self {
        Self {
            visible: true,
            name: String::new(),
            description: String::new(),
            date: String::new(),
            summary: String::new(),
            keywords: Vec::new(),
            url: Link::default(),
        }
    }
}

impl Record for Project {
    const KIND: SectionKind = SectionKind::Projects;

    fn parse(cx: &mut Cursor, f: Fields<'_>) -> Option<Self> {
        let visible = f.flag(cx, "visible");
        let name = f.text(cx, "name");
        let description = f.text(cx, "description");
        let date = f.text(cx, "date");
        let summary = f.text(cx, "summary");
        let keywords = f.text_list(cx, "keywords");
        let url = f.object(cx, "url", Link::parse);
        Some(Self {
            visible: visible?,
            name: name?,
            description: description?,
            date: date?,
            summary: summary?,
            keywords: keywords?,
            url: url?,
        })
    }
}

// ── Publication ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Publication {
    pub visible: bool,
    pub name: String,
    pub publisher: String,
    pub date: String,
    pub summary: String,
    pub url: Link,
}

impl Default for Publication {
    fn default() -> Self {
        Self {
            visible: true,
            name: String::new(),
            publisher: String::new(),
            date: String::new(),
            summary: String::new(),
            url: Link::default(),
        }
    }
}

impl Record for Publication {
    const KIND: SectionKind = SectionKind::Publications;

    fn parse(cx: &mut Cursor, f: Fields<'_>) -> Option<Self> {
        let visible = f.flag(cx, "visible");
        let name = f.text(cx, "name");
        let publisher = f.text(cx, "publisher");
        let date = f.text(cx, "date");
        let summary = f.text(cx, "summary");
        let url = f.object(cx, "url", Link::parse);
        Some(Self {
            visible: visible?,
            name: name?,
            publisher: publisher?,
            date: date?,
            summary: summary?,
            url: url?,
        })
    }
}

// ── Reference ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reference {
    pub visible: bool,
    pub name: String,
    pub description: String,
    pub summary: String,
    pub url: Link,
}

impl Default for Reference {
    fn default() -> Self {
        Self {
            visible: true,
            name: String::new(),
            description: String::new(),
            summary: String::new(),
            url: Link::default(),
        }
    }
}

impl Record for Reference {
    const KIND: SectionKind = SectionKind::References;

    fn parse(cx: &mut Cursor, f: Fields<'_>) -> Option<Self> {
        let visible = f.flag(cx, "visible");
        let name = f.text(cx, "name");
        let description = f.text(cx, "description");
        let summary = f.text(cx, "summary");
        let url = f.object(cx, "url", Link::parse);
        Some(Self {
            visible: visible?,
            name: name?,
            description: description?,
            summary: summary?,
            url: url?,
        })
    }
}
