//! The fixed mapping of built-in sections plus the open custom mapping.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::entities::records::{
    Award, Certification, Education, Experience, Interest, Language, Profile, Project,
    Publication, Reference, Skill, Volunteer,
};
use crate::domain::entities::section::{
    AnySection, CustomSection, Section, SectionAttrs, SummarySection, parse_custom_section,
};
use crate::domain::fields::{Cursor, Fields};
use crate::domain::locale::section_name;
use crate::domain::value_objects::{Locale, SectionKind};

/// Every section of a document, keyed as persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sections {
    pub summary: SummarySection,
    pub awards: Section<Award>,
    pub certifications: Section<Certification>,
    pub education: Section<Education>,
    pub experience: Section<Experience>,
    pub volunteer: Section<Volunteer>,
    pub interests: Section<Interest>,
    pub languages: Section<Language>,
    pub profiles: Section<Profile>,
    pub projects: Section<Project>,
    pub publications: Section<Publication>,
    pub references: Section<Reference>,
    pub skills: Section<Skill>,
    /// User-defined groups by caller-chosen key.
    pub custom: BTreeMap<String, CustomSection>,
}

impl Sections {
    /// All thirteen built-in sections, empty and named for `locale`, and no
    /// custom groups.
    pub fn default_for(locale: Locale) -> Self {
        let name = |kind| section_name(kind, locale);
        Self {
            summary: SummarySection::new(name(SectionKind::Summary)),
            awards: Section::new(name(SectionKind::Awards)),
            certifications: Section::new(name(SectionKind::Certifications)),
            education: Section::new(name(SectionKind::Education)),
            experience: Section::new(name(SectionKind::Experience)),
            volunteer: Section::new(name(SectionKind::Volunteer)),
            interests: Section::new(name(SectionKind::Interests)),
            languages: Section::new(name(SectionKind::Languages)),
            profiles: Section::new(name(SectionKind::Profiles)),
            projects: Section::new(name(SectionKind::Projects)),
            publications: Section::new(name(SectionKind::Publications)),
            references: Section::new(name(SectionKind::References)),
            skills: Section::new(name(SectionKind::Skills)),
            custom: BTreeMap::new(),
        }
    }

    pub(crate) fn parse(cx: &mut Cursor, f: Fields<'_>) -> Option<Self> {
        let summary = f.object(cx, "summary", SummarySection::parse);
        let awards = f.object(cx, "awards", Section::<Award>::parse);
        let certifications = f.object(cx, "certifications", Section::<Certification>::parse);
        let education = f.object(cx, "education", Section::<Education>::parse);
        let experience = f.object(cx, "experience", Section::<Experience>::parse);
        let volunteer = f.object(cx, "volunteer", Section::<Volunteer>::parse);
        let interests = f.object(cx, "interests", Section::<Interest>::parse);
        let languages = f.object(cx, "languages", Section::<Language>::parse);
        let profiles = f.object(cx, "profiles", Section::<Profile>::parse);
        let projects = f.object(cx, "projects", Section::<Project>::parse);
        let publications = f.object(cx, "publications", Section::<Publication>::parse);
        let references = f.object(cx, "references", Section::<Reference>::parse);
        let skills = f.object(cx, "skills", Section::<Skill>::parse);
        let custom = f.map(cx, "custom", |cx, _, raw| parse_custom_section(cx, raw));
        Some(Self {
            summary: summary?,
            awards: awards?,
            certifications: certifications?,
            education: education?,
            experience: experience?,
            volunteer: volunteer?,
            interests: interests?,
            languages: languages?,
            profiles: profiles?,
            projects: projects?,
            publications: publications?,
            references: references?,
            skills: skills?,
            custom: custom?,
        })
    }

    pub fn attrs(&self, kind: SectionKind) -> &SectionAttrs {
        match kind {
            SectionKind::Summary => &self.summary.attrs,
            SectionKind::Awards => &self.awards.attrs,
            SectionKind::Certifications => &self.certifications.attrs,
            SectionKind::Education => &self.education.attrs,
            SectionKind::Experience => &self.experience.attrs,
            SectionKind::Volunteer => &self.volunteer.attrs,
            SectionKind::Interests => &self.interests.attrs,
            SectionKind::Languages => &self.languages.attrs,
            SectionKind::Profiles => &self.profiles.attrs,
            SectionKind::Projects => &self.projects.attrs,
            SectionKind::Publications => &self.publications.attrs,
            SectionKind::References => &self.references.attrs,
            SectionKind::Skills => &self.skills.attrs,
        }
    }

    /// An owned copy of the built-in section of `kind`.
    pub fn get(&self, kind: SectionKind) -> AnySection {
        match kind {
            SectionKind::Summary => AnySection::Summary(self.summary.clone()),
            SectionKind::Awards => AnySection::Awards(self.awards.clone()),
            SectionKind::Certifications => AnySection::Certifications(self.certifications.clone()),
            SectionKind::Education => AnySection::Education(self.education.clone()),
            SectionKind::Experience => AnySection::Experience(self.experience.clone()),
            SectionKind::Volunteer => AnySection::Volunteer(self.volunteer.clone()),
            SectionKind::Interests => AnySection::Interests(self.interests.clone()),
            SectionKind::Languages => AnySection::Languages(self.languages.clone()),
            SectionKind::Profiles => AnySection::Profiles(self.profiles.clone()),
            SectionKind::Projects => AnySection::Projects(self.projects.clone()),
            SectionKind::Publications => AnySection::Publications(self.publications.clone()),
            SectionKind::References => AnySection::References(self.references.clone()),
            SectionKind::Skills => AnySection::Skills(self.skills.clone()),
        }
    }

    /// Add or replace the custom group under `key`. Returns the replaced one.
    pub fn insert_custom(
        &mut self,
        key: impl Into<String>,
        section: CustomSection,
    ) -> Option<CustomSection> {
        self.custom.insert(key.into(), section)
    }
}
