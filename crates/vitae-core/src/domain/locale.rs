//! Localized section display names.
//!
//! # Design
//!
//! Every built-in section is described exactly once by a [`SectionNames`]
//! entry in [`SECTION_NAMES`], holding its display name in each supported
//! locale. Lookups are linear scans over a 13-entry static table; there is
//! nothing to initialize and nothing to lock.
//!
//! # Adding a locale
//!
//! 1. Add a variant to `Locale` in `value_objects.rs`
//! 2. Add a field to [`SectionNames`] and fill it for every entry
//! 3. Add the arm to [`SectionNames::get`]

use crate::domain::value_objects::{Locale, SectionKind};

/// Display names of one section in every supported locale.
#[derive(Debug, Clone, Copy)]
pub struct SectionNames {
    pub kind: SectionKind,
    pub en: &'static str,
    pub pl: &'static str,
}

impl SectionNames {
    pub const fn get(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::En => self.en,
            Locale::Pl => self.pl,
        }
    }
}

/// Single source of truth for section display names.
pub static SECTION_NAMES: &[SectionNames] = &[
    SectionNames {
        kind: SectionKind::Summary,
        en: "Summary",
        pl: "Podsumowanie",
    },
    SectionNames {
        kind: SectionKind::Awards,
        en: "Awards",
        pl: "Nagrody",
    },
    SectionNames {
        kind: SectionKind::Certifications,
        en: "Certifications",
        pl: "Certyfikaty",
    },
    SectionNames {
        kind: SectionKind::Education,
        en: "Education",
        pl: "Edukacja",
    },
    SectionNames {
        kind: SectionKind::Experience,
        en: "Experience",
        pl: "Doświadczenie",
    },
    SectionNames {
        kind: SectionKind::Volunteer,
        en: "Volunteering",
        pl: "Wolontariat",
    },
    SectionNames {
        kind: SectionKind::Interests,
        en: "Interests",
        pl: "Zainteresowania",
    },
    SectionNames {
        kind: SectionKind::Languages,
        en: "Languages",
        pl: "Języki",
    },
    SectionNames {
        kind: SectionKind::Profiles,
        en: "Profiles",
        pl: "Profile",
    },
    SectionNames {
        kind: SectionKind::Projects,
        en: "Projects",
        pl: "Projekty",
    },
    SectionNames {
        kind: SectionKind::Publications,
        en: "Publications",
        pl: "Publikacje",
    },
    SectionNames {
        kind: SectionKind::References,
        en: "References",
        pl: "Referencje",
    },
    SectionNames {
        kind: SectionKind::Skills,
        en: "Skills",
        pl: "Umiejętności",
    },
];

pub fn find_names(kind: SectionKind) -> Option<&'static SectionNames> {
    SECTION_NAMES.iter().find(|entry| entry.kind == kind)
}

/// The display name of `kind` in `locale`.
///
/// A kind missing from the table falls back to its key; the integrity test
/// keeps that branch unreachable.
pub fn section_name(kind: SectionKind, locale: Locale) -> &'static str {
    find_names(kind).map_or(kind.as_str(), |entry| entry.get(locale))
}

/// Assert that every section kind has exactly one non-empty entry.
#[doc(hidden)]
pub fn assert_table_integrity() {
    for kind in SectionKind::ALL {
        let entries = SECTION_NAMES.iter().filter(|e| e.kind == kind).count();
        assert_eq!(entries, 1, "section {kind} has {entries} name entries");
        for locale in Locale::SUPPORTED {
            assert!(
                !section_name(kind, locale).is_empty(),
                "section {kind} has an empty {locale} name"
            );
        }
    }
    assert_eq!(SECTION_NAMES.len(), SectionKind::ALL.len());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_complete() {
        assert_table_integrity();
    }

    #[test]
    fn polish_names() {
        assert_eq!(section_name(SectionKind::Education, Locale::Pl), "Edukacja");
        assert_eq!(section_name(SectionKind::Skills, Locale::Pl), "Umiejętności");
        assert_eq!(section_name(SectionKind::Experience, Locale::Pl), "Doświadczenie");
    }

    #[test]
    fn english_volunteer_name_differs_from_key() {
        assert_eq!(section_name(SectionKind::Volunteer, Locale::En), "Volunteering");
    }

    #[test]
    fn resolved_tags_select_names() {
        let name = |tag| section_name(SectionKind::Education, Locale::resolve(tag));
        assert_eq!(name("pl-PL"), "Edukacja");
        assert_eq!(name("en-GB"), "Education");
        assert_eq!(name("de-DE"), "Education");
        assert_eq!(name(""), "Education");
    }
}
