pub mod basics;
pub mod common;
pub mod document;
pub mod metadata;
pub mod records;
pub mod section;
pub mod sections;

pub use basics::{Basics, CustomField, Picture, PictureEffects};
pub use common::Link;
pub use document::Document;
pub use metadata::{Css, Font, Layout, Metadata, Page, PageOptions, Theme, Typography};
pub use section::{
    AnySection, CustomSection, Section, SectionAttrs, SectionKey, SummarySection,
    default_section, validate_custom_section, validate_section,
};
pub use sections::Sections;
