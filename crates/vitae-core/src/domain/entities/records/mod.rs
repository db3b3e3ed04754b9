//! Record schemas: one type per kind of section item.
//!
//! Each record kind declares its own fields with no shared base type beyond
//! the field primitives. A record is valid or invalid as a whole: `parse`
//! evaluates every field, reports each failure, and only builds the record
//! when all of them passed.
//!
//! `Default` on every record is its blank instance (empty strings, empty
//! lists, `visible = true`) and always validates.

mod career;
mod custom;
mod personal;

use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::domain::diagnostics::ValidationErrors;
use crate::domain::fields::{Cursor, Fields, object};
use crate::domain::value_objects::SectionKind;

pub use career::{
    Award, Certification, Education, Experience, Project, Publication, Reference, Volunteer,
};
pub use custom::CustomItem;
pub use personal::{Interest, Language, Profile, Skill};

/// Inclusive bounds of a skill or language `level`.
pub const LEVEL_RANGE: (i64, i64) = (0, 5);

/// An item kind that belongs to exactly one built-in list section.
pub trait Record: Sized + Clone + PartialEq + fmt::Debug + Default + Serialize {
    /// The section whose `items` hold this record.
    const KIND: SectionKind;

    /// Validate the fields of one raw item.
    fn parse(cx: &mut Cursor, fields: Fields<'_>) -> Option<Self>;
}

/// Validate one raw item (object check included) at the cursor's position.
pub(crate) fn parse_item<R: Record>(cx: &mut Cursor, raw: &Value) -> Option<R> {
    let fields = object(cx, raw)?;
    R::parse(cx, fields)
}

/// Validate a single record in isolation. Paths are relative to the record.
pub fn validate_record<R: Record>(raw: &Value) -> Result<R, ValidationErrors> {
    let mut cx = Cursor::new();
    let record = parse_item::<R>(&mut cx, raw);
    cx.finish(record)
}
