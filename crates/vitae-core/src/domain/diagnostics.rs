//! Path-qualified validation diagnostics.
//!
//! Validation never stops at the first problem. Every failing field produces
//! one [`ValidationIssue`] carrying the [`FieldPath`] it was found at, and the
//! whole set travels back to the caller as [`ValidationErrors`].
//!
//! Paths render the way API consumers address fields:
//! `sections.education.items[2].date`.

use std::fmt;
use std::str::FromStr;

use serde::ser::{Serialize, SerializeStruct, Serializer};
use thiserror::Error;

// ── FieldPath ────────────────────────────────────────────────────────────────

/// One step into a document: an object key or a list index.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    Key(String),
    Index(usize),
}

/// Location of a value inside a document, relative to its root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FieldPath(Vec<PathSegment>);

impl FieldPath {
    /// The document root.
    pub const fn root() -> Self {
        Self(Vec::new())
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.0
    }

    /// Return a new path with `key` appended.
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.0.push(PathSegment::Key(key.into()));
        self
    }

    /// Return a new path with `index` appended.
    pub fn index(mut self, index: usize) -> Self {
        self.0.push(PathSegment::Index(index));
        self
    }

    pub(crate) fn push(&mut self, segment: PathSegment) {
        self.0.push(segment);
    }

    pub(crate) fn pop(&mut self) {
        self.0.pop();
    }

    /// Whether `self` is `prefix` or lies underneath it.
    pub fn starts_with(&self, prefix: &FieldPath) -> bool {
        self.0.starts_with(&prefix.0)
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("(root)");
        }
        for (i, segment) in self.0.iter().enumerate() {
            match segment {
                PathSegment::Key(key) if i == 0 => f.write_str(key)?,
                PathSegment::Key(key) => write!(f, ".{key}")?,
                PathSegment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}

/// Parses the dotted form produced by `Display`.
///
/// Keys containing `.` or `[` cannot be expressed in this notation; build
/// such paths with [`FieldPath::key`] instead.
impl FromStr for FieldPath {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut path = Self::root();
        if s.is_empty() || s == "(root)" {
            return Ok(path);
        }
        for part in s.split('.') {
            let (key, mut rest) = match part.find('[') {
                Some(at) => part.split_at(at),
                None => (part, ""),
            };
            if key.is_empty() {
                return Err(format!("empty key in path '{s}'"));
            }
            path = path.key(key);
            while let Some(stripped) = rest.strip_prefix('[') {
                let close = stripped
                    .find(']')
                    .ok_or_else(|| format!("unclosed index in path '{s}'"))?;
                let index = stripped[..close]
                    .parse::<usize>()
                    .map_err(|_| format!("invalid index in path '{s}'"))?;
                path = path.index(index);
                rest = &stripped[close + 1..];
            }
            if !rest.is_empty() {
                return Err(format!("unexpected '{rest}' in path '{s}'"));
            }
        }
        Ok(path)
    }
}

impl Serialize for FieldPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

// ── Issues ───────────────────────────────────────────────────────────────────

/// Which class of rule an issue violates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IssueCategory {
    /// Wrong scalar type, out of range, empty when required, bad format.
    Constraint,
    /// Missing field, or an object/list where something else was found.
    Structural,
    /// A built-in section's `id` is not the literal for its slot.
    Discriminator,
}

impl IssueCategory {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Constraint => "constraint",
            Self::Structural => "structural",
            Self::Discriminator => "discriminator",
        }
    }
}

impl fmt::Display for IssueCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What went wrong at a path.
#[derive(Debug, Clone, PartialEq)]
pub enum IssueKind {
    /// A required field is absent.
    Missing,
    /// The value has the wrong JSON type.
    InvalidType {
        expected: &'static str,
        found: &'static str,
    },
    /// An integer outside its inclusive bounds.
    OutOfRange { min: i64, max: i64, found: i64 },
    /// A value that must not be empty is empty.
    Empty,
    /// A string that does not have the required format.
    InvalidFormat { format: &'static str, found: String },
    /// A string outside a closed set of choices.
    InvalidVariant {
        expected: &'static [&'static str],
        found: String,
    },
    /// A section `id` that is not the expected literal.
    DiscriminatorMismatch {
        expected: &'static str,
        found: String,
    },
}

impl IssueKind {
    pub fn category(&self) -> IssueCategory {
        match self {
            Self::Missing => IssueCategory::Structural,
            Self::InvalidType { expected, .. } if matches!(*expected, "object" | "array") => {
                IssueCategory::Structural
            }
            Self::DiscriminatorMismatch { .. } => IssueCategory::Discriminator,
            _ => IssueCategory::Constraint,
        }
    }

    /// Stable machine-readable code.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Missing => "missing",
            Self::InvalidType { .. } => "invalid_type",
            Self::OutOfRange { .. } => "out_of_range",
            Self::Empty => "empty",
            Self::InvalidFormat { .. } => "invalid_format",
            Self::InvalidVariant { .. } => "invalid_variant",
            Self::DiscriminatorMismatch { .. } => "discriminator_mismatch",
        }
    }
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => f.write_str("required field is missing"),
            Self::InvalidType { expected, found } => {
                write!(f, "expected {expected}, found {found}")
            }
            Self::OutOfRange { min, max, found } => {
                write!(f, "{found} is outside the allowed range {min}..={max}")
            }
            Self::Empty => f.write_str("must not be empty"),
            Self::InvalidFormat { format, found } => {
                write!(f, "'{found}' is not a valid {format}")
            }
            Self::InvalidVariant { expected, found } => {
                write!(f, "'{found}' is not one of: {}", expected.join(", "))
            }
            Self::DiscriminatorMismatch { expected, found } => {
                write!(f, "section id must be '{expected}', found '{found}'")
            }
        }
    }
}

/// One failing field.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationIssue {
    pub path: FieldPath,
    pub kind: IssueKind,
}

impl ValidationIssue {
    pub fn new(path: FieldPath, kind: IssueKind) -> Self {
        Self { path, kind }
    }

    pub fn category(&self) -> IssueCategory {
        self.kind.category()
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.kind)
    }
}

impl Serialize for ValidationIssue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ValidationIssue", 4)?;
        state.serialize_field("path", &self.path)?;
        state.serialize_field("category", self.category().as_str())?;
        state.serialize_field("code", self.kind.code())?;
        state.serialize_field("message", &self.kind.to_string())?;
        state.end()
    }
}

// ── ValidationErrors ─────────────────────────────────────────────────────────

/// Every issue found while validating one value. Never empty.
#[derive(Debug, Clone, PartialEq, Error, serde::Serialize)]
#[error("validation failed with {} issue(s)", .issues.len())]
pub struct ValidationErrors {
    issues: Vec<ValidationIssue>,
}

impl ValidationErrors {
    /// Wrap a set of issues. Returns `None` for an empty set.
    pub fn from_issues(issues: Vec<ValidationIssue>) -> Option<Self> {
        if issues.is_empty() {
            None
        } else {
            Some(Self { issues })
        }
    }

    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ValidationIssue> {
        self.issues.iter()
    }

    /// Issues located at `prefix` or anywhere below it.
    pub fn under<'a>(
        &'a self,
        prefix: &'a FieldPath,
    ) -> impl Iterator<Item = &'a ValidationIssue> + 'a {
        self.issues.iter().filter(move |i| i.path.starts_with(prefix))
    }

    /// Whether any issue lies at or below `prefix`.
    pub fn touches(&self, prefix: &FieldPath) -> bool {
        self.under(prefix).next().is_some()
    }

    pub fn has_category(&self, category: IssueCategory) -> bool {
        self.issues.iter().any(|i| i.category() == category)
    }

    /// Multi-line listing, one issue per line.
    pub fn report(&self) -> String {
        let mut out = format!("{self}\n");
        for issue in &self.issues {
            out.push_str(&format!("  - {issue}\n"));
        }
        out
    }
}

impl From<ValidationIssue> for ValidationErrors {
    fn from(issue: ValidationIssue) -> Self {
        Self {
            issues: vec![issue],
        }
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationIssue;
    type IntoIter = std::vec::IntoIter<ValidationIssue>;

    fn into_iter(self) -> Self::IntoIter {
        self.issues.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationIssue;
    type IntoIter = std::slice::Iter<'a, ValidationIssue>;

    fn into_iter(self) -> Self::IntoIter {
        self.issues.iter()
    }
}
