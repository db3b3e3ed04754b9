//! Primitive field validators.
//!
//! Every schema in the crate is written against two small types:
//!
//! - [`Cursor`] tracks where in the document validation currently is and
//!   collects every [`ValidationIssue`] raised along the way.
//! - [`Fields`] is a read-only view of one JSON object with one method per
//!   field primitive (text, flag, bounded integer, identifier, e-mail, lists,
//!   nested objects and maps).
//!
//! Each method returns `Some(value)` when the field is valid and `None` after
//! reporting why it is not. Callers evaluate all of a record's fields first
//! and only then combine the `Option`s, so one bad field never hides another.
//!
//! Absence and `null` are different: absent fields either take their default
//! or are reported as [`IssueKind::Missing`]; `null` is always a type error.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};

use crate::domain::diagnostics::{
    FieldPath, IssueKind, PathSegment, ValidationErrors, ValidationIssue,
};
use crate::domain::value_objects::ItemId;

static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
        .expect("valid email regex")
});

// ── Cursor ───────────────────────────────────────────────────────────────────

/// Validation position plus the issues collected so far.
#[derive(Debug, Default)]
pub struct Cursor {
    path: FieldPath,
    issues: Vec<ValidationIssue>,
}

impl Cursor {
    /// Start at the document root.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start at `path`, so issues are reported document-relative.
    pub fn at(path: FieldPath) -> Self {
        Self {
            path,
            issues: Vec::new(),
        }
    }

    pub fn path(&self) -> &FieldPath {
        &self.path
    }

    /// Record an issue at the current path.
    pub fn report(&mut self, kind: IssueKind) {
        self.issues.push(ValidationIssue::new(self.path.clone(), kind));
    }

    /// Run `f` one object key deeper.
    pub fn key<T>(&mut self, key: &str, f: impl FnOnce(&mut Self) -> T) -> T {
        self.path.push(PathSegment::Key(key.to_string()));
        let out = f(self);
        self.path.pop();
        out
    }

    /// Run `f` one list index deeper.
    pub fn index<T>(&mut self, index: usize, f: impl FnOnce(&mut Self) -> T) -> T {
        self.path.push(PathSegment::Index(index));
        let out = f(self);
        self.path.pop();
        out
    }

    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    /// Turn the outcome of a validation pass into a result.
    ///
    /// A value is only returned when no issue at all was reported.
    pub fn finish<T>(self, value: Option<T>) -> Result<T, ValidationErrors> {
        match value {
            Some(value) if self.issues.is_empty() => Ok(value),
            _ => {
                // A schema that returns None without reporting still fails.
                let fallback = ValidationIssue::new(self.path.clone(), IssueKind::Missing);
                Err(ValidationErrors::from_issues(self.issues)
                    .unwrap_or_else(|| ValidationErrors::from(fallback)))
            }
        }
    }
}

/// JSON type name used in diagnostics.
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// ── Value-level validators ───────────────────────────────────────────────────

fn mismatch(cx: &mut Cursor, expected: &'static str, found: &Value) {
    cx.report(IssueKind::InvalidType {
        expected,
        found: type_name(found),
    });
}

/// View `raw` as an object.
pub fn object<'v>(cx: &mut Cursor, raw: &'v Value) -> Option<Fields<'v>> {
    match raw {
        Value::Object(map) => Some(Fields { map }),
        other => {
            mismatch(cx, "object", other);
            None
        }
    }
}

pub fn text(cx: &mut Cursor, raw: &Value) -> Option<String> {
    match raw {
        Value::String(s) => Some(s.clone()),
        other => {
            mismatch(cx, "string", other);
            None
        }
    }
}

pub fn flag(cx: &mut Cursor, raw: &Value) -> Option<bool> {
    match raw {
        Value::Bool(b) => Some(*b),
        other => {
            mismatch(cx, "boolean", other);
            None
        }
    }
}

/// An integer within `min..=max`. Integral floats such as `2.0` are accepted.
pub fn integer(cx: &mut Cursor, raw: &Value, min: i64, max: i64) -> Option<i64> {
    let Value::Number(n) = raw else {
        mismatch(cx, "integer", raw);
        return None;
    };
    let value = match n.as_i64() {
        Some(v) => v,
        None => match n.as_f64() {
            Some(f) if f.fract() == 0.0 => f as i64,
            _ => {
                mismatch(cx, "integer", raw);
                return None;
            }
        },
    };
    if (min..=max).contains(&value) {
        Some(value)
    } else {
        cx.report(IssueKind::OutOfRange {
            min,
            max,
            found: value,
        });
        None
    }
}

pub fn number(cx: &mut Cursor, raw: &Value) -> Option<f64> {
    match raw.as_f64() {
        Some(f) => Some(f),
        None => {
            mismatch(cx, "number", raw);
            None
        }
    }
}

/// A list whose items are validated by `item`. All items are visited even
/// after one fails.
pub fn list<'v, T>(
    cx: &mut Cursor,
    raw: &'v Value,
    mut item: impl FnMut(&mut Cursor, &'v Value) -> Option<T>,
) -> Option<Vec<T>> {
    let Value::Array(values) = raw else {
        mismatch(cx, "array", raw);
        return None;
    };
    let mut out = Vec::with_capacity(values.len());
    let mut valid = true;
    for (i, value) in values.iter().enumerate() {
        match cx.index(i, |cx| item(cx, value)) {
            Some(v) => out.push(v),
            None => valid = false,
        }
    }
    valid.then_some(out)
}

pub fn text_list(cx: &mut Cursor, raw: &Value) -> Option<Vec<String>> {
    list(cx, raw, text)
}

pub fn identifier(cx: &mut Cursor, raw: &Value) -> Option<ItemId> {
    let id = text(cx, raw)?;
    if id.is_empty() {
        cx.report(IssueKind::Empty);
        return None;
    }
    match ItemId::new(id.clone()) {
        Ok(id) => Some(id),
        Err(_) => {
            cx.report(IssueKind::InvalidFormat {
                format: "identifier",
                found: id,
            });
            None
        }
    }
}

/// Empty, or a plausible `local@domain.tld` address.
pub fn email(cx: &mut Cursor, raw: &Value) -> Option<String> {
    let address = text(cx, raw)?;
    if address.is_empty() || is_email(&address) {
        Some(address)
    } else {
        cx.report(IssueKind::InvalidFormat {
            format: "email address",
            found: address,
        });
        None
    }
}

fn is_email(s: &str) -> bool {
    !s.starts_with('.') && !s.contains("..") && EMAIL.is_match(s)
}

/// Empty, or an absolute URL.
pub fn href(cx: &mut Cursor, raw: &Value) -> Option<String> {
    let href = text(cx, raw)?;
    if href.is_empty() || url::Url::parse(&href).is_ok() {
        Some(href)
    } else {
        cx.report(IssueKind::InvalidFormat {
            format: "url",
            found: href,
        });
        None
    }
}

// ── Fields ───────────────────────────────────────────────────────────────────

/// Field accessors over one JSON object.
#[derive(Debug, Clone, Copy)]
pub struct Fields<'v> {
    map: &'v Map<String, Value>,
}

impl<'v> Fields<'v> {
    pub fn get(&self, key: &str) -> Option<&'v Value> {
        self.map.get(key)
    }

    /// All keys not in `known`, with their values.
    pub fn rest(&self, known: &[&str]) -> Map<String, Value> {
        self.map
            .iter()
            .filter(|(k, _)| !known.contains(&k.as_str()))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    /// A field that must be present.
    pub fn required<T>(
        &self,
        cx: &mut Cursor,
        key: &str,
        f: impl FnOnce(&mut Cursor, &'v Value) -> Option<T>,
    ) -> Option<T> {
        let value = self.map.get(key);
        cx.key(key, |cx| match value {
            Some(value) => f(cx, value),
            None => {
                cx.report(IssueKind::Missing);
                None
            }
        })
    }

    /// A field that takes `default` when absent.
    pub fn optional<T>(
        &self,
        cx: &mut Cursor,
        key: &str,
        default: impl FnOnce() -> T,
        f: impl FnOnce(&mut Cursor, &'v Value) -> Option<T>,
    ) -> Option<T> {
        let value = self.map.get(key);
        cx.key(key, |cx| match value {
            Some(value) => f(cx, value),
            None => Some(default()),
        })
    }

    pub fn text(&self, cx: &mut Cursor, key: &str) -> Option<String> {
        self.required(cx, key, text)
    }

    pub fn text_or(&self, cx: &mut Cursor, key: &str, default: &str) -> Option<String> {
        self.optional(cx, key, || default.to_string(), text)
    }

    pub fn flag(&self, cx: &mut Cursor, key: &str) -> Option<bool> {
        self.required(cx, key, flag)
    }

    pub fn flag_or(&self, cx: &mut Cursor, key: &str, default: bool) -> Option<bool> {
        self.optional(cx, key, || default, flag)
    }

    pub fn integer(&self, cx: &mut Cursor, key: &str, min: i64, max: i64) -> Option<i64> {
        self.required(cx, key, |cx, v| integer(cx, v, min, max))
    }

    pub fn integer_or(
        &self,
        cx: &mut Cursor,
        key: &str,
        min: i64,
        max: i64,
        default: i64,
    ) -> Option<i64> {
        self.optional(cx, key, || default, |cx, v| integer(cx, v, min, max))
    }

    pub fn number_or(&self, cx: &mut Cursor, key: &str, default: f64) -> Option<f64> {
        self.optional(cx, key, || default, number)
    }

    pub fn text_list(&self, cx: &mut Cursor, key: &str) -> Option<Vec<String>> {
        self.required(cx, key, text_list)
    }

    pub fn text_list_or(
        &self,
        cx: &mut Cursor,
        key: &str,
        default: impl FnOnce() -> Vec<String>,
    ) -> Option<Vec<String>> {
        self.optional(cx, key, default, text_list)
    }

    pub fn identifier(&self, cx: &mut Cursor, key: &str) -> Option<ItemId> {
        self.required(cx, key, identifier)
    }

    pub fn email(&self, cx: &mut Cursor, key: &str) -> Option<String> {
        self.required(cx, key, email)
    }

    /// A string that must equal `expected`, such as a section's `id`.
    pub fn discriminator(&self, cx: &mut Cursor, key: &str, expected: &'static str) -> Option<()> {
        self.required(cx, key, |cx, v| {
            let found = text(cx, v)?;
            if found == expected {
                Some(())
            } else {
                cx.report(IssueKind::DiscriminatorMismatch { expected, found });
                None
            }
        })
    }

    /// A string restricted to `choices`, parsed with `FromStr`.
    pub fn variant_or<T: std::str::FromStr>(
        &self,
        cx: &mut Cursor,
        key: &str,
        choices: &'static [&'static str],
        default: T,
    ) -> Option<T> {
        self.optional(
            cx,
            key,
            || default,
            |cx, v| {
                let found = text(cx, v)?;
                match found.parse() {
                    Ok(parsed) => Some(parsed),
                    Err(_) => {
                        cx.report(IssueKind::InvalidVariant {
                            expected: choices,
                            found,
                        });
                        None
                    }
                }
            },
        )
    }

    /// A nested object that must be present.
    pub fn object<T>(
        &self,
        cx: &mut Cursor,
        key: &str,
        f: impl FnOnce(&mut Cursor, Fields<'v>) -> Option<T>,
    ) -> Option<T> {
        self.required(cx, key, |cx, v| {
            let fields = object(cx, v)?;
            f(cx, fields)
        })
    }

    /// A nested object that takes `default` when absent.
    pub fn object_or<T>(
        &self,
        cx: &mut Cursor,
        key: &str,
        default: impl FnOnce() -> T,
        f: impl FnOnce(&mut Cursor, Fields<'v>) -> Option<T>,
    ) -> Option<T> {
        self.optional(cx, key, default, |cx, v| {
            let fields = object(cx, v)?;
            f(cx, fields)
        })
    }

    /// A list that must be present.
    pub fn list<T>(
        &self,
        cx: &mut Cursor,
        key: &str,
        item: impl FnMut(&mut Cursor, &'v Value) -> Option<T>,
    ) -> Option<Vec<T>> {
        self.required(cx, key, |cx, v| list(cx, v, item))
    }

    /// A list that takes `default` when absent.
    pub fn list_or<T>(
        &self,
        cx: &mut Cursor,
        key: &str,
        default: impl FnOnce() -> Vec<T>,
        item: impl FnMut(&mut Cursor, &'v Value) -> Option<T>,
    ) -> Option<Vec<T>> {
        self.optional(cx, key, default, |cx, v| list(cx, v, item))
    }

    /// An object used as an open string-keyed mapping. Every entry is
    /// visited; one bad entry does not stop its siblings.
    pub fn map<T>(
        &self,
        cx: &mut Cursor,
        key: &str,
        mut entry: impl FnMut(&mut Cursor, &str, &'v Value) -> Option<T>,
    ) -> Option<BTreeMap<String, T>> {
        self.required(cx, key, |cx, v| {
            let fields = object(cx, v)?;
            let mut out = BTreeMap::new();
            let mut valid = true;
            for (name, value) in fields.map {
                match cx.key(name, |cx| entry(cx, name, value)) {
                    Some(parsed) => {
                        out.insert(name.clone(), parsed);
                    }
                    None => valid = false,
                }
            }
            valid.then_some(out)
        })
    }
}
