use serde::Serialize;

use crate::domain::fields::{self, Cursor, Fields};

/// A labelled hyperlink.
///
/// Invariant: `href` is empty or an absolute URL. Enforced by [`Link::parse`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Link {
    pub label: String,
    pub href: String,
}

impl Link {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.href.is_empty()
    }

    pub(crate) fn parse(cx: &mut Cursor, f: Fields<'_>) -> Option<Self> {
        let label = f.text(cx, "label");
        let href = f.required(cx, "href", fields::href);
        Some(Self {
            label: label?,
            href: href?,
        })
    }
}
