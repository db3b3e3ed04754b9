//! Presentation settings: template, layout, page, theme, typography.
//!
//! Every field has a default and may be omitted from raw input.

use serde::Serialize;

use crate::domain::fields::{self, Cursor, Fields};
use crate::domain::value_objects::PageFormat;

/// Pages of columns of section keys (`"experience"`, `"custom.talks"`).
pub type Layout = Vec<Vec<Vec<String>>>;

pub const DEFAULT_TEMPLATE: &str = "rhyhorn";

pub fn default_layout() -> Layout {
    let column = |keys: &[&str]| keys.iter().map(|k| (*k).to_string()).collect::<Vec<_>>();
    vec![vec![
        column(&[
            "profiles",
            "summary",
            "experience",
            "education",
            "projects",
            "volunteer",
            "references",
        ]),
        column(&[
            "skills",
            "interests",
            "certifications",
            "awards",
            "publications",
            "languages",
        ]),
    ]]
}

// ── CSS ──────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Css {
    pub value: String,
    pub visible: bool,
}

impl Css {
    fn parse(cx: &mut Cursor, f: Fields<'_>) -> Option<Self> {
        let value = f.text_or(cx, "value", "");
        let visible = f.flag_or(cx, "visible", false);
        Some(Self {
            value: value?,
            visible: visible?,
        })
    }
}

// ── Page ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageOptions {
    pub break_line: bool,
    pub page_numbers: bool,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            break_line: true,
            page_numbers: true,
        }
    }
}

impl PageOptions {
    fn parse(cx: &mut Cursor, f: Fields<'_>) -> Option<Self> {
        let break_line = f.flag_or(cx, "breakLine", true);
        let page_numbers = f.flag_or(cx, "pageNumbers", true);
        Some(Self {
            break_line: break_line?,
            page_numbers: page_numbers?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page {
    pub margin: f64,
    pub format: PageFormat,
    pub options: PageOptions,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            margin: 18.0,
            format: PageFormat::default(),
            options: PageOptions::default(),
        }
    }
}

impl Page {
    fn parse(cx: &mut Cursor, f: Fields<'_>) -> Option<Self> {
        let margin = f.number_or(cx, "margin", 18.0);
        let format = f.variant_or(cx, "format", PageFormat::NAMES, PageFormat::default());
        let options = f.object_or(cx, "options", PageOptions::default, PageOptions::parse);
        Some(Self {
            margin: margin?,
            format: format?,
            options: options?,
        })
    }
}

// ── Theme ────────────────────────────────────────────────────────────────────

/// Colours as CSS strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Theme {
    pub background: String,
    pub text: String,
    pub primary: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: "#ffffff".into(),
            text: "#000000".into(),
            primary: "#dc2626".into(),
        }
    }
}

impl Theme {
    fn parse(cx: &mut Cursor, f: Fields<'_>) -> Option<Self> {
        let background = f.text_or(cx, "background", "#ffffff");
        let text = f.text_or(cx, "text", "#000000");
        let primary = f.text_or(cx, "primary", "#dc2626");
        Some(Self {
            background: background?,
            text: text?,
            primary: primary?,
        })
    }
}

// ── Typography ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Font {
    pub family: String,
    pub subset: String,
    pub variants: Vec<String>,
    pub size: f64,
}

fn default_variants() -> Vec<String> {
    vec!["regular".into(), "italic".into(), "600".into()]
}

impl Default for Font {
    fn default() -> Self {
        Self {
            family: "IBM Plex Serif".into(),
            subset: "latin".into(),
            variants: default_variants(),
            size: 14.0,
        }
    }
}

impl Font {
    fn parse(cx: &mut Cursor, f: Fields<'_>) -> Option<Self> {
        let family = f.text_or(cx, "family", "IBM Plex Serif");
        let subset = f.text_or(cx, "subset", "latin");
        let variants = f.text_list_or(cx, "variants", default_variants);
        let size = f.number_or(cx, "size", 14.0);
        Some(Self {
            family: family?,
            subset: subset?,
            variants: variants?,
            size: size?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Typography {
    pub font: Font,
    pub line_height: f64,
    pub hide_icons: bool,
    pub underline_links: bool,
}

impl Default for Typography {
    fn default() -> Self {
        Self {
            font: Font::default(),
            line_height: 1.5,
            hide_icons: false,
            underline_links: true,
        }
    }
}

impl Typography {
    fn parse(cx: &mut Cursor, f: Fields<'_>) -> Option<Self> {
        let font = f.object_or(cx, "font", Font::default, Font::parse);
        let line_height = f.number_or(cx, "lineHeight", 1.5);
        let hide_icons = f.flag_or(cx, "hideIcons", false);
        let underline_links = f.flag_or(cx, "underlineLinks", true);
        Some(Self {
            font: font?,
            line_height: line_height?,
            hide_icons: hide_icons?,
            underline_links: underline_links?,
        })
    }
}

// ── Metadata ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metadata {
    pub template: String,
    pub layout: Layout,
    pub css: Css,
    pub page: Page,
    pub theme: Theme,
    pub typography: Typography,
    /// Private notes, never rendered.
    pub notes: String,
}

impl Default for Metadata {
    fn default() -> Self {
        Self {
            template: DEFAULT_TEMPLATE.into(),
            layout: default_layout(),
            css: Css::default(),
            page: Page::default(),
            theme: Theme::default(),
            typography: Typography::default(),
            notes: String::new(),
        }
    }
}

impl Metadata {
    pub(crate) fn parse(cx: &mut Cursor, f: Fields<'_>) -> Option<Self> {
        let template = f.text_or(cx, "template", DEFAULT_TEMPLATE);
        let layout = f.list_or(cx, "layout", default_layout, |cx, page| {
            fields::list(cx, page, fields::text_list)
        });
        let css = f.object_or(cx, "css", Css::default, Css::parse);
        let page = f.object_or(cx, "page", Page::default, Page::parse);
        let theme = f.object_or(cx, "theme", Theme::default, Theme::parse);
        let typography = f.object_or(cx, "typography", Typography::default, Typography::parse);
        let notes = f.text_or(cx, "notes", "");
        Some(Self {
            template: template?,
            layout: layout?,
            css: css?,
            page: page?,
            theme: theme?,
            typography: typography?,
            notes: notes?,
        })
    }

    /// Every section key placed somewhere in the layout, in reading order.
    pub fn placed_keys(&self) -> impl Iterator<Item = &str> {
        self.layout.iter().flatten().flatten().map(String::as_str)
    }
}
