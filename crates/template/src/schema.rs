//! Template JSON schema types

use serde::{Deserialize, Serialize};

use crate::markup::anchors;

/// Root template structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateDef {
    /// Schema version
    pub version: String,

    /// Document language for the `lang` attribute
    #[serde(default = "default_lang")]
    pub lang: String,

    /// Page configuration
    #[serde(default)]
    pub page: PageSpec,

    /// Typography and colors
    #[serde(default)]
    pub style: StyleSpec,

    /// Sections in display order
    pub sections: Vec<Section>,
}

fn default_lang() -> String {
    "en".to_string()
}

impl Default for TemplateDef {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            lang: default_lang(),
            page: PageSpec::default(),
            style: StyleSpec::default(),
            sections: SectionKind::ALL
                .iter()
                .map(|&kind| Section { kind, title: None })
                .collect(),
        }
    }
}

/// Page configuration
///
/// The printed page margin is always zero; `padding` is applied inside the
/// page container instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageSpec {
    #[serde(default)]
    pub size: PageSize,

    /// CSS padding of the page container
    #[serde(default = "default_padding")]
    pub padding: String,
}

fn default_padding() -> String {
    "0.5in 0.6in".to_string()
}

impl Default for PageSpec {
    fn default() -> Self {
        Self {
            size: PageSize::default(),
            padding: default_padding(),
        }
    }
}

/// Printed page size
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PageSize {
    #[default]
    Letter,
    A4,
    Legal,
}

impl PageSize {
    /// Value for the CSS `@page { size }` descriptor
    pub fn css_name(self) -> &'static str {
        match self {
            PageSize::Letter => "letter",
            PageSize::A4 => "A4",
            PageSize::Legal => "legal",
        }
    }

    /// Width and height as CSS lengths
    pub fn dimensions(self) -> (&'static str, &'static str) {
        match self {
            PageSize::Letter => ("8.5in", "11in"),
            PageSize::A4 => ("210mm", "297mm"),
            PageSize::Legal => ("8.5in", "14in"),
        }
    }
}

/// Typography and colors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleSpec {
    /// CSS font-family list
    #[serde(rename = "fontFamily")]
    #[serde(default = "default_font_family")]
    pub font_family: String,

    /// Base font size in points
    #[serde(rename = "fontSize")]
    #[serde(default = "default_font_size")]
    pub font_size: f64,

    /// Unitless CSS line height
    #[serde(rename = "lineHeight")]
    #[serde(default = "default_line_height")]
    pub line_height: f64,

    #[serde(rename = "textColor")]
    #[serde(default = "default_text_color")]
    pub text_color: String,

    /// Color of the name, headings and links
    #[serde(rename = "accentColor")]
    #[serde(default = "default_accent_color")]
    pub accent_color: String,
}

fn default_font_family() -> String {
    "'Helvetica Neue', Helvetica, Arial, sans-serif".to_string()
}

fn default_font_size() -> f64 {
    10.5
}

fn default_line_height() -> f64 {
    1.35
}

fn default_text_color() -> String {
    "#222222".to_string()
}

fn default_accent_color() -> String {
    "#1f4e79".to_string()
}

impl Default for StyleSpec {
    fn default() -> Self {
        Self {
            font_family: default_font_family(),
            font_size: default_font_size(),
            line_height: default_line_height(),
            text_color: default_text_color(),
            accent_color: default_accent_color(),
        }
    }
}

/// One output section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Which part of the resume this section shows
    #[serde(rename = "type")]
    pub kind: SectionKind,

    /// Heading text; the kind's default title when omitted
    #[serde(default)]
    pub title: Option<String>,
}

impl Section {
    pub fn title(&self) -> &str {
        self.title
            .as_deref()
            .unwrap_or_else(|| self.kind.default_title())
    }
}

/// Section types, one per optional resume category
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    Summary,
    Skills,
    Experience,
    Education,
    Certifications,
    Projects,
    Awards,
}

impl SectionKind {
    /// Every kind, in the standard display order
    pub const ALL: [SectionKind; 7] = [
        SectionKind::Summary,
        SectionKind::Skills,
        SectionKind::Experience,
        SectionKind::Education,
        SectionKind::Certifications,
        SectionKind::Projects,
        SectionKind::Awards,
    ];

    /// Stable `id` of the section element
    pub fn anchor(self) -> &'static str {
        match self {
            SectionKind::Summary => anchors::SUMMARY,
            SectionKind::Skills => anchors::SKILLS,
            SectionKind::Experience => anchors::EXPERIENCE,
            SectionKind::Education => anchors::EDUCATION,
            SectionKind::Certifications => anchors::CERTIFICATIONS,
            SectionKind::Projects => anchors::PROJECTS,
            SectionKind::Awards => anchors::AWARDS,
        }
    }

    pub fn default_title(self) -> &'static str {
        match self {
            SectionKind::Summary => "Professional Summary",
            SectionKind::Skills => "Skills",
            SectionKind::Experience => "Experience",
            SectionKind::Education => "Education",
            SectionKind::Certifications => "Certifications",
            SectionKind::Projects => "Projects",
            SectionKind::Awards => "Awards",
        }
    }
}
