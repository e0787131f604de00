//! Template compilation
//!
//! A compiled template is checked once and then never changes, so it can be
//! shared read-only between any number of concurrent render calls.

use std::collections::HashSet;
use std::path::Path;

use crate::markup::anchors;
use crate::parser::parse_template;
use crate::{
    PageSize, Result, Section, SectionKind, TemplateDef, TemplateError, STANDARD_TEMPLATE,
};

/// Major schema version this crate understands
const SUPPORTED_MAJOR_VERSION: &str = "1";

/// Characters that could close the inline stylesheet or inject rules
const FORBIDDEN_STYLE_CHARS: [char; 5] = ['<', '>', '{', '}', ';'];

/// Immutable, validated template with its stylesheet prepared
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledTemplate {
    def: TemplateDef,
    stylesheet: String,
}

impl CompiledTemplate {
    /// Check a template definition and prepare it for rendering
    ///
    /// Section kinds the definition leaves out are appended after the listed
    /// ones, in standard order and with their default titles, so every kind
    /// of resume content has a place on the page.
    pub fn compile(mut def: TemplateDef) -> Result<Self> {
        check_version(&def.version)?;
        check_sections(&def.sections)?;
        check_style(&def)?;
        complete_sections(&mut def.sections);

        let stylesheet = build_stylesheet(&def);
        tracing::info!(
            version = %def.version,
            page = def.page.size.css_name(),
            sections = def.sections.len(),
            "compiled resume template"
        );

        Ok(Self { def, stylesheet })
    }

    /// Parse and compile a template from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        Self::compile(parse_template(json)?)
    }

    /// Load, parse and compile a template file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// The embedded standard template
    pub fn standard() -> Result<Self> {
        Self::from_json(STANDARD_TEMPLATE)
    }

    pub fn definition(&self) -> &TemplateDef {
        &self.def
    }

    pub fn sections(&self) -> &[Section] {
        &self.def.sections
    }

    pub fn page_size(&self) -> PageSize {
        self.def.page.size
    }

    pub fn lang(&self) -> &str {
        &self.def.lang
    }

    /// Inline CSS emitted into every document
    pub fn stylesheet(&self) -> &str {
        &self.stylesheet
    }
}

fn check_version(version: &str) -> Result<()> {
    let major = version.split('.').next().unwrap_or_default();
    if major != SUPPORTED_MAJOR_VERSION {
        return Err(TemplateError::InvalidTemplate(format!(
            "unsupported template version '{version}' (expected {SUPPORTED_MAJOR_VERSION}.x)"
        )));
    }
    Ok(())
}

fn check_sections(sections: &[Section]) -> Result<()> {
    let mut seen = HashSet::new();
    for section in sections {
        if !seen.insert(section.kind) {
            return Err(TemplateError::InvalidTemplate(format!(
                "section '{}' appears more than once",
                section.kind.anchor()
            )));
        }
        if section.title().trim().is_empty() {
            return Err(TemplateError::InvalidTemplate(format!(
                "section '{}' has an empty title",
                section.kind.anchor()
            )));
        }
    }
    Ok(())
}

fn complete_sections(sections: &mut Vec<Section>) {
    let listed: HashSet<SectionKind> = sections.iter().map(|s| s.kind).collect();
    for kind in SectionKind::ALL {
        if !listed.contains(&kind) {
            tracing::debug!(section = kind.anchor(), "appending section missing from template");
            sections.push(Section { kind, title: None });
        }
    }
}

fn check_style(def: &TemplateDef) -> Result<()> {
    let style = &def.style;

    if !(style.font_size.is_finite() && style.font_size > 0.0) {
        return Err(TemplateError::InvalidTemplate(format!(
            "fontSize must be a positive number, got {}",
            style.font_size
        )));
    }
    if !(style.line_height.is_finite() && style.line_height > 0.0) {
        return Err(TemplateError::InvalidTemplate(format!(
            "lineHeight must be a positive number, got {}",
            style.line_height
        )));
    }

    let values = [
        ("fontFamily", style.font_family.as_str()),
        ("textColor", style.text_color.as_str()),
        ("accentColor", style.accent_color.as_str()),
        ("padding", def.page.padding.as_str()),
    ];
    for (name, value) in values {
        if value.trim().is_empty() {
            return Err(TemplateError::InvalidTemplate(format!("{name} is empty")));
        }
        if value.contains(&FORBIDDEN_STYLE_CHARS[..]) {
            return Err(TemplateError::InvalidTemplate(format!(
                "{name} contains a character not allowed in style values: '{value}'"
            )));
        }
    }

    let is_tag_char = |c: char| c.is_ascii_alphanumeric() || c == '-';
    if def.lang.is_empty() || !def.lang.chars().all(is_tag_char) {
        return Err(TemplateError::InvalidTemplate(format!(
            "lang '{}' is not a language tag",
            def.lang
        )));
    }

    Ok(())
}

/// Font size relative to the base size, in points
fn pt(base: f64, scale: f64) -> String {
    format!("{:.1}pt", base * scale)
}

/// Build the inline stylesheet
///
/// `@page` always has a zero margin so that converting the document yields
/// exactly one page of the configured size.
fn build_stylesheet(def: &TemplateDef) -> String {
    let style = &def.style;
    let (width, height) = def.page.size.dimensions();
    let base = style.font_size;
    let accent = &style.accent_color;

    let rules = [
        format!("@page {{ size: {}; margin: 0; }}", def.page.size.css_name()),
        "* { box-sizing: border-box; }".to_string(),
        "html, body { margin: 0; padding: 0; }".to_string(),
        format!(
            "body {{ font-family: {}; font-size: {}; line-height: {}; color: {}; }}",
            style.font_family,
            pt(base, 1.0),
            style.line_height,
            style.text_color
        ),
        format!(
            "#{} {{ width: {width}; height: {height}; padding: {}; overflow: hidden; }}",
            anchors::RESUME,
            def.page.padding
        ),
        format!("#{} {{ text-align: center; margin-bottom: 8pt; }}", anchors::HEADER),
        format!(
            "#{} {{ margin: 0; font-size: {}; color: {accent}; }}",
            anchors::NAME,
            pt(base, 2.0)
        ),
        format!(
            "#{} {{ margin-top: 2pt; font-size: {}; }}",
            anchors::TITLE,
            pt(base, 1.15)
        ),
        format!(
            "#{} {{ margin-top: 4pt; font-size: {}; }}",
            anchors::CONTACT,
            pt(base, 0.9)
        ),
        format!(
            "#{} a {{ color: {accent}; text-decoration: none; }}",
            anchors::CONTACT
        ),
        ".section { margin-top: 8pt; }".to_string(),
        format!(
            ".section h2 {{ margin: 0 0 4pt 0; font-size: {}; color: {accent}; \
             border-bottom: 1px solid {accent}; text-transform: uppercase; \
             letter-spacing: 0.5pt; }}",
            pt(base, 1.1)
        ),
        ".section p { margin: 0; }".to_string(),
        ".skills-columns { display: flex; gap: 24pt; }".to_string(),
        ".skills-columns ul { flex: 1; margin: 0; padding-left: 14pt; }".to_string(),
        ".entry { margin-bottom: 6pt; }".to_string(),
        ".entry-head, .entry-sub { display: flex; justify-content: space-between; }".to_string(),
        ".entry-title { font-weight: bold; }".to_string(),
        ".entry-sub { font-style: italic; }".to_string(),
        ".entry ul, .plain-list { margin: 2pt 0 0 0; padding-left: 14pt; }".to_string(),
        format!(".entry-tech {{ font-size: {}; }}", pt(base, 0.9)),
        format!(
            "@media print {{ html, body {{ width: {width}; height: {height}; }} \
             #{} {{ break-after: avoid; page-break-after: avoid; }} \
             a {{ color: inherit; }} }}",
            anchors::RESUME
        ),
    ];

    rules.join("\n")
}
