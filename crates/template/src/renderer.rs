//! Template rendering

use std::fmt;

use maud::{html, Markup, PreEscaped, DOCTYPE};
use resume_core::{is_present, ContactInfo, ResumeRecord};

use crate::markup::{anchors, field, link_href, placeholders, SEPARATOR};
use crate::sections;
use crate::CompiledTemplate;

/// A rendered, print-ready HTML document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    html: String,
}

impl Document {
    pub fn as_str(&self) -> &str {
        &self.html
    }

    pub fn into_string(self) -> String {
        self.html
    }

    /// Check whether an element with this `id` was emitted
    pub fn has_anchor(&self, id: &str) -> bool {
        self.html.contains(&format!("id=\"{id}\""))
    }

    /// Length of the HTML in bytes
    pub fn len(&self) -> usize {
        self.html.len()
    }

    pub fn is_empty(&self) -> bool {
        self.html.is_empty()
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.html)
    }
}

impl AsRef<str> for Document {
    fn as_ref(&self) -> &str {
        &self.html
    }
}

/// Template renderer
///
/// Rendering never fails: absent fields become placeholders and empty
/// sections are left out.
pub struct TemplateRenderer<'a> {
    template: &'a CompiledTemplate,
}

impl<'a> TemplateRenderer<'a> {
    /// Create a new renderer for a compiled template
    pub fn new(template: &'a CompiledTemplate) -> Self {
        Self { template }
    }

    /// Render a resume into a document
    pub fn render(&self, resume: &ResumeRecord) -> Document {
        let enabled: Vec<_> = self
            .template
            .sections()
            .iter()
            .filter(|section| sections::is_enabled(section.kind, resume))
            .collect();

        let markup = html! {
            (DOCTYPE)
            html lang=(self.template.lang()) {
                head {
                    meta charset="utf-8";
                    title { (field(&resume.name, placeholders::NAME)) }
                    style { (PreEscaped(self.template.stylesheet())) }
                }
                body {
                    div id=(anchors::RESUME) {
                        (self.render_header(resume))
                        @for section in &enabled {
                            section id=(section.kind.anchor()) class="section" {
                                h2 { (section.title()) }
                                (sections::render_body(section.kind, resume))
                            }
                        }
                    }
                }
            }
        };

        let html = markup.into_string();
        tracing::debug!(sections = enabled.len(), bytes = html.len(), "rendered resume");

        Document { html }
    }

    fn render_header(&self, resume: &ResumeRecord) -> Markup {
        let contact = resume.contact_or_default();
        let details = contact_details(&contact);
        let links = contact_links(&contact);

        html! {
            header id=(anchors::HEADER) {
                h1 id=(anchors::NAME) { (field(&resume.name, placeholders::NAME)) }
                div id=(anchors::TITLE) { (field(&resume.title, placeholders::TITLE)) }
                div id=(anchors::CONTACT) {
                    @if !details.is_empty() {
                        div id=(anchors::CONTACT_DETAILS) { (separated(&details)) }
                    }
                    @if !links.is_empty() {
                        div id=(anchors::CONTACT_LINKS) { (separated(&links)) }
                    }
                }
            }
        }
    }
}

/// Render a resume with a compiled template
pub fn render(resume: &ResumeRecord, template: &CompiledTemplate) -> Document {
    TemplateRenderer::new(template).render(resume)
}

/// Present values among `fields`, keyed, in the given order
fn present<'a>(
    fields: [(&'static str, &'a Option<String>); 3],
) -> Vec<(&'static str, &'a str)> {
    fields
        .into_iter()
        .filter_map(|(key, value)| {
            let value = value.as_deref().filter(|v| is_present(Some(*v)))?;
            Some((key, value))
        })
        .collect()
}

/// Present address, phone and email, in that order
fn contact_details(contact: &ContactInfo) -> Vec<Markup> {
    present([
        ("address", &contact.address),
        ("phone", &contact.phone),
        ("email", &contact.email),
    ])
    .into_iter()
    .map(|(key, value)| html! { span id={ "contact-" (key) } { (value) } })
    .collect()
}

/// Present LinkedIn, GitHub and website links, in that order
fn contact_links(contact: &ContactInfo) -> Vec<Markup> {
    present([
        ("linkedin", &contact.linkedin),
        ("github", &contact.github),
        ("website", &contact.website),
    ])
    .into_iter()
    .map(|(key, value)| {
        html! { a id={ "contact-" (key) } href=(link_href(value)) { (value) } }
    })
    .collect()
}

/// Items joined with [`SEPARATOR`]
///
/// Separators only sit between items, so no leading or trailing separator
/// appears whatever subset is present.
fn separated(items: &[Markup]) -> Markup {
    html! {
        @for (i, item) in items.iter().enumerate() {
            @if i > 0 { (SEPARATOR) }
            (item)
        }
    }
}
