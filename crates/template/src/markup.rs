//! Text helpers shared by the HTML builders: anchors, placeholders and separators
//!
//! Escaping is left to `maud`, so everything here works on plain text.

use resume_core::is_present;

/// Separator between contact items and between links
pub const SEPARATOR: &str = " | ";

/// Separator used when joining a list onto one line
pub const LIST_SEPARATOR: &str = ", ";

/// Scheme prefixed to profile links
pub const LINK_SCHEME: &str = "https://";

/// Stable element ids that downstream tooling may depend on
pub mod anchors {
    /// Root container
    pub const RESUME: &str = "resume";
    pub const HEADER: &str = "header";
    pub const NAME: &str = "name";
    pub const TITLE: &str = "title";
    pub const CONTACT: &str = "contact";
    /// Address, phone and email line
    pub const CONTACT_DETAILS: &str = "contact-details";
    /// LinkedIn, GitHub and website line
    pub const CONTACT_LINKS: &str = "contact-links";
    pub const SUMMARY: &str = "summary";
    pub const SKILLS: &str = "skills";
    pub const SKILLS_COLUMN_1: &str = "skills-col-1";
    pub const SKILLS_COLUMN_2: &str = "skills-col-2";
    pub const EXPERIENCE: &str = "experience";
    pub const EDUCATION: &str = "education";
    pub const CERTIFICATIONS: &str = "certifications";
    pub const PROJECTS: &str = "projects";
    pub const AWARDS: &str = "awards";
}

/// Fixed text shown in place of absent fields
pub mod placeholders {
    pub const NAME: &str = "Your Name";
    pub const TITLE: &str = "Professional Title";
    pub const JOB_TITLE: &str = "Job Title";
    pub const COMPANY: &str = "Company";
    pub const LOCATION: &str = "Location";
    pub const START_DATE: &str = "Start";
    pub const END_DATE: &str = "End";
    pub const DEGREE: &str = "Degree";
    pub const SCHOOL: &str = "School";
    pub const YEAR: &str = "Year";
    pub const PROJECT_NAME: &str = "Project Name";
    pub const PROJECT_DESCRIPTION: &str = "Project Description";
}

/// The value when present, otherwise the placeholder
///
/// Blank strings count as absent.
pub fn or_placeholder<'a>(value: Option<&'a str>, placeholder: &'a str) -> &'a str {
    match value {
        Some(v) if is_present(Some(v)) => v,
        _ => placeholder,
    }
}

/// Value of an optional field, or the placeholder when absent
pub fn field<'a>(value: &'a Option<String>, placeholder: &'a str) -> &'a str {
    or_placeholder(value.as_deref(), placeholder)
}

/// Link target for a profile value
///
/// Values that already carry an `http://` or `https://` scheme are kept as
/// written; anything else gets [`LINK_SCHEME`] prepended.
pub fn link_href(value: &str) -> String {
    let value = value.trim();
    if value.starts_with("https://") || value.starts_with("http://") {
        value.to_string()
    } else {
        format!("{LINK_SCHEME}{value}")
    }
}

/// Join list items onto one line with [`LIST_SEPARATOR`]
pub fn join_list(items: &[String]) -> String {
    items.join(LIST_SEPARATOR)
}
