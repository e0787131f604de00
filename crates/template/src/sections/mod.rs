//! Section rendering
//!
//! A section is emitted iff its governing field is present and, for
//! collections, non-empty. Entries inside a non-empty collection always render,
//! with placeholders standing in for their absent fields.

use maud::{html, Markup, PreEscaped};
use resume_core::{is_present, EducationEntry, JobEntry, ProjectEntry, ResumeRecord};

use crate::markup::{anchors, field, join_list, placeholders};
use crate::schema::SectionKind;

/// Skills shown in the first column; the rest go to the second
pub const SKILLS_PER_COLUMN: usize = 6;

/// Check whether a section has anything to show for this resume
pub fn is_enabled(kind: SectionKind, resume: &ResumeRecord) -> bool {
    match kind {
        SectionKind::Summary => is_present(resume.summary.as_deref()),
        SectionKind::Skills => !resume.skills.is_empty(),
        SectionKind::Experience => !resume.experience.is_empty(),
        SectionKind::Education => !resume.education.is_empty(),
        SectionKind::Certifications => !resume.certifications.is_empty(),
        SectionKind::Projects => !resume.projects.is_empty(),
        SectionKind::Awards => !resume.awards.is_empty(),
    }
}

/// Split skills into the two display columns
///
/// The second column is `None` unless there are more than
/// [`SKILLS_PER_COLUMN`] skills.
pub fn split_skills(skills: &[String]) -> (&[String], Option<&[String]>) {
    if skills.len() <= SKILLS_PER_COLUMN {
        (skills, None)
    } else {
        let (first, second) = skills.split_at(SKILLS_PER_COLUMN);
        (first, Some(second))
    }
}

/// Body of an enabled section, everything after its heading
pub(crate) fn render_body(kind: SectionKind, resume: &ResumeRecord) -> Markup {
    match kind {
        SectionKind::Summary => html! {
            p { (resume.summary.as_deref().unwrap_or_default()) }
        },
        SectionKind::Skills => render_skills(&resume.skills),
        SectionKind::Experience => html! {
            @for job in &resume.experience {
                (render_job(job))
            }
        },
        SectionKind::Education => html! {
            @for entry in &resume.education {
                (render_education(entry))
            }
        },
        SectionKind::Certifications => plain_list(&resume.certifications),
        SectionKind::Projects => html! {
            @for project in &resume.projects {
                (render_project(project))
            }
        },
        SectionKind::Awards => plain_list(&resume.awards),
    }
}

fn render_skills(skills: &[String]) -> Markup {
    let (first, second) = split_skills(skills);

    html! {
        div.skills-columns {
            ul id=(anchors::SKILLS_COLUMN_1) { (list_items(first)) }
            @if let Some(second) = second {
                ul id=(anchors::SKILLS_COLUMN_2) { (list_items(second)) }
            }
        }
    }
}

fn render_job(job: &JobEntry) -> Markup {
    html! {
        div.entry {
            div.entry-head {
                span.entry-title { (field(&job.title, placeholders::JOB_TITLE)) }
                span.entry-dates {
                    (field(&job.start_date, placeholders::START_DATE))
                    " " (PreEscaped("&ndash;")) " "
                    (field(&job.end_date, placeholders::END_DATE))
                }
            }
            div.entry-sub {
                span.entry-org { (field(&job.company, placeholders::COMPANY)) }
                span.entry-location { (field(&job.location, placeholders::LOCATION)) }
            }
            @if let Some(points) = &job.description {
                ul.entry-points { (list_items(points)) }
            }
        }
    }
}

fn render_education(entry: &EducationEntry) -> Markup {
    html! {
        div.entry {
            div.entry-head {
                span.entry-title { (field(&entry.degree, placeholders::DEGREE)) }
                span.entry-dates { (field(&entry.year, placeholders::YEAR)) }
            }
            div.entry-sub {
                span.entry-org { (field(&entry.school, placeholders::SCHOOL)) }
            }
        }
    }
}

fn render_project(project: &ProjectEntry) -> Markup {
    html! {
        div.entry {
            div.entry-head {
                span.entry-title { (field(&project.name, placeholders::PROJECT_NAME)) }
            }
            div.entry-desc {
                (field(&project.description, placeholders::PROJECT_DESCRIPTION))
            }
            @if let Some(technologies) = &project.technologies {
                div.entry-tech { "Technologies: " (join_list(technologies)) }
            }
        }
    }
}

fn plain_list(items: &[String]) -> Markup {
    html! {
        ul.plain-list { (list_items(items)) }
    }
}

/// One `<li>` per item, in order
fn list_items(items: &[String]) -> Markup {
    html! {
        @for item in items {
            li { (item) }
        }
    }
}
