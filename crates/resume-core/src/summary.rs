//! Resume overview and readiness checks

use serde::Serialize;

use crate::{is_present, ResumeRecord, ValidationReport};

/// Number of skills listed in a summary before eliding the rest
const TOP_SKILLS: usize = 5;

/// Short overview of a resume for terminal output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResumeSummary {
    pub name: Option<String>,
    pub title: Option<String>,
    pub email: Option<String>,
    pub skills: usize,
    pub experience: usize,
    pub education: usize,
    pub projects: usize,
    pub certifications: usize,
    pub awards: usize,
    /// First five skills, comma-separated, with "..." when more exist
    pub top_skills: Option<String>,
    /// "Title at Company" of the first experience entry
    pub recent_role: Option<String>,
}

impl ResumeSummary {
    pub fn of(resume: &ResumeRecord) -> Self {
        let top_skills = (!resume.skills.is_empty()).then(|| {
            let shown: Vec<&str> = resume
                .skills
                .iter()
                .take(TOP_SKILLS)
                .map(String::as_str)
                .collect();
            let more = if resume.skills.len() > TOP_SKILLS { "..." } else { "" };
            format!("{}{}", shown.join(", "), more)
        });

        let recent_role = resume.experience.first().map(|job| {
            format!(
                "{} at {}",
                job.title.as_deref().unwrap_or("N/A"),
                job.company.as_deref().unwrap_or("N/A")
            )
        });

        Self {
            name: resume.name.clone(),
            title: resume.title.clone(),
            email: resume.contact.as_ref().and_then(|c| c.email.clone()),
            skills: resume.skills.len(),
            experience: resume.experience.len(),
            education: resume.education.len(),
            projects: resume.projects.len(),
            certifications: resume.certifications.len(),
            awards: resume.awards.len(),
            top_skills,
            recent_role,
        }
    }
}

/// One named pass/fail check
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReadinessCheck {
    pub name: &'static str,
    pub passed: bool,
}

/// Ordered checks telling whether a resume is ready to be rendered and tailored
pub fn readiness_checks(resume: &ResumeRecord, report: &ValidationReport) -> Vec<ReadinessCheck> {
    let email = resume.contact.as_ref().and_then(|c| c.email.as_deref());

    [
        ("Resume data loaded", true),
        ("Required fields present", report.ok),
        ("Contact information", is_present(email)),
        ("Professional summary", is_present(resume.summary.as_deref())),
        ("Skills listed", !resume.skills.is_empty()),
        ("Work experience", !resume.experience.is_empty()),
        ("Education background", !resume.education.is_empty()),
    ]
    .into_iter()
    .map(|(name, passed)| ReadinessCheck { name, passed })
    .collect()
}
