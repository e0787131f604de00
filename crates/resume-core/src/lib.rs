//! Resume Core - record model and schema validation
//!
//! This crate provides:
//! - The typed resume record (`ResumeRecord` and its entry types)
//! - Exhaustive schema validation of untyped JSON input
//! - JSONPath-like field paths used by diagnostics
//! - Resume summaries and readiness checks
//!
//! # Example
//!
//! ```ignore
//! use resume_core::{validate, ResumeRecord};
//!
//! let raw: serde_json::Value = serde_json::from_str(resume_json)?;
//! let report = validate(&raw);
//! if report.ok {
//!     let resume = ResumeRecord::from_value(&raw)?;
//! }
//! ```

pub mod path;
mod record;
mod summary;
mod validate;

pub use record::{ContactInfo, EducationEntry, JobEntry, ProjectEntry, ResumeRecord};
pub use summary::{readiness_checks, ReadinessCheck, ResumeSummary};
pub use validate::{validate, Diagnostic, DiagnosticKind, Severity, ValidationReport};

use thiserror::Error;

/// Errors that can occur while turning raw input into a resume record
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Failed to decode resume: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Result type for resume core operations
pub type Result<T> = std::result::Result<T, CoreError>;

/// Fields that must be present on every resume
pub const REQUIRED_FIELDS: [&str; 7] = [
    "name",
    "title",
    "contact",
    "summary",
    "skills",
    "experience",
    "education",
];

/// Fields that are checked only when present
pub const OPTIONAL_FIELDS: [&str; 3] = ["certifications", "projects", "awards"];

/// Returns true when a scalar carries visible content.
///
/// Absent values and strings made only of whitespace are both blank.
pub fn is_present(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.trim().is_empty())
}
