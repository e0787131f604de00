//! Resume Template - HTML template compilation and rendering
//!
//! This crate provides:
//! - Template JSON schema types (page, style, section order and titles)
//! - Template parsing and compilation into an immutable `CompiledTemplate`
//! - Rendering a `ResumeRecord` into a single-page, print-ready HTML `Document`
//! - The validate-then-render pipeline (`produce`)
//!
//! # Example
//!
//! ```ignore
//! use resume_template::{produce, CompiledTemplate};
//!
//! let template = CompiledTemplate::standard()?;
//! let data: serde_json::Value = serde_json::from_str(resume_json)?;
//! match produce(&data, &template) {
//!     Ok(document) => std::fs::write("resume.html", document.as_str())?,
//!     Err(report) => eprintln!("{report}"),
//! }
//! ```

mod compiled;
pub mod markup;
pub mod parser;
mod pipeline;
mod renderer;
mod schema;
pub mod sections;

pub use compiled::CompiledTemplate;
pub use markup::anchors;
pub use parser::parse_template;
pub use pipeline::{produce, produce_reporting, Rendered};
pub use renderer::{render, Document, TemplateRenderer};
pub use schema::*;

/// Embedded standard template
///
/// Written out by `resume template` as a starting point for custom templates.
pub const STANDARD_TEMPLATE: &str = include_str!("../data/standard.json");

use thiserror::Error;

/// Errors that can occur while loading a template
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Failed to parse template: {0}")]
    ParseError(String),

    #[error("Invalid template: {0}")]
    InvalidTemplate(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type for template operations
pub type Result<T> = std::result::Result<T, TemplateError>;
