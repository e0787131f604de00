//! Validate-then-render pipeline

use resume_core::{validate, Diagnostic, ResumeRecord, ValidationReport};
use serde_json::Value;

use crate::renderer::{render, Document};
use crate::CompiledTemplate;

/// A document together with the warnings raised while validating its input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub document: Document,
    pub warnings: Vec<Diagnostic>,
}

/// Validate raw input and render it
///
/// The renderer is never invoked when validation reports an error.
pub fn produce(raw: &Value, template: &CompiledTemplate) -> Result<Document, ValidationReport> {
    produce_reporting(raw, template).map(|rendered| rendered.document)
}

/// Like [`produce`], but also hands back the validation warnings
pub fn produce_reporting(
    raw: &Value,
    template: &CompiledTemplate,
) -> Result<Rendered, ValidationReport> {
    let report = validate(raw);
    if !report.ok {
        tracing::warn!(errors = report.errors.len(), "resume failed validation");
        return Err(report);
    }

    let resume = ResumeRecord::from_value(raw).map_err(|e| {
        tracing::error!(error = %e, "validated resume could not be decoded");
        ValidationReport::undecodable(&e)
    })?;

    Ok(Rendered {
        document: render(&resume, template),
        warnings: report.warnings,
    })
}
