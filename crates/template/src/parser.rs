//! Template JSON parsing

use crate::{Result, TemplateDef, TemplateError};

/// Parse a template definition from a JSON string
///
/// This only checks the JSON structure; use [`crate::CompiledTemplate`] to
/// get a template that can be rendered.
pub fn parse_template(json: &str) -> Result<TemplateDef> {
    serde_json::from_str(json).map_err(|e| TemplateError::ParseError(e.to_string()))
}
