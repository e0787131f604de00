//! WASM bindings for rsresume
//!
//! This crate provides JavaScript-friendly API for:
//! - Validating resume data
//! - Loading resume templates
//! - Rendering resumes to print-ready HTML
//!
//! # Example (JavaScript)
//!
//! ```javascript
//! import init, { validateResume, ResumeTemplate } from 'resume-wasm';
//!
//! await init();
//!
//! const report = validateResume(resume);
//! if (!report.ok) {
//!   console.error(report.errors);
//! }
//!
//! // Use the built-in template, or load a custom one
//! const template = ResumeTemplate.standard();
//! // const template = ResumeTemplate.fromJson(templateJson);
//!
//! // Render; throws the validation report when the data is invalid
//! const html = template.render(resume);
//! ```

use resume_core::{ResumeSummary, ValidationReport};
use resume_template::{produce, CompiledTemplate};
use serde_json::Value;
use wasm_bindgen::prelude::*;

// Initialize panic hook for better error messages in browser console
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Validate resume data
///
/// @param data - Resume object
/// @returns Report with `ok`, `errors` and `warnings`
#[wasm_bindgen(js_name = validateResume)]
pub fn validate_resume(data: JsValue) -> Result<JsValue, JsValue> {
    let raw: Value = serde_wasm_bindgen::from_value(data)?;
    let report = resume_core::validate(&raw);
    Ok(serde_wasm_bindgen::to_value(&report)?)
}

/// Summarize resume data
///
/// @param data - Resume object
/// @returns Counts, top skills and most recent role
#[wasm_bindgen(js_name = summarizeResume)]
pub fn summarize_resume(data: JsValue) -> Result<JsValue, JsValue> {
    let raw: Value = serde_wasm_bindgen::from_value(data)?;
    let resume = resume_core::ResumeRecord::from_value(&raw)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(serde_wasm_bindgen::to_value(&ResumeSummary::of(&resume))?)
}

/// Compiled resume template
#[wasm_bindgen]
pub struct ResumeTemplate {
    inner: CompiledTemplate,
}

#[wasm_bindgen]
impl ResumeTemplate {
    /// Built-in standard template
    ///
    /// @returns ResumeTemplate instance
    pub fn standard() -> Result<ResumeTemplate, JsValue> {
        let inner = CompiledTemplate::standard().map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(ResumeTemplate { inner })
    }

    /// Create template from JSON
    ///
    /// @param json - Template JSON string
    /// @returns ResumeTemplate instance
    #[wasm_bindgen(js_name = fromJson)]
    pub fn from_json(json: &str) -> Result<ResumeTemplate, JsValue> {
        let inner =
            CompiledTemplate::from_json(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(ResumeTemplate { inner })
    }

    /// Page size name, e.g. "letter" or "A4"
    #[wasm_bindgen(js_name = pageSize)]
    pub fn page_size(&self) -> String {
        self.inner.page_size().css_name().to_string()
    }

    /// Render resume data to HTML
    ///
    /// @param data - Resume object
    /// @returns HTML document string; throws the validation report on errors
    pub fn render(&self, data: JsValue) -> Result<String, JsValue> {
        let raw: Value = serde_wasm_bindgen::from_value(data)?;
        match self.render_value(&raw) {
            Ok(html) => Ok(html),
            Err(report) => Err(serde_wasm_bindgen::to_value(&report)?),
        }
    }
}

impl ResumeTemplate {
    fn render_value(&self, raw: &Value) -> Result<String, ValidationReport> {
        produce(raw, &self.inner).map(|document| document.into_string())
    }
}
