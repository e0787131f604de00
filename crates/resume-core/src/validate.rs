//! Schema validation of untyped resume input
//!
//! Validation is exhaustive: every offending field is reported in a single
//! pass, and a malformed entry never stops its siblings from being checked.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::path::FieldPath;
use crate::{CoreError, OPTIONAL_FIELDS, REQUIRED_FIELDS};

const CONTACT_FIELDS: [&str; 6] = ["address", "phone", "email", "linkedin", "github", "website"];
const RECOMMENDED_CONTACT_FIELDS: [&str; 2] = ["email", "phone"];

/// Diagnostic severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// What a diagnostic is about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DiagnosticKind {
    /// Required field absent or null
    MissingRequiredField,
    /// Value of the wrong JSON type
    WrongType,
    /// Entry of `experience`, `education` or `projects` that is not a mapping
    MalformedEntry,
    /// Input that validated but could not be decoded
    Undecodable,
    /// Required field present but empty
    EmptyField,
    /// Field worth filling in, absent or empty
    MissingRecommended,
    /// Key that is not part of the schema
    UnknownField,
}

impl DiagnosticKind {
    pub fn severity(self) -> Severity {
        match self {
            DiagnosticKind::MissingRequiredField
            | DiagnosticKind::WrongType
            | DiagnosticKind::MalformedEntry
            | DiagnosticKind::Undecodable => Severity::Error,
            DiagnosticKind::EmptyField
            | DiagnosticKind::MissingRecommended
            | DiagnosticKind::UnknownField => Severity::Warning,
        }
    }
}

/// A single validation finding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// JSONPath-like location, e.g. `$.experience[1].title`
    pub field_path: String,
    pub message: String,
    pub severity: Severity,
    pub kind: DiagnosticKind,
}

impl Diagnostic {
    pub fn new(
        kind: DiagnosticKind,
        field_path: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            field_path: field_path.into(),
            message: message.into(),
            severity: kind.severity(),
            kind,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field_path, self.message)
    }
}

/// Structured outcome of [`validate`]
///
/// `ok` is true iff `errors` is empty. Warnings never affect `ok`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub ok: bool,
    pub errors: Vec<Diagnostic>,
    pub warnings: Vec<Diagnostic>,
}

impl ValidationReport {
    /// Build a report, splitting diagnostics by severity
    pub fn from_diagnostics(diagnostics: Vec<Diagnostic>) -> Self {
        let (errors, warnings): (Vec<_>, Vec<_>) = diagnostics
            .into_iter()
            .partition(|d| d.severity == Severity::Error);

        Self {
            ok: errors.is_empty(),
            errors,
            warnings,
        }
    }

    /// Report for input that passed validation but failed to decode
    pub fn undecodable(error: &CoreError) -> Self {
        Self::from_diagnostics(vec![Diagnostic::new(
            DiagnosticKind::Undecodable,
            FieldPath::root(),
            error.to_string(),
        )])
    }

    /// Errors first, then warnings
    pub fn diagnostics(&self) -> impl Iterator<Item = &Diagnostic> {
        self.errors.iter().chain(self.warnings.iter())
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.ok {
            write!(f, "resume is valid ({} warning(s))", self.warnings.len())
        } else {
            write!(
                f,
                "resume failed validation with {} error(s)",
                self.errors.len()
            )
        }
    }
}

impl std::error::Error for ValidationReport {}

/// Shape of the entries in a record-valued collection
struct EntrySchema {
    container: &'static str,
    scalars: &'static [&'static str],
    lists: &'static [&'static str],
    recommended: &'static [&'static str],
}

const EXPERIENCE: EntrySchema = EntrySchema {
    container: "experience",
    scalars: &["title", "company", "location", "start_date", "end_date"],
    lists: &["description"],
    recommended: &["title", "company", "start_date", "description"],
};

const EDUCATION: EntrySchema = EntrySchema {
    container: "education",
    scalars: &["degree", "school", "year"],
    lists: &[],
    recommended: &["school", "degree"],
};

const PROJECTS: EntrySchema = EntrySchema {
    container: "projects",
    scalars: &["name", "description"],
    lists: &["technologies"],
    recommended: &[],
};

/// Check raw input against the resume schema
pub fn validate(raw: &Value) -> ValidationReport {
    let mut validator = Validator::default();
    validator.check_root(raw);

    let report = ValidationReport::from_diagnostics(validator.diagnostics);
    tracing::debug!(
        ok = report.ok,
        errors = report.errors.len(),
        warnings = report.warnings.len(),
        "validated resume"
    );
    report
}

#[derive(Default)]
struct Validator {
    diagnostics: Vec<Diagnostic>,
}

impl Validator {
    fn report(&mut self, kind: DiagnosticKind, path: &FieldPath, message: String) {
        self.diagnostics.push(Diagnostic::new(kind, path.as_str(), message));
    }

    fn wrong_type(&mut self, path: &FieldPath, expected: &str, found: &Value) {
        self.report(
            DiagnosticKind::WrongType,
            path,
            format!("expected {}, found {}", expected, type_name(found)),
        );
    }

    fn check_root(&mut self, raw: &Value) {
        let root_path = FieldPath::root();
        let Some(root) = raw.as_object() else {
            self.wrong_type(&root_path, "a mapping", raw);
            return;
        };

        for field in REQUIRED_FIELDS {
            let path = root_path.field(field);
            match root.get(field) {
                None | Some(Value::Null) => self.report(
                    DiagnosticKind::MissingRequiredField,
                    &path,
                    format!("missing required field (expected {})", expected_type(field)),
                ),
                Some(value) => {
                    if self.check_field(field, &path, value) && is_vacant(Some(value)) {
                        self.report(
                            DiagnosticKind::EmptyField,
                            &path,
                            "required field is empty".to_string(),
                        );
                    }
                }
            }
        }

        for field in OPTIONAL_FIELDS {
            match root.get(field) {
                None | Some(Value::Null) => {}
                Some(value) => {
                    self.check_field(field, &root_path.field(field), value);
                }
            }
        }

        self.check_unknown_keys(root, &root_path, |key| {
            REQUIRED_FIELDS.contains(&key) || OPTIONAL_FIELDS.contains(&key)
        });
    }

    /// Returns true when the value has the expected shape
    fn check_field(&mut self, field: &str, path: &FieldPath, value: &Value) -> bool {
        match field {
            "name" | "title" | "summary" => self.check_scalar(path, value),
            "contact" => self.check_contact(path, value),
            "experience" => self.check_entries(&EXPERIENCE, path, value),
            "education" => self.check_entries(&EDUCATION, path, value),
            "projects" => self.check_entries(&PROJECTS, path, value),
            _ => self.check_string_list(path, value),
        }
    }

    fn check_scalar(&mut self, path: &FieldPath, value: &Value) -> bool {
        match value {
            Value::String(_) | Value::Null => true,
            other => {
                self.wrong_type(path, "a string", other);
                false
            }
        }
    }

    fn check_string_list(&mut self, path: &FieldPath, value: &Value) -> bool {
        let Some(items) = value.as_array() else {
            self.wrong_type(path, "a sequence of strings", value);
            return false;
        };

        let mut well_formed = true;
        for (i, item) in items.iter().enumerate() {
            if !item.is_string() {
                self.wrong_type(&path.index(i), "a string", item);
                well_formed = false;
            }
        }
        well_formed
    }

    fn check_contact(&mut self, path: &FieldPath, value: &Value) -> bool {
        let Some(contact) = value.as_object() else {
            self.wrong_type(path, "a mapping", value);
            return false;
        };

        for field in CONTACT_FIELDS {
            if let Some(v) = contact.get(field) {
                self.check_scalar(&path.field(field), v);
            }
        }

        if !contact.is_empty() {
            for field in RECOMMENDED_CONTACT_FIELDS {
                if is_vacant(contact.get(field)) {
                    self.report(
                        DiagnosticKind::MissingRecommended,
                        &path.field(field),
                        "contact field is missing or empty".to_string(),
                    );
                }
            }
        }

        self.check_unknown_keys(contact, path, |key| CONTACT_FIELDS.contains(&key));
        true
    }

    fn check_entries(&mut self, schema: &EntrySchema, path: &FieldPath, value: &Value) -> bool {
        let Some(entries) = value.as_array() else {
            self.wrong_type(path, "a sequence of mappings", value);
            return false;
        };

        for (i, entry) in entries.iter().enumerate() {
            let entry_path = path.index(i);
            let Some(fields) = entry.as_object() else {
                self.report(
                    DiagnosticKind::MalformedEntry,
                    &entry_path,
                    format!(
                        "{} entry {} should be a mapping, found {}",
                        schema.container,
                        i,
                        type_name(entry)
                    ),
                );
                continue;
            };

            for field in schema.scalars {
                if let Some(v) = fields.get(*field) {
                    self.check_scalar(&entry_path.field(field), v);
                }
            }
            for field in schema.lists {
                match fields.get(*field) {
                    None | Some(Value::Null) => {}
                    Some(v) => {
                        self.check_string_list(&entry_path.field(field), v);
                    }
                }
            }
            for field in schema.recommended {
                if is_vacant(fields.get(*field)) {
                    self.report(
                        DiagnosticKind::MissingRecommended,
                        &entry_path.field(field),
                        format!("{} entry {} is missing {}", schema.container, i, field),
                    );
                }
            }

            self.check_unknown_keys(fields, &entry_path, |key| {
                schema.scalars.contains(&key) || schema.lists.contains(&key)
            });
        }
        true
    }

    fn check_unknown_keys(
        &mut self,
        map: &Map<String, Value>,
        path: &FieldPath,
        known: impl Fn(&str) -> bool,
    ) {
        for key in map.keys() {
            if !known(key) {
                self.report(
                    DiagnosticKind::UnknownField,
                    &path.field(key),
                    "field is not part of the resume schema and will be ignored".to_string(),
                );
            }
        }
    }
}

fn expected_type(field: &str) -> &'static str {
    match field {
        "contact" => "a mapping",
        "experience" | "education" | "projects" => "a sequence of mappings",
        "skills" | "certifications" | "awards" => "a sequence of strings",
        _ => "a string",
    }
}

/// Absent, null, blank or an empty collection
fn is_vacant(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.trim().is_empty(),
        Some(Value::Array(a)) => a.is_empty(),
        Some(Value::Object(o)) => o.is_empty(),
        Some(_) => false,
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
        Value::Object(_) => "a mapping",
    }
}
