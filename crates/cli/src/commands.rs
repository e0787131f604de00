//! Subcommand implementations

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use resume_core::path::resolve_path;
use resume_core::{
    readiness_checks, ReadinessCheck, ResumeRecord, ResumeSummary, ValidationReport,
};
use resume_template::{produce_reporting, CompiledTemplate, STANDARD_TEMPLATE};
use serde::Serialize;
use serde_json::Value;

use crate::config::CliConfig;
use crate::output;
use crate::pdf::PdfConverter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Json,
}

#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Resume JSON file
    pub input: PathBuf,

    /// Report format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// Also print a resume overview and readiness checks
    #[arg(long)]
    pub summary: bool,
}

#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Resume JSON file
    pub input: PathBuf,

    /// Template JSON file (defaults to RESUME_TEMPLATE, then the standard template)
    #[arg(short, long)]
    pub template: Option<PathBuf>,

    /// Output HTML file (defaults to <output dir>/resume_<Name>.html)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Also convert the page to PDF
    #[arg(long)]
    pub pdf: bool,
}

#[derive(Debug, Args)]
pub struct TemplateArgs {
    /// Write the standard template here instead of stdout
    #[arg(short, long, conflicts_with = "check")]
    pub output: Option<PathBuf>,

    /// Compile a template file and report whether it is usable
    #[arg(long)]
    pub check: Option<PathBuf>,
}

/// Read and parse a resume JSON file
pub fn load_resume(path: &Path) -> Result<Value> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read resume file {}", path.display()))?;
    serde_json::from_str(&json).with_context(|| format!("{} is not valid JSON", path.display()))
}

/// Compile the template at `path`, or the standard one
pub fn load_template(path: Option<&Path>) -> Result<CompiledTemplate> {
    match path {
        Some(path) => CompiledTemplate::from_file(path)
            .with_context(|| format!("failed to load template {}", path.display())),
        None => CompiledTemplate::standard().context("failed to load the standard template"),
    }
}

#[derive(Serialize)]
struct ValidateOutput<'a> {
    report: &'a ValidationReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    summary: Option<ResumeSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    readiness: Option<Vec<ReadinessCheck>>,
}

/// Returns false when the resume has validation errors
pub fn validate(args: &ValidateArgs) -> Result<bool> {
    let raw = load_resume(&args.input)?;
    let report = resume_core::validate(&raw);

    let overview = if args.summary {
        match ResumeRecord::from_value(&raw) {
            Ok(resume) => {
                let checks = readiness_checks(&resume, &report);
                Some((ResumeSummary::of(&resume), checks))
            }
            Err(e) => {
                tracing::warn!(error = %e, "cannot summarize a resume that does not decode");
                None
            }
        }
    } else {
        None
    };

    match args.format {
        Format::Text => {
            print!("{}", format_report(&report, &raw));
            if let Some((summary, checks)) = &overview {
                print!("{}", format_summary(summary, checks));
            }
        }
        Format::Json => {
            let (summary, readiness) = match overview {
                Some((summary, checks)) => (Some(summary), Some(checks)),
                None => (None, None),
            };
            let out = ValidateOutput {
                report: &report,
                summary,
                readiness,
            };
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
    }

    Ok(report.ok)
}

/// Returns false, writing nothing, when the resume has validation errors
pub fn render(
    args: &RenderArgs,
    config: &CliConfig,
    converter: &dyn PdfConverter,
) -> Result<bool> {
    let raw = load_resume(&args.input)?;
    let template = load_template(args.template.as_deref().or(config.template.as_deref()))?;

    let rendered = match produce_reporting(&raw, &template) {
        Ok(rendered) => rendered,
        Err(report) => {
            eprint!("{}", format_report(&report, &raw));
            return Ok(false);
        }
    };
    for warning in &rendered.warnings {
        tracing::warn!(path = %warning.field_path, "{}", warning.message);
    }

    let html_path = match &args.output {
        Some(path) => path.clone(),
        None => output::default_output_path(
            &config.output_dir,
            raw.get("name").and_then(Value::as_str),
        ),
    };
    output::write_document(&html_path, &rendered.document)?;
    println!("Generated: {}", html_path.display());

    if args.pdf {
        let pdf_path = output::pdf_path_for(&html_path);
        match converter.convert(&rendered.document, &pdf_path) {
            Ok(()) => println!("Generated: {}", pdf_path.display()),
            Err(e) => {
                tracing::warn!(error = %format!("{e:#}"), "PDF conversion failed, HTML output kept")
            }
        }
    }

    Ok(true)
}

pub fn template(args: &TemplateArgs) -> Result<bool> {
    if let Some(path) = &args.check {
        let template = load_template(Some(path))?;
        println!(
            "{} is a valid template ({} sections, {} page)",
            path.display(),
            template.sections().len(),
            template.page_size().css_name()
        );
        return Ok(true);
    }

    match &args.output {
        Some(path) => {
            output::write_text(path, STANDARD_TEMPLATE)?;
            println!("Wrote standard template to {}", path.display());
        }
        None => print!("{STANDARD_TEMPLATE}"),
    }
    Ok(true)
}

/// Human readable report: one line per diagnostic, then a verdict
///
/// Errors below the document root also show the offending value from `raw`
/// when there is one.
pub fn format_report(report: &ValidationReport, raw: &Value) -> String {
    let mut out = String::new();
    for diagnostic in &report.errors {
        let value = match diagnostic.field_path.as_str() {
            "$" => None,
            path => resolve_path(path, raw).filter(|v| !v.is_null()),
        };
        match value {
            Some(value) => {
                let _ = writeln!(out, "error:   {diagnostic} (value: {value})");
            }
            None => {
                let _ = writeln!(out, "error:   {diagnostic}");
            }
        }
    }
    for diagnostic in &report.warnings {
        let _ = writeln!(out, "warning: {diagnostic}");
    }
    let _ = writeln!(out, "{report}");
    out
}

pub fn format_summary(summary: &ResumeSummary, checks: &[ReadinessCheck]) -> String {
    let or_na = |value: &Option<String>| value.clone().unwrap_or_else(|| "N/A".to_string());

    let mut out = String::new();
    let _ = writeln!(out);
    let _ = writeln!(out, "Name:           {}", or_na(&summary.name));
    let _ = writeln!(out, "Title:          {}", or_na(&summary.title));
    let _ = writeln!(out, "Email:          {}", or_na(&summary.email));
    let _ = writeln!(out, "Skills:         {}", summary.skills);
    let _ = writeln!(out, "Experience:     {}", summary.experience);
    let _ = writeln!(out, "Education:      {}", summary.education);
    let _ = writeln!(out, "Projects:       {}", summary.projects);
    let _ = writeln!(out, "Certifications: {}", summary.certifications);
    let _ = writeln!(out, "Awards:         {}", summary.awards);
    if let Some(top) = &summary.top_skills {
        let _ = writeln!(out, "Top skills:     {top}");
    }
    if let Some(role) = &summary.recent_role {
        let _ = writeln!(out, "Recent role:    {role}");
    }

    let _ = writeln!(out);
    for check in checks {
        let mark = if check.passed { "PASS" } else { "FAIL" };
        let _ = writeln!(out, "[{mark}] {}", check.name);
    }
    let passed = checks.iter().filter(|c| c.passed).count();
    let _ = writeln!(out, "{passed}/{} checks passed", checks.len());
    out
}
