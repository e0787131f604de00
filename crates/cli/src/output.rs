//! Output file naming and writing

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use resume_core::is_present;
use resume_template::Document;

/// File name for a resume, derived from the person's name
///
/// Whitespace becomes `_`; commas and path separators are dropped.
pub fn default_file_name(name: Option<&str>) -> String {
    let slug: String = match name {
        Some(name) if is_present(Some(name)) => name
            .trim()
            .chars()
            .filter(|c| !matches!(c, ',' | '/' | '\\'))
            .map(|c| if c.is_whitespace() { '_' } else { c })
            .collect(),
        _ => String::new(),
    };

    if slug.is_empty() {
        "resume.html".to_string()
    } else {
        format!("resume_{slug}.html")
    }
}

pub fn default_output_path(dir: &Path, name: Option<&str>) -> PathBuf {
    dir.join(default_file_name(name))
}

/// PDF written next to the HTML file
pub fn pdf_path_for(html: &Path) -> PathBuf {
    html.with_extension("pdf")
}

/// Write a document, creating parent directories as needed
pub fn write_document(path: &Path, document: &Document) -> Result<()> {
    write_text(path, document.as_str())
}

pub fn write_text(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }
    std::fs::write(path, contents).with_context(|| format!("failed to write {}", path.display()))
}
