//! HTML to PDF conversion

use std::io::{ErrorKind, Write};
use std::path::Path;
use std::process::Command;

use anyhow::{anyhow, bail, Context, Result};
use resume_template::Document;
use url::Url;

/// Turns a rendered document into a PDF file
pub trait PdfConverter {
    fn convert(&self, document: &Document, output: &Path) -> Result<()>;
}

/// Converter that prints the page with a headless Chromium-family browser
///
/// The document's own `@page` rule decides page size and margins.
pub struct BrowserConverter {
    browsers: Vec<String>,
}

impl BrowserConverter {
    pub fn new(browsers: Vec<String>) -> Self {
        Self { browsers }
    }
}

impl PdfConverter for BrowserConverter {
    fn convert(&self, document: &Document, output: &Path) -> Result<()> {
        if self.browsers.is_empty() {
            bail!("no browser configured for PDF conversion");
        }

        let mut staged = tempfile::Builder::new()
            .prefix("resume-")
            .suffix(".html")
            .tempfile()
            .context("failed to create temporary HTML file")?;
        staged
            .write_all(document.as_str().as_bytes())
            .and_then(|()| staged.flush())
            .context("failed to write temporary HTML file")?;

        let url = file_url(staged.path())?;
        let print_to = format!("--print-to-pdf={}", output.display());

        for browser in &self.browsers {
            let result = Command::new(browser)
                .args([
                    "--headless",
                    "--disable-gpu",
                    "--no-pdf-header-footer",
                    print_to.as_str(),
                    url.as_str(),
                ])
                .output();

            match result {
                Ok(out) if out.status.success() => {
                    tracing::info!(
                        browser = %browser,
                        output = %output.display(),
                        "converted resume to PDF"
                    );
                    return Ok(());
                }
                Ok(out) => {
                    tracing::debug!(
                        browser = %browser,
                        code = ?out.status.code(),
                        stderr = %String::from_utf8_lossy(&out.stderr),
                        "browser failed to print PDF"
                    );
                }
                Err(e) if e.kind() == ErrorKind::NotFound => {
                    tracing::debug!(browser = %browser, "browser not installed");
                }
                Err(e) => {
                    tracing::debug!(browser = %browser, error = %e, "failed to launch browser");
                }
            }
        }

        bail!(
            "no browser could print the PDF (tried: {})",
            self.browsers.join(", ")
        )
    }
}

/// `file://` URL for an absolute path, percent-encoded so that spaces, `#`
/// and `?` in directory names survive the trip to the browser
fn file_url(path: &Path) -> Result<String> {
    Url::from_file_path(path)
        .map(String::from)
        .map_err(|()| anyhow!("cannot build a file URL for {}", path.display()))
}
