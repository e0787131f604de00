//! CLI configuration from the environment

use std::path::PathBuf;

/// Browsers tried in order for PDF conversion
const DEFAULT_BROWSERS: &str = "chrome,chromium,google-chrome";

/// Settings read from environment variables (and `.env` when present).
/// Command line arguments take precedence over every value here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Custom template file; the embedded standard template when unset
    pub template: Option<PathBuf>,
    /// Directory for generated files
    pub output_dir: PathBuf,
    /// Browser executables used for PDF conversion
    pub pdf_browsers: Vec<String>,
    pub rust_log: String,
}

impl CliConfig {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        CliConfig {
            template: non_empty("RESUME_TEMPLATE").map(PathBuf::from),
            output_dir: non_empty("RESUME_OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("output")),
            pdf_browsers: parse_list(
                &non_empty("RESUME_PDF_BROWSERS").unwrap_or_else(|| DEFAULT_BROWSERS.to_string()),
            ),
            rust_log: non_empty("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        }
    }
}

fn parse_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
