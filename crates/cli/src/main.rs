//! resume - validate resume data and render it as a print-ready page
//!
//! The CLI provides:
//! - `validate`: schema check with errors, warnings and an optional overview
//! - `render`: HTML output, optionally converted to PDF with a headless browser
//! - `template`: write out or check a template file

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod output;
mod pdf;

use commands::{RenderArgs, TemplateArgs, ValidateArgs};
use config::CliConfig;
use pdf::BrowserConverter;

#[derive(Parser)]
#[command(name = "resume")]
#[command(
    about = "Validate resume data and render it to a one-page HTML resume",
    long_about = None
)]
#[command(version)]
struct Cli {
    /// Log filter, overrides RUST_LOG
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Check a resume file against the schema
    Validate(ValidateArgs),
    /// Render a resume file to HTML (and optionally PDF)
    Render(RenderArgs),
    /// Write the standard template, or check a custom one
    Template(TemplateArgs),
}

fn init_tracing(filter: &str) {
    let env_filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let config = CliConfig::from_env();

    init_tracing(cli.log_level.as_deref().unwrap_or(&config.rust_log));

    let passed = match &cli.command {
        Command::Validate(args) => commands::validate(args)?,
        Command::Render(args) => {
            let converter = BrowserConverter::new(config.pdf_browsers.clone());
            commands::render(args, &config, &converter)?
        }
        Command::Template(args) => commands::template(args)?,
    };

    Ok(if passed {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_render() {
        let cli = Cli::parse_from([
            "resume", "render", "me.json", "-t", "t.json", "-o", "out/me.html", "--pdf",
        ]);
        match cli.command {
            Command::Render(args) => {
                assert_eq!(args.input, std::path::PathBuf::from("me.json"));
                assert_eq!(args.template, Some("t.json".into()));
                assert_eq!(args.output, Some("out/me.html".into()));
                assert!(args.pdf);
            }
            _ => panic!("Expected render command"),
        }
    }

    #[test]
    fn test_parse_validate_json() {
        let cli = Cli::parse_from([
            "resume",
            "--log-level",
            "debug",
            "validate",
            "me.json",
            "--format",
            "json",
            "--summary",
        ]);
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
        match cli.command {
            Command::Validate(args) => {
                assert_eq!(args.format, commands::Format::Json);
                assert!(args.summary);
            }
            _ => panic!("Expected validate command"),
        }
    }

    #[test]
    fn test_template_flags_conflict() {
        let result =
            Cli::try_parse_from(["resume", "template", "-o", "a.json", "--check", "b.json"]);
        assert!(result.is_err());
    }
}
