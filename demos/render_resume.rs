//! Resume Renderer
//!
//! Validates a resume JSON file and renders it with the standard template
//! (or a custom one). Validation warnings are printed; errors stop rendering.
//!
//! Usage:
//!   cargo run --example render_resume -- [resume.json] [template.json]
//!
//! Examples:
//!   cargo run --example render_resume
//!   cargo run --example render_resume -- assets/sample_resume.json my_template.json

use resume_template::{produce_reporting, CompiledTemplate};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();
    let input_path = args
        .get(1)
        .map(String::as_str)
        .unwrap_or("assets/sample_resume.json");

    let template = match args.get(2) {
        Some(path) => CompiledTemplate::from_file(path)?,
        None => CompiledTemplate::standard()?,
    };

    let input_json = std::fs::read_to_string(input_path)?;
    let data: serde_json::Value = serde_json::from_str(&input_json)?;

    let rendered = match produce_reporting(&data, &template) {
        Ok(rendered) => rendered,
        Err(report) => {
            for error in &report.errors {
                eprintln!("error: {error}");
            }
            return Err(report.into());
        }
    };

    for warning in &rendered.warnings {
        println!("warning: {warning}");
    }

    std::fs::create_dir_all("output")?;
    let output_path = "output/sample_resume.html";
    std::fs::write(output_path, rendered.document.as_str())?;

    println!("Generated: {output_path} ({} bytes)", rendered.document.len());

    Ok(())
}
