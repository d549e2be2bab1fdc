// Rust guideline compliant 2026-02-23

//! Underwriting pipeline entry point.
//!
//! Wires the shared training-set model into an `UnderwritingSystem` and runs
//! it over either the built-in demo applications or a JSON file.
//!
//! # Usage
//!
//! ```text
//! # Built-in demo applications
//! cargo run
//!
//! # Applications from a file, JSON output, with debug logs on stderr
//! RUST_LOG=debug cargo run -- --input applications.json --format json
//! ```

mod adapters;

use std::path::PathBuf;

use adapters::demo_applications::demo_applications;
use adapters::json_input::parse_applications;
use anyhow::Context as _;
use clap::{Parser, ValueEnum};
use domain::UnderwritingResult;
use underwriting::UnderwritingSystem;

#[derive(Parser, Debug)]
#[command(
    name = "auto_underwriting",
    about = "Decide whether to accept, reject, or request more information for insurance applications",
    version
)]
struct Cli {
    /// JSON file holding an array of application objects (defaults to the demo set)
    #[arg(long)]
    input: Option<PathBuf>,
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    /// One "Result"/"Reason" block per application
    Text,
    /// A single JSON array of `{decision, reason}` objects
    Json,
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout carries only results.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let applications = match &cli.input {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            parse_applications(&text)
                .with_context(|| format!("failed to parse {}", path.display()))?
        }
        None => demo_applications(),
    };
    tracing::info!(count = applications.len(), "main.applications.loaded");

    let system = UnderwritingSystem::with_default_model()
        .context("failed to build underwriting system")?;
    let results: Vec<UnderwritingResult> = applications
        .iter()
        .map(|app| system.process_application(app))
        .collect();

    match cli.format {
        OutputFormat::Text => print!("{}", render_text(&results)),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&results).context("failed to encode results")?;
            println!("{json}");
        }
    }

    Ok(())
}

fn render_text(results: &[UnderwritingResult]) -> String {
    results
        .iter()
        .enumerate()
        .map(|(i, r)| {
            format!("Application {} Result: {}\nReason: {}\n\n", i + 1, r.decision, r.reason)
        })
        .collect()
}
