#![deny(unsafe_code)]
//! CLI binary for langcolors.
//!
//! Reads a Linguist-style `languages.yml`, ranks every language color against
//! every other by CIE94 difference, and reports the languages whose colors
//! are closer than `--threshold`. Output is plaintext on stdout by default,
//! an HTML file with `--html`, or JSON with `--json`.

mod config;
mod error;

use clap::Parser;
use error::CliError;
use langcolors_core::compute_report;
use langcolors_report::{html, sections, text};
use std::io;
use std::path::PathBuf;
use std::process;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "langcolors",
    about = "Find programming languages with perceptually similar colors"
)]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, conflicts_with = "html")]
    json: bool,

    /// Render output as HTML (written to --output) instead of plaintext.
    #[arg(long)]
    html: bool,

    /// Location of the language specification file.
    #[arg(long, default_value = "languages.yml")]
    yaml: PathBuf,

    /// Report only differences below this CIE94 value.
    #[arg(short, long, default_value_t = 10.0)]
    threshold: f64,

    /// HTML output file path.
    #[arg(short, long, default_value = "output.html")]
    output: PathBuf,

    /// Languages to report on (default: all, sorted by name).
    languages: Vec<String>,
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn run(cli: Cli) -> Result<(), CliError> {
    let threshold = config::validate_threshold(cli.threshold)?;
    let colors = config::load_languages(&cli.yaml)?;
    let report = compute_report(&colors, threshold);
    let sections = sections(&report, &cli.languages);

    if cli.json {
        let info = serde_json::json!({
            "threshold": threshold,
            "sections": sections,
            "skipped": report.skipped(),
        });
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else if cli.html {
        html::write(&sections, &cli.output).map_err(|e| {
            CliError::Io(format!("cannot write {}: {e}", cli.output.display()))
        })?;
        info!(
            path = %cli.output.display(),
            sections = sections.len(),
            "wrote HTML report"
        );
    } else {
        print!("{}", text::render(&sections));
    }

    Ok(())
}

fn main() {
    init_tracing();
    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
