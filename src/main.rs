// src/main.rs
// Inspection tool: decode a captured response document and print the
// records as JSON. Useful when diagnosing upstream layout drift.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde_json::Value;
use tracing_subscriber::EnvFilter;

use voyager_parsers::parsers::{education, experience, search};

#[derive(Parser)]
#[command(
    name = "voyager-parsers",
    about = "Decode captured voyager profile responses into flat records"
)]
struct Cli {
    /// Path to a captured JSON response document
    input: PathBuf,

    /// Which record kind the document holds
    #[arg(long, value_enum, default_value = "experience")]
    section: Section,
}

#[derive(Clone, Copy, ValueEnum)]
enum Section {
    Experience,
    Education,
    /// Expects a JSON array of search hits
    Search,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let raw = std::fs::read_to_string(&cli.input)
        .with_context(|| format!("Failed to read {}", cli.input.display()))?;
    let document: Value = serde_json::from_str(&raw)
        .with_context(|| format!("{} is not valid JSON", cli.input.display()))?;

    let records = match cli.section {
        Section::Experience => {
            serde_json::to_value(experience::parse_experience_response(&document))?
        }
        Section::Education => {
            serde_json::to_value(education::parse_education_response(&document))?
        }
        Section::Search => {
            let items = document.as_array().map(|v| v.as_slice()).unwrap_or(&[]);
            serde_json::to_value(search::parse_search_results(items))?
        }
    };
    println!("{}", serde_json::to_string_pretty(&records)?);
    Ok(())
}
