//! CLI interface for the candidate scorer

use crate::config::OutputFormat;
use crate::scoring::ScoringWeights;
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "candidate-scorer")]
#[command(about = "Keyword-based resume scoring against position requirements")]
#[command(long_about = "Score resumes against must-have, nice-to-have and custom requirements, \
with a yes/maybe/no recommendation and a short rationale for each candidate")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a single resume
    Score {
        /// Path to resume file (PDF, DOCX, TXT, MD)
        #[arg(short, long)]
        resume: PathBuf,

        #[command(flatten)]
        requirements: RequirementArgs,

        #[command(flatten)]
        report: ReportArgs,
    },

    /// Score every resume against a position and rank the results
    Run {
        /// Position file (TOML)
        #[arg(short, long)]
        position: PathBuf,

        /// Resume files or directories containing them
        #[arg(required = true)]
        resumes: Vec<PathBuf>,

        /// Custom requirements for this run
        #[arg(long)]
        custom: Option<String>,

        /// Weights as must-have,nice-to-have,custom (e.g. 70,20,10)
        #[arg(short, long, value_parser = parse_weights)]
        weights: Option<ScoringWeights>,

        #[command(flatten)]
        report: ReportArgs,
    },

    /// Print the candidate name inferred from a resume
    Name {
        /// Path to resume file (PDF, DOCX, TXT, MD)
        #[arg(short, long)]
        resume: PathBuf,
    },

    /// Show or change configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Args)]
pub struct RequirementArgs {
    /// Position file (TOML) supplying must-have and nice-to-have requirements
    #[arg(short, long, conflicts_with_all = ["must_have", "nice_to_have"])]
    pub position: Option<PathBuf>,

    /// Must-have requirements text
    #[arg(long, requires = "nice_to_have")]
    pub must_have: Option<String>,

    /// Nice-to-have requirements text
    #[arg(long, requires = "must_have")]
    pub nice_to_have: Option<String>,

    /// Custom requirements text
    #[arg(long)]
    pub custom: Option<String>,

    /// Weights as must-have,nice-to-have,custom (e.g. 70,20,10)
    #[arg(short, long, value_parser = parse_weights)]
    pub weights: Option<ScoringWeights>,
}

#[derive(Args)]
pub struct ReportArgs {
    /// Output format: console, json, markdown
    #[arg(short, long, value_parser = parse_output_format)]
    pub output: Option<OutputFormat>,

    /// Include matched keywords and per-candidate details
    #[arg(short, long)]
    pub detailed: bool,

    /// Save output to file
    #[arg(short, long)]
    pub save: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,

    /// Set a configuration value
    Set {
        /// Configuration key (e.g., "scoring.must_have")
        key: String,

        /// Configuration value
        value: String,
    },
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(OutputFormat::Console),
        "json" => Ok(OutputFormat::Json),
        "markdown" | "md" => Ok(OutputFormat::Markdown),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json, markdown",
            format
        )),
    }
}

/// Parse `must_have,nice_to_have,custom` weights and reject negative values
pub fn parse_weights(value: &str) -> Result<ScoringWeights, String> {
    let weights: ScoringWeights = value.parse()?;
    weights.validate().map_err(|e| e.to_string())?;
    Ok(weights)
}

/// Validate file extension
pub fn validate_file_extension(path: &Path, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}
