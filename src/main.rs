//! Candidate scorer: keyword-based resume scoring CLI

use candidate_scorer::analysis::run::file_name_of;
use candidate_scorer::analysis::AnalysisRun;
use candidate_scorer::cli::{self, Cli, Commands, ConfigAction, ReportArgs, RequirementArgs};
use candidate_scorer::config::{Config, OutputFormat};
use candidate_scorer::input::manager::collect_resume_paths;
use candidate_scorer::input::{InputManager, Position};
use candidate_scorer::output::report::{CandidateScore, ScoreReport};
use candidate_scorer::output::formatter::suggest_filename;
use candidate_scorer::output::{save_report_to_file, ReportGenerator};
use candidate_scorer::scoring::{extract_candidate_name, CandidateScorer, Requirements};
use candidate_scorer::{Result, ScorerError};
use clap::Parser;
use log::{error, info};
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config, cli.config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

async fn run_command(command: Commands, mut config: Config, config_path: Option<PathBuf>) -> Result<()> {
    match command {
        Commands::Score {
            resume,
            requirements,
            report,
        } => {
            let (requirements, position_title, weights) =
                resolve_requirements(requirements, &config).await?;

            let mut input_manager = InputManager::new();
            let resume_text = input_manager.extract_text(&resume).await?;
            let file_name = file_name_of(&resume);

            info!("Scoring {} ({} characters)", file_name, resume_text.len());
            let scorer = CandidateScorer::new(weights);
            let candidate = CandidateScore {
                candidate_name: extract_candidate_name(&resume_text, &file_name),
                file_name,
                result: scorer.score(&resume_text, &requirements),
            };

            let score_report = ScoreReport::new(candidate, weights, position_title);
            let (generator, format) = generator_for(&config, &report);
            let rendered = generator.generate_score(&score_report, format)?;
            emit(&rendered, report.save.as_deref(), format, &resume)?;
        }

        Commands::Run {
            position,
            resumes,
            custom,
            weights,
            report,
        } => {
            cli::validate_file_extension(&position, &["toml"])
                .map_err(|e| ScorerError::InvalidInput(format!("Position file: {}", e)))?;
            let position_path = position;
            let position = Position::load(&position_path).await?;
            let weights = weights.unwrap_or(config.scoring.weights);

            let resume_paths = collect_resume_paths(&resumes)?;
            if resume_paths.is_empty() {
                return Err(ScorerError::InvalidInput(
                    "No resume files found in the given paths".to_string(),
                ));
            }

            let mut run = AnalysisRun::new(position, custom, weights)?
                .with_progress(std::io::stderr().is_terminal());
            let run_report = run.execute(&resume_paths).await?;

            let (generator, format) = generator_for(&config, &report);
            let rendered = generator.generate_run(&run_report, format)?;
            emit(&rendered, report.save.as_deref(), format, &position_path)?;
        }

        Commands::Name { resume } => {
            let mut input_manager = InputManager::new();
            let resume_text = input_manager.extract_text(&resume).await?;
            println!("{}", extract_candidate_name(&resume_text, &file_name_of(&resume)));
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                let path = config_path.unwrap_or_else(Config::config_path);
                println!("⚙️  Current Configuration ({})\n", path.display());
                println!("Scoring Weights:");
                println!("  Must-have: {}", config.scoring.weights.must_have);
                println!("  Nice-to-have: {}", config.scoring.weights.nice_to_have);
                println!("  Custom: {}", config.scoring.weights.custom);
                println!("\nOutput:");
                println!("  Format: {:?}", config.output.format);
                println!("  Detailed: {}", config.output.detailed);
                println!("  Colors: {}", config.output.color_output);
                println!("  Pretty JSON: {}", config.output.pretty_json);
            }

            Some(ConfigAction::Reset) => {
                println!("🔄 Resetting configuration to defaults...");
                save_config(&Config::default(), config_path.as_deref())?;
                println!("✅ Configuration reset successfully!");
            }

            Some(ConfigAction::Set { key, value }) => {
                config.set(&key, &value)?;
                save_config(&config, config_path.as_deref())?;
                println!("✅ Set {} = {}", key, value);
            }
        },
    }

    Ok(())
}

/// Requirements from a position file or inline text, plus the effective weights
async fn resolve_requirements(
    args: RequirementArgs,
    config: &Config,
) -> Result<(Requirements, Option<String>, candidate_scorer::ScoringWeights)> {
    let weights = args.weights.unwrap_or(config.scoring.weights);

    let (requirements, title) = match (args.position, args.must_have, args.nice_to_have) {
        (Some(path), _, _) => {
            let position = Position::load(&path).await?;
            (position.requirements(args.custom.as_deref()), Some(position.title))
        }
        (None, Some(must_have), Some(nice_to_have)) => {
            let requirements = Requirements::new(must_have, nice_to_have);
            let requirements = match args.custom {
                Some(custom) => requirements.with_custom(custom),
                None => requirements,
            };
            (requirements, None)
        }
        _ => {
            return Err(ScorerError::InvalidInput(
                "Provide --position or both --must-have and --nice-to-have".to_string(),
            ))
        }
    };

    Ok((requirements, title, weights))
}

fn generator_for(config: &Config, report: &ReportArgs) -> (ReportGenerator, OutputFormat) {
    let format = report.output.unwrap_or(config.output.format);
    let use_colors = config.output.color_output && report.save.is_none();
    let detailed = config.output.detailed || report.detailed;
    let generator = ReportGenerator::with_options(use_colors, detailed, config.output.pretty_json, true);
    (generator, format)
}

/// Print the report, or save it; a directory target gets a generated file name
fn emit(rendered: &str, save: Option<&Path>, format: OutputFormat, source: &Path) -> Result<()> {
    match save {
        Some(path) => {
            let path = if path.is_dir() {
                path.join(suggest_filename(format, &source.to_string_lossy(), true))
            } else {
                path.to_path_buf()
            };
            save_report_to_file(rendered, &path)?;
            println!("💾 Report saved to {}", path.display());
        }
        None => println!("{}", rendered),
    }
    Ok(())
}

fn save_config(config: &Config, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => config.save_to(path),
        None => config.save(),
    }
}
