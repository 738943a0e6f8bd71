//! Integration tests for the candidate scorer

use candidate_scorer::analysis::AnalysisRun;
use candidate_scorer::config::{Config, OutputFormat};
use candidate_scorer::input::manager::{collect_resume_paths, InputManager};
use candidate_scorer::input::Position;
use candidate_scorer::output::report::RunStatus;
use candidate_scorer::output::ReportGenerator;
use candidate_scorer::scoring::{CandidateScorer, Recommendation};
use candidate_scorer::{extract_candidate_name, ScorerError, ScoringWeights};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

#[tokio::test]
async fn test_text_extraction_from_txt() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.txt");

    let result = manager.extract_text(path).await;
    assert!(result.is_ok());

    let text = result.unwrap();
    assert!(text.contains("John Doe"));
    assert!(text.contains("Software Engineer"));
    assert!(text.contains("React"));
    assert!(text.contains("Node.js"));
}

#[tokio::test]
async fn test_text_extraction_from_markdown() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.md");

    let text = manager.extract_text(path).await.unwrap();
    assert!(text.contains("John Doe"));
    assert!(text.contains("Software Engineer"));
    assert!(text.contains("React"));
    assert!(text.contains("Node.js"));
    // Should not contain markdown formatting
    assert!(!text.contains("**"));
    assert!(!text.contains("##"));
}

#[tokio::test]
async fn test_text_extraction_from_docx() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.docx");

    let text = manager.extract_text(path).await.unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "John Doe");
    assert_eq!(lines[1], "Software Engineer");
    assert!(text.contains("JavaScript, TypeScript, React, Node.js"));
    assert!(text.contains("PostgreSQL & Docker"));
    assert!(text.contains("Acme Corp\t2020 - present"));
    assert!(!text.contains('<'));

    assert_eq!(extract_candidate_name(&text, "sample_resume.docx"), "John Doe");
}

#[tokio::test]
async fn test_docx_without_document_part_fails() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/not_a_docx.docx");

    let result = manager.extract_text(path).await;
    assert!(matches!(result, Err(ScorerError::DocxExtraction(_))));
}

#[tokio::test]
async fn test_run_scores_docx_resume() {
    let position = Position::load(Path::new("tests/fixtures/position.toml"))
        .await
        .unwrap();
    let paths = vec![PathBuf::from("tests/fixtures/sample_resume.docx")];

    let mut run = AnalysisRun::new(position, None, ScoringWeights::default()).unwrap();
    let report = run.execute(&paths).await.unwrap();

    assert_eq!(report.candidates[0].candidate_name, "John Doe");
    assert_eq!(report.candidates[0].file_name, "sample_resume.docx");
    assert_eq!(report.candidates[0].result.score, 23);
}

#[tokio::test]
async fn test_caching_functionality() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.txt");

    let text1 = manager.extract_text(path).await.unwrap();
    assert_eq!(manager.cache_size(), 1);

    let text2 = manager.extract_text(path).await.unwrap();
    assert_eq!(text1, text2);
    assert_eq!(manager.cache_size(), 1);

    manager.clear_cache();
    assert_eq!(manager.cache_size(), 0);
}

#[tokio::test]
async fn test_cache_can_be_disabled() {
    let mut manager = InputManager::new().with_cache(false);
    let path = Path::new("tests/fixtures/sample_resume.txt");

    let text1 = manager.extract_text(path).await.unwrap();
    let text2 = manager.extract_text(path).await.unwrap();
    assert_eq!(text1, text2);
    assert_eq!(manager.cache_size(), 0);
}

#[tokio::test]
async fn test_unsupported_file_type() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/unsupported.xyz");

    let result = manager.extract_text(path).await;
    assert!(matches!(result, Err(ScorerError::UnsupportedFormat(_))));
}

#[tokio::test]
async fn test_nonexistent_file() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/nonexistent.txt");

    let result = manager.extract_text(path).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_oversized_resume_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("huge.txt");
    std::fs::write(&path, vec![b'a'; 5 * 1024 * 1024 + 1]).unwrap();

    let mut manager = InputManager::new();
    let result = manager.extract_text(&path).await;
    assert!(matches!(result, Err(ScorerError::InvalidInput(_))));
}

#[tokio::test]
async fn test_name_extraction_from_fixtures() {
    let mut manager = InputManager::new();

    let text = manager
        .extract_text(Path::new("tests/fixtures/sample_resume.txt"))
        .await
        .unwrap();
    assert_eq!(extract_candidate_name(&text, "sample_resume.txt"), "John Doe");

    let markdown = manager
        .extract_text(Path::new("tests/fixtures/sample_resume.md"))
        .await
        .unwrap();
    assert_eq!(extract_candidate_name(&markdown, "sample_resume.md"), "John Doe");
}

#[tokio::test]
async fn test_score_sample_resume_against_position() {
    let position = Position::load(Path::new("tests/fixtures/position.toml"))
        .await
        .unwrap();
    assert_eq!(position.title, "Platform Engineer");

    let mut manager = InputManager::new();
    let text = manager
        .extract_text(Path::new("tests/fixtures/sample_resume.txt"))
        .await
        .unwrap();

    // Only PostgreSQL overlaps: 1/3 of must-have at 70%
    let result = CandidateScorer::default().score(&text, &position.requirements(None));
    assert_eq!(result.score, 23);
    assert_eq!(result.recommendation, Recommendation::No);
    assert_eq!(result.strengths, "postgresql");
    assert_eq!(result.gaps, "rust, kubernetes, kafka, terraform");
}

#[tokio::test]
async fn test_run_over_fixture_directory() {
    let position = Position::load(Path::new("tests/fixtures/position.toml"))
        .await
        .unwrap();
    let paths = collect_resume_paths(&[PathBuf::from("tests/fixtures/resumes")]).unwrap();
    // notes.xyz is filtered out while listing the directory
    assert_eq!(paths.len(), 3);

    let mut run = AnalysisRun::new(position, None, ScoringWeights::default()).unwrap();
    let report = run.execute(&paths).await.unwrap();

    assert_eq!(run.status(), RunStatus::Done);
    let ranked: Vec<(&str, u8)> = report
        .candidates
        .iter()
        .map(|c| (c.candidate_name.as_str(), c.result.score))
        .collect();
    assert_eq!(ranked, vec![("Jane Smith", 90), ("Alex Chen", 57)]);
    assert_eq!(report.candidates[0].result.recommendation, Recommendation::Yes);
    assert_eq!(report.candidates[1].result.recommendation, Recommendation::Maybe);

    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.skipped[0].file_name, "blank.txt");
}

#[tokio::test]
async fn test_run_reports_unreadable_files_as_skipped() {
    let position = Position::load(Path::new("tests/fixtures/position.toml"))
        .await
        .unwrap();
    let paths = vec![
        PathBuf::from("tests/fixtures/resumes/jane_smith.txt"),
        PathBuf::from("tests/fixtures/unsupported.xyz"),
    ];

    let mut run = AnalysisRun::new(position, Some("Terraform".to_string()), ScoringWeights::default())
        .unwrap();
    let report = run.execute(&paths).await.unwrap();

    assert_eq!(report.candidates.len(), 1);
    assert_eq!(report.candidates[0].result.score, 100);
    assert_eq!(report.skipped[0].file_name, "unsupported.xyz");
}

#[tokio::test]
async fn test_run_with_only_blank_resumes_fails() {
    let position = Position::load(Path::new("tests/fixtures/position.toml"))
        .await
        .unwrap();
    let paths = vec![PathBuf::from("tests/fixtures/resumes/blank.txt")];

    let mut run = AnalysisRun::new(position, None, ScoringWeights::default()).unwrap();
    let err = run.execute(&paths).await.unwrap_err();

    assert!(matches!(err, ScorerError::AnalysisFailed(_)));
    assert_eq!(run.status(), RunStatus::Failed);
}

#[tokio::test]
async fn test_run_report_renders_as_json() {
    let position = Position::load(Path::new("tests/fixtures/position.toml"))
        .await
        .unwrap();
    let paths = vec![PathBuf::from("tests/fixtures/resumes/jane_smith.txt")];
    let mut run = AnalysisRun::new(position, None, ScoringWeights::default()).unwrap();
    let report = run.execute(&paths).await.unwrap();

    let json = ReportGenerator::with_options(false, true, true, false)
        .generate_run(&report, OutputFormat::Json)
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["status"], "done");
    assert_eq!(value["candidates"][0]["result"]["recommendation"], "yes");
    assert_eq!(value["candidates"][0]["result"]["score"], 90);
}

#[test]
fn test_config_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let mut config = Config::default();
    config.set("scoring.must_have", "60").unwrap();
    config.set("output.format", "json").unwrap();
    config.save_to(&path).unwrap();

    let loaded = Config::load_from(&path).unwrap();
    assert_eq!(loaded.scoring.weights, ScoringWeights::new(60.0, 20.0, 10.0));
    assert_eq!(loaded.output.format, OutputFormat::Json);
}

#[test]
fn test_config_with_negative_weight_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[scoring.weights]
must_have = -1.0
nice_to_have = 20.0
custom = 10.0

[output]
format = "Console"
detailed = false
color_output = true
pretty_json = true
"#,
    )
    .unwrap();

    assert!(Config::load_from(&path).is_err());
}
