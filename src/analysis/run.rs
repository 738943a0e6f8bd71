//! Analysis runs: score many resumes against one position

use crate::error::{Result, ScorerError};
use crate::input::{InputManager, Position};
use crate::output::report::{rank_candidates, CandidateScore, RunReport, RunStatus, SkippedResume};
use crate::scoring::{extract_candidate_name, CandidateScorer, Requirements, ScoringWeights};
use chrono::Utc;
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info, warn};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::task::JoinSet;

/// Resume text ready for scoring
#[derive(Debug, Clone)]
pub struct ResumeText {
    pub file_name: String,
    pub text: String,
}

pub struct AnalysisRun {
    position: Position,
    custom_requirements: Option<String>,
    scorer: CandidateScorer,
    status: RunStatus,
    show_progress: bool,
}

impl AnalysisRun {
    pub fn new(
        position: Position,
        custom_requirements: Option<String>,
        weights: ScoringWeights,
    ) -> Result<Self> {
        position.validate()?;
        weights.validate()?;

        if let Some(custom) = &custom_requirements {
            if custom.trim().is_empty() {
                return Err(ScorerError::InvalidInput(
                    "Custom requirements must not be blank".to_string(),
                ));
            }
        }

        Ok(Self {
            position,
            custom_requirements,
            scorer: CandidateScorer::new(weights),
            status: RunStatus::Pending,
            show_progress: false,
        })
    }

    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    pub fn status(&self) -> RunStatus {
        self.status
    }

    /// Extract every resume file, then score the ones that yield text
    pub async fn execute(&mut self, resume_paths: &[PathBuf]) -> Result<RunReport> {
        // every path is read once per run
        let mut input_manager = InputManager::new().with_cache(false);
        let mut resumes = Vec::with_capacity(resume_paths.len());
        let mut skipped = Vec::new();

        for path in resume_paths {
            let file_name = file_name_of(path);
            match input_manager.extract_text(path).await {
                Ok(text) => resumes.push(ResumeText { file_name, text }),
                Err(e) => {
                    warn!("Skipping {}: {}", path.display(), e);
                    skipped.push(SkippedResume {
                        file_name,
                        reason: e.to_string(),
                    });
                }
            }
        }

        let mut report = self.score_texts(resumes).await?;
        report.skipped.extend(skipped);
        report.skipped.sort_by(|a, b| a.file_name.cmp(&b.file_name));
        Ok(report)
    }

    /// Score already-extracted resumes, one blocking task per candidate
    pub async fn score_texts(&mut self, resumes: Vec<ResumeText>) -> Result<RunReport> {
        let started_at = Utc::now();
        self.status = RunStatus::Running;
        info!(
            "Starting analysis run for '{}' with {} resume(s)",
            self.position.title,
            resumes.len()
        );

        let (resumes, skipped): (Vec<_>, Vec<_>) = resumes
            .into_iter()
            .partition(|resume| !resume.text.trim().is_empty());

        let mut skipped: Vec<SkippedResume> = skipped
            .into_iter()
            .map(|resume| {
                warn!("Skipping {}: no extracted text", resume.file_name);
                SkippedResume {
                    file_name: resume.file_name,
                    reason: "No extracted text".to_string(),
                }
            })
            .collect();

        if resumes.is_empty() {
            self.status = RunStatus::Failed;
            error!("Analysis run for '{}' failed: no usable resumes", self.position.title);
            return Err(ScorerError::AnalysisFailed(
                "No resumes with extracted text found".to_string(),
            ));
        }

        let requirements = Arc::new(
            self.position
                .requirements(self.custom_requirements.as_deref()),
        );
        let progress = self.progress_bar(resumes.len() as u64);

        let mut tasks = JoinSet::new();
        for resume in resumes {
            let requirements = Arc::clone(&requirements);
            let scorer = self.scorer;
            tasks.spawn_blocking(move || score_resume(&scorer, &requirements, resume));
        }

        let mut candidates = Vec::with_capacity(tasks.len());
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok(candidate) => {
                    progress.inc(1);
                    candidates.push(candidate);
                }
                Err(e) => {
                    progress.abandon();
                    self.status = RunStatus::Failed;
                    return Err(e.into());
                }
            }
        }
        progress.finish_and_clear();

        rank_candidates(&mut candidates);
        skipped.sort_by(|a, b| a.file_name.cmp(&b.file_name));
        self.status = RunStatus::Done;

        info!(
            "Analysis completed successfully. Processed {} candidate(s).",
            candidates.len()
        );

        Ok(RunReport {
            position_title: self.position.title.clone(),
            custom_requirements: self.custom_requirements.clone(),
            weights: self.scorer.weights(),
            status: self.status,
            started_at,
            completed_at: Utc::now(),
            candidates,
            skipped,
        })
    }

    fn progress_bar(&self, len: u64) -> ProgressBar {
        if !self.show_progress {
            return ProgressBar::hidden();
        }

        let bar = ProgressBar::new(len);
        if let Ok(style) = ProgressStyle::with_template("{spinner} [{bar:30}] {pos}/{len} scored") {
            bar.set_style(style);
        }
        bar
    }
}

fn score_resume(
    scorer: &CandidateScorer,
    requirements: &Requirements,
    resume: ResumeText,
) -> CandidateScore {
    let candidate_name = extract_candidate_name(&resume.text, &resume.file_name);
    let result = scorer.score(&resume.text, requirements);
    CandidateScore {
        candidate_name,
        file_name: resume.file_name,
        result,
    }
}

pub fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
