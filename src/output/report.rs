//! Report structures for single scores and analysis runs

use crate::scoring::{Recommendation, ScoringResult, ScoringWeights};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle of an analysis run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunStatus {
    Pending,
    Running,
    Done,
    Failed,
}

/// One candidate's score within a report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateScore {
    pub candidate_name: String,
    pub file_name: String,
    pub result: ScoringResult,
}

/// A resume left out of a run, with the reason
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkippedResume {
    pub file_name: String,
    pub reason: String,
}

/// Result of scoring a single resume
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreReport {
    pub position_title: Option<String>,
    pub weights: ScoringWeights,
    pub candidate: CandidateScore,
    pub generated_at: DateTime<Utc>,
}

/// Result of an analysis run, candidates ordered best first
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub position_title: String,
    pub custom_requirements: Option<String>,
    pub weights: ScoringWeights,
    pub status: RunStatus,
    pub started_at: DateTime<Utc>,
    pub completed_at: DateTime<Utc>,
    pub candidates: Vec<CandidateScore>,
    pub skipped: Vec<SkippedResume>,
}

/// Candidate counts per recommendation tier
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierCounts {
    pub yes: usize,
    pub maybe: usize,
    pub no: usize,
}

impl ScoreReport {
    pub fn new(
        candidate: CandidateScore,
        weights: ScoringWeights,
        position_title: Option<String>,
    ) -> Self {
        Self {
            position_title,
            weights,
            candidate,
            generated_at: Utc::now(),
        }
    }
}

impl RunReport {
    pub fn tier_counts(&self) -> TierCounts {
        self.candidates
            .iter()
            .fold(TierCounts::default(), |mut counts, candidate| {
                match candidate.result.recommendation {
                    Recommendation::Yes => counts.yes += 1,
                    Recommendation::Maybe => counts.maybe += 1,
                    Recommendation::No => counts.no += 1,
                }
                counts
            })
    }

    pub fn duration_ms(&self) -> i64 {
        (self.completed_at - self.started_at).num_milliseconds()
    }

    pub fn top_candidate(&self) -> Option<&CandidateScore> {
        self.candidates.first()
    }
}

/// Order candidates by score, best first, then by name
pub fn rank_candidates(candidates: &mut [CandidateScore]) {
    candidates.sort_by(|a, b| {
        b.result
            .score
            .cmp(&a.result.score)
            .then_with(|| a.candidate_name.cmp(&b.candidate_name))
            .then_with(|| a.file_name.cmp(&b.file_name))
    });
}
