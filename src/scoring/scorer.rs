//! Candidate scoring pipeline: extraction, matching, aggregation and rationale

use crate::scoring::keywords::extract_keywords;
use crate::scoring::matcher::{calculate_matches, MatchResult};
use crate::scoring::rationale::{build_gaps, build_strengths, generate_summary, CategoryOutcome};
use crate::scoring::recommendation::Recommendation;
use crate::scoring::weights::{NormalizedWeights, ScoringWeights};
use log::debug;
use serde::{Deserialize, Serialize};

/// Requirement texts for one scoring pass
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Requirements {
    pub must_have: String,
    pub nice_to_have: String,
    pub custom: Option<String>,
}

impl Requirements {
    pub fn new(must_have: impl Into<String>, nice_to_have: impl Into<String>) -> Self {
        Self {
            must_have: must_have.into(),
            nice_to_have: nice_to_have.into(),
            custom: None,
        }
    }

    pub fn with_custom(mut self, custom: impl Into<String>) -> Self {
        self.custom = Some(custom.into());
        self
    }
}

/// Match results for every requirement category
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryMatches {
    pub must_have: MatchResult,
    pub nice_to_have: MatchResult,
    pub custom: MatchResult,
}

/// Outcome of scoring one candidate; persisted or displayed verbatim
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringResult {
    /// Final score, 0-100
    pub score: u8,
    pub recommendation: Recommendation,
    pub summary: String,
    pub strengths: String,
    pub gaps: String,
    pub matches: CategoryMatches,
}

/// Stateless scorer carrying the weights used when a call supplies none
#[derive(Debug, Clone, Copy, Default)]
pub struct CandidateScorer {
    weights: ScoringWeights,
}

impl CandidateScorer {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> ScoringWeights {
        self.weights
    }

    pub fn score(&self, resume_text: &str, requirements: &Requirements) -> ScoringResult {
        score_candidate(
            resume_text,
            &requirements.must_have,
            &requirements.nice_to_have,
            requirements.custom.as_deref(),
            Some(self.weights),
        )
    }
}

/// Score resume text against must-have, nice-to-have and optional custom requirements.
///
/// Missing custom requirements contribute a match rate of 0 while the custom
/// weight still takes part in normalization. `None` weights mean 70/20/10.
pub fn score_candidate(
    resume_text: &str,
    must_have: &str,
    nice_to_have: &str,
    custom: Option<&str>,
    weights: Option<ScoringWeights>,
) -> ScoringResult {
    let normalized = weights.unwrap_or_default().normalize();

    let must_have_keywords = extract_keywords(must_have);
    let nice_to_have_keywords = extract_keywords(nice_to_have);
    let custom_keywords = custom.map(extract_keywords).unwrap_or_default();

    let matches = CategoryMatches {
        must_have: calculate_matches(resume_text, &must_have_keywords),
        nice_to_have: calculate_matches(resume_text, &nice_to_have_keywords),
        custom: calculate_matches(resume_text, &custom_keywords),
    };

    debug!(
        "Matched must-have {}/{}, nice-to-have {}/{}, custom {}/{}",
        matches.must_have.matched_count(),
        must_have_keywords.len(),
        matches.nice_to_have.matched_count(),
        nice_to_have_keywords.len(),
        matches.custom.matched_count(),
        custom_keywords.len()
    );

    let score = aggregate_score(&matches, &normalized);
    let recommendation = Recommendation::from_score(score);

    let must = CategoryOutcome {
        keywords: &must_have_keywords,
        matches: &matches.must_have,
    };
    let nice = CategoryOutcome {
        keywords: &nice_to_have_keywords,
        matches: &matches.nice_to_have,
    };
    let custom = CategoryOutcome {
        keywords: &custom_keywords,
        matches: &matches.custom,
    };

    let strengths = build_strengths(&matches.must_have, &matches.nice_to_have);
    let gaps = build_gaps(must, nice);
    let summary = generate_summary(must, nice, custom, recommendation);

    ScoringResult {
        score,
        recommendation,
        summary,
        strengths,
        gaps,
        matches,
    }
}

/// Weighted score clamped to 0-100 and rounded half away from zero
pub fn aggregate_score(matches: &CategoryMatches, weights: &NormalizedWeights) -> u8 {
    let weighted = 100.0
        * (matches.must_have.match_rate * weights.must_have
            + matches.nice_to_have.match_rate * weights.nice_to_have
            + matches.custom.match_rate * weights.custom);

    round_score(weighted)
}

fn round_score(weighted: f64) -> u8 {
    if weighted.is_nan() {
        return 0;
    }
    weighted.clamp(0.0, 100.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    const MUST: &str = "Python, SQL";
    const NICE: &str = "AWS";

    fn rates(must_have: f64, nice_to_have: f64, custom: f64) -> CategoryMatches {
        let with_rate = |match_rate| MatchResult {
            match_rate,
            ..MatchResult::default()
        };
        CategoryMatches {
            must_have: with_rate(must_have),
            nice_to_have: with_rate(nice_to_have),
            custom: with_rate(custom),
        }
    }

    #[test]
    fn test_full_match_without_custom_requirements() {
        let resume = "5 years of Python and SQL experience, familiar with AWS";
        let result = score_candidate(resume, MUST, NICE, Some(""), None);

        assert_eq!(result.matches.must_have.match_rate, 1.0);
        assert_eq!(result.matches.nice_to_have.match_rate, 1.0);
        assert_eq!(result.matches.custom.match_rate, 0.0);
        // the custom 10% still participates in normalization
        assert_eq!(result.score, 90);
        assert_eq!(result.recommendation, Recommendation::Yes);
        assert_eq!(result.strengths, "python, sql, aws");
        assert_eq!(result.gaps, "");
    }

    #[test]
    fn test_full_match_with_zero_custom_weight() {
        let resume = "5 years of Python and SQL experience, familiar with AWS";
        let weights = ScoringWeights::new(70.0, 20.0, 0.0);
        let result = score_candidate(resume, MUST, NICE, None, Some(weights));
        assert_eq!(result.score, 100);
        assert_eq!(result.recommendation, Recommendation::Yes);
    }

    #[test]
    fn test_no_overlap_scores_zero() {
        let result = score_candidate("Experienced chef", MUST, NICE, Some(""), None);
        assert_eq!(result.score, 0);
        assert_eq!(result.recommendation, Recommendation::No);
        assert_eq!(result.strengths, "");
        assert_eq!(result.gaps, "python, sql, aws");
        assert!(result
            .summary
            .ends_with("Resume does not demonstrate required qualifications for this role."));
    }

    #[test]
    fn test_zero_weights_use_equal_thirds() {
        let resume = "Python and SQL";
        let weights = ScoringWeights::new(0.0, 0.0, 0.0);
        let result = score_candidate(resume, MUST, NICE, None, Some(weights));
        // must-have fully matched, one third of the weight
        assert_eq!(result.score, 33);
        assert_eq!(result.recommendation, Recommendation::No);
    }

    #[test]
    fn test_custom_requirements_contribute() {
        let resume = "Python developer who mentors juniors";
        let result = score_candidate(resume, MUST, NICE, Some("mentoring, mentors"), None);
        assert_eq!(result.matches.custom.matched_keywords, vec!["mentors"]);
        assert!((result.matches.custom.match_rate - 0.5).abs() < 1e-9);
        // 100 * (0.5 * 0.7 + 0 * 0.2 + 0.5 * 0.1) = 40
        assert_eq!(result.score, 40);
    }

    #[test]
    fn test_rounding_half_away_from_zero() {
        assert_eq!(round_score(74.5), 75);
        assert_eq!(round_score(74.49), 74);
        assert_eq!(round_score(49.5), 50);
        assert_eq!(round_score(0.5), 1);
    }

    #[test]
    fn test_three_quarter_must_have_lands_on_yes_boundary() {
        let weights = ScoringWeights::new(1.0, 0.0, 0.0).normalize();
        assert_eq!(aggregate_score(&rates(0.75, 0.0, 0.0), &weights), 75);
        assert_eq!(
            Recommendation::from_score(aggregate_score(&rates(0.75, 0.0, 0.0), &weights)),
            Recommendation::Yes
        );
    }

    #[test]
    fn test_score_bounds() {
        let weights = ScoringWeights::default().normalize();
        assert_eq!(aggregate_score(&rates(1.0, 1.0, 1.0), &weights), 100);
        assert_eq!(aggregate_score(&rates(0.0, 0.0, 0.0), &weights), 0);
        assert_eq!(round_score(-3.2), 0);
        assert_eq!(round_score(140.0), 100);
        assert_eq!(round_score(f64::NAN), 0);
    }

    #[test]
    fn test_identical_calls_are_identical() {
        let resume = "Rust, Kafka and some Python";
        let first = score_candidate(resume, "rust, go, kafka", "python", Some("on-call"), None);
        let second = score_candidate(resume, "rust, go, kafka", "python", Some("on-call"), None);
        assert_eq!(first, second);
    }

    #[test]
    fn test_scorer_uses_configured_weights() {
        let scorer = CandidateScorer::new(ScoringWeights::new(50.0, 50.0, 0.0));
        let requirements = Requirements::new("rust", "kafka").with_custom("");
        let result = scorer.score("rust only", &requirements);
        assert_eq!(result.score, 50);
        assert_eq!(result.recommendation, Recommendation::Maybe);
    }
}
