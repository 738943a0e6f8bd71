//! Human-readable strengths, gaps and summary for a scored candidate

use crate::scoring::keywords::KeywordSet;
use crate::scoring::matcher::MatchResult;
use crate::scoring::recommendation::Recommendation;

const MAX_MUST_HAVE_STRENGTHS: usize = 5;
const MAX_NICE_TO_HAVE_STRENGTHS: usize = 3;
const MAX_GAPS: usize = 5;
const MAX_PROFICIENCIES: usize = 3;

/// Category inputs the rationale is derived from
#[derive(Debug, Clone, Copy)]
pub struct CategoryOutcome<'a> {
    pub keywords: &'a KeywordSet,
    pub matches: &'a MatchResult,
}

impl CategoryOutcome<'_> {
    fn matched(&self) -> usize {
        self.matches.matched_count()
    }

    fn total(&self) -> usize {
        self.keywords.len()
    }
}

/// First five must-have matches followed by the first three nice-to-have matches
pub fn build_strengths(must_have: &MatchResult, nice_to_have: &MatchResult) -> String {
    must_have
        .matched_keywords
        .iter()
        .take(MAX_MUST_HAVE_STRENGTHS)
        .chain(nice_to_have.matched_keywords.iter().take(MAX_NICE_TO_HAVE_STRENGTHS))
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Up to five missing keywords, must-have first, topped up with nice-to-have
pub fn build_gaps(must_have: CategoryOutcome<'_>, nice_to_have: CategoryOutcome<'_>) -> String {
    let mut gaps: Vec<&str> = must_have
        .matches
        .unmatched(must_have.keywords)
        .into_iter()
        .take(MAX_GAPS)
        .collect();

    if gaps.len() < MAX_GAPS {
        let remaining = MAX_GAPS - gaps.len();
        gaps.extend(
            nice_to_have
                .matches
                .unmatched(nice_to_have.keywords)
                .into_iter()
                .take(remaining),
        );
    }

    gaps.join(", ")
}

/// One paragraph describing the match, shaped by the recommendation tier.
///
/// Sentences are joined by single spaces and the result never ends in
/// whitespace, so summaries stored by older tools with a trailing space
/// differ from these by that space alone.
pub fn generate_summary(
    must_have: CategoryOutcome<'_>,
    nice_to_have: CategoryOutcome<'_>,
    custom: CategoryOutcome<'_>,
    recommendation: Recommendation,
) -> String {
    let mut sentences = Vec::new();

    match recommendation {
        Recommendation::Yes => {
            sentences.push(
                "Strong candidate with excellent alignment to position requirements.".to_string(),
            );
            sentences.push(format!(
                "Matches {} of {} must-have requirements and {} of {} nice-to-have skills.",
                must_have.matched(),
                must_have.total(),
                nice_to_have.matched(),
                nice_to_have.total()
            ));
            if must_have.matched() > 0 {
                let top = must_have
                    .matches
                    .matched_keywords
                    .iter()
                    .take(MAX_PROFICIENCIES)
                    .map(String::as_str)
                    .collect::<Vec<_>>()
                    .join(", ");
                sentences.push(format!("Demonstrates proficiency in {}.", top));
            }
        }
        Recommendation::Maybe => {
            sentences.push(
                "Potentially suitable candidate with partial match to requirements.".to_string(),
            );
            sentences.push(format!(
                "Meets {} of {} must-have criteria.",
                must_have.matched(),
                must_have.total()
            ));

            let missing = must_have.total().saturating_sub(must_have.matched());
            if missing > 0 {
                sentences.push(format!(
                    "May need development in {} key {}.",
                    missing,
                    pluralize("area", missing)
                ));
            }

            if nice_to_have.matched() > 0 {
                sentences.push(format!(
                    "Shows strength in {} additional {}.",
                    nice_to_have.matched(),
                    pluralize("skill", nice_to_have.matched())
                ));
            }
        }
        Recommendation::No => {
            sentences.push("Limited alignment with position requirements.".to_string());
            sentences.push(format!(
                "Matches only {} of {} must-have requirements.",
                must_have.matched(),
                must_have.total()
            ));

            let total_matches = must_have.matched() + nice_to_have.matched() + custom.matched();
            if total_matches > 0 {
                sentences.push(
                    "Shows some relevant experience but significant gaps in core competencies."
                        .to_string(),
                );
            } else {
                sentences.push(
                    "Resume does not demonstrate required qualifications for this role."
                        .to_string(),
                );
            }
        }
    }

    sentences.join(" ")
}

fn pluralize(noun: &str, count: usize) -> String {
    if count == 1 {
        noun.to_string()
    } else {
        format!("{}s", noun)
    }
}
