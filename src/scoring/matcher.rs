//! Per-category keyword matching against resume text

use crate::scoring::keywords::KeywordSet;
use serde::{Deserialize, Serialize};

/// Keywords of one requirement category that occur in a resume
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Matched keywords, in extraction order
    pub matched_keywords: Vec<String>,
    /// `matched_keywords.len() / keyword_count`, or 0 for an empty category
    pub match_rate: f64,
    pub keyword_count: usize,
}

impl MatchResult {
    pub fn matched_count(&self) -> usize {
        self.matched_keywords.len()
    }

    /// Keywords of `keywords` that were not matched, in extraction order
    pub fn unmatched<'a>(&self, keywords: &'a KeywordSet) -> Vec<&'a str> {
        keywords
            .iter()
            .filter(|k| !self.matched_keywords.contains(*k))
            .map(String::as_str)
            .collect()
    }
}

/// Test each keyword for case-insensitive substring containment in the resume.
///
/// Containment is not anchored to word boundaries, so "java" also matches
/// inside "javascript".
pub fn calculate_matches(resume_text: &str, keywords: &KeywordSet) -> MatchResult {
    if keywords.is_empty() {
        return MatchResult::default();
    }

    let resume_lower = resume_text.to_lowercase();
    let matched_keywords: Vec<String> = keywords
        .iter()
        .filter(|keyword| resume_lower.contains(keyword.as_str()))
        .cloned()
        .collect();

    let match_rate = matched_keywords.len() as f64 / keywords.len() as f64;

    MatchResult {
        matched_keywords,
        match_rate,
        keyword_count: keywords.len(),
    }
}
