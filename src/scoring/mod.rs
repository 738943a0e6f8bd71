//! Keyword-based candidate scoring engine
//!
//! Every function here is pure: no I/O, no shared state. Callers supply
//! already-extracted resume and requirement text.

pub mod keywords;
pub mod matcher;
pub mod weights;
pub mod recommendation;
pub mod rationale;
pub mod name;
pub mod scorer;

pub use keywords::{extract_keywords, KeywordSet};
pub use matcher::{calculate_matches, MatchResult};
pub use name::extract_candidate_name;
pub use recommendation::Recommendation;
pub use scorer::{score_candidate, CandidateScorer, CategoryMatches, Requirements, ScoringResult};
pub use weights::{NormalizedWeights, ScoringWeights, DEFAULT_WEIGHTS};
