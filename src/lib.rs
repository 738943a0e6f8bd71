//! Candidate scorer library
//!
//! The [`scoring`] module is the pure engine; the remaining modules feed it
//! text and present its results.

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod scoring;

pub use config::Config;
pub use error::{Result, ScorerError};
pub use scoring::{extract_candidate_name, score_candidate, Recommendation, ScoringResult, ScoringWeights};
