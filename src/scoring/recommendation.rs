//! Three-tier hiring recommendation derived from the final score

use serde::{Deserialize, Serialize};
use std::fmt;

pub const YES_THRESHOLD: u8 = 75;
pub const MAYBE_THRESHOLD: u8 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Recommendation {
    Yes,
    Maybe,
    No,
}

impl Recommendation {
    pub fn from_score(score: u8) -> Self {
        if score >= YES_THRESHOLD {
            Recommendation::Yes
        } else if score >= MAYBE_THRESHOLD {
            Recommendation::Maybe
        } else {
            Recommendation::No
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Recommendation::Yes => "yes",
            Recommendation::Maybe => "maybe",
            Recommendation::No => "no",
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partition_is_exact() {
        for score in 0..=100u8 {
            let expected = if score >= 75 {
                Recommendation::Yes
            } else if score >= 50 {
                Recommendation::Maybe
            } else {
                Recommendation::No
            };
            assert_eq!(Recommendation::from_score(score), expected, "score {}", score);
        }
    }

    #[test]
    fn test_boundaries() {
        assert_eq!(Recommendation::from_score(75), Recommendation::Yes);
        assert_eq!(Recommendation::from_score(74), Recommendation::Maybe);
        assert_eq!(Recommendation::from_score(50), Recommendation::Maybe);
        assert_eq!(Recommendation::from_score(49), Recommendation::No);
    }

    #[test]
    fn test_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Recommendation::Maybe).unwrap(), "\"maybe\"");
        assert_eq!(Recommendation::Yes.to_string(), "yes");
    }
}
