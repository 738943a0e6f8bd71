//! Category weights and their normalization

use crate::error::{Result, ScorerError};
use log::warn;
use serde::{Deserialize, Serialize};

/// Raw per-category weights supplied by the caller.
///
/// The three values need not sum to 100; they are normalized before use.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub must_have: f64,
    pub nice_to_have: f64,
    pub custom: f64,
}

/// Weights scaled to proportions that sum to 1
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalizedWeights {
    pub must_have: f64,
    pub nice_to_have: f64,
    pub custom: f64,
}

pub const DEFAULT_WEIGHTS: ScoringWeights = ScoringWeights {
    must_have: 70.0,
    nice_to_have: 20.0,
    custom: 10.0,
};

const EQUAL_THIRDS: NormalizedWeights = NormalizedWeights {
    must_have: 1.0 / 3.0,
    nice_to_have: 1.0 / 3.0,
    custom: 1.0 / 3.0,
};

impl Default for ScoringWeights {
    fn default() -> Self {
        DEFAULT_WEIGHTS
    }
}

impl ScoringWeights {
    pub fn new(must_have: f64, nice_to_have: f64, custom: f64) -> Self {
        Self {
            must_have,
            nice_to_have,
            custom,
        }
    }

    pub fn sum(&self) -> f64 {
        self.must_have + self.nice_to_have + self.custom
    }

    /// Scale each weight by the total.
    ///
    /// A total of zero (or any non-finite or non-positive total) falls back
    /// to equal thirds instead of producing NaN.
    pub fn normalize(&self) -> NormalizedWeights {
        let total = self.sum();
        if !total.is_finite() || total <= 0.0 {
            warn!(
                "Scoring weights {:?} sum to {}; using equal thirds",
                self, total
            );
            return EQUAL_THIRDS;
        }

        NormalizedWeights {
            must_have: self.must_have / total,
            nice_to_have: self.nice_to_have / total,
            custom: self.custom / total,
        }
    }

    /// Reject negative or non-finite weights before they reach the engine
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("must_have", self.must_have),
            ("nice_to_have", self.nice_to_have),
            ("custom", self.custom),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ScorerError::Configuration(format!(
                    "Weight '{}' must be a non-negative number, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

impl std::str::FromStr for ScoringWeights {
    type Err = String;

    /// Parse `must_have,nice_to_have,custom`, e.g. `70,20,10`
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        if parts.len() != 3 {
            return Err(format!(
                "Expected three comma-separated weights (must-have,nice-to-have,custom), got '{}'",
                s
            ));
        }

        let parse = |part: &str| {
            part.parse::<f64>()
                .map_err(|e| format!("Invalid weight '{}': {}", part, e))
        };

        Ok(Self::new(parse(parts[0])?, parse(parts[1])?, parse(parts[2])?))
    }
}

impl NormalizedWeights {
    pub fn sum(&self) -> f64 {
        self.must_have + self.nice_to_have + self.custom
    }
}
