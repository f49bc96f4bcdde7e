use serde::{Deserialize, Serialize};

use crate::analysis::aggregate::CategoryWeights;
use crate::analysis::error::EngineError;
use crate::analysis::insights::InsightThresholds;
use crate::analysis::matcher::MatchPolicy;

/// Tunable scoring policy. Validated once when an `Analyzer` is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringPolicy {
    pub weights: CategoryWeights,
    pub thresholds: InsightThresholds,
    pub match_policy: MatchPolicy,
    /// Résumé level assumed for a listed skill without explicit proficiency.
    pub listed_proficiency: f64,
    /// Résumé level assumed for a required skill only mentioned in the résumé text.
    pub mentioned_proficiency: f64,
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self {
            weights: CategoryWeights::default(),
            thresholds: InsightThresholds::default(),
            match_policy: MatchPolicy::default(),
            listed_proficiency: 70.0,
            mentioned_proficiency: 50.0,
        }
    }
}

impl ScoringPolicy {
    pub fn validate(&self) -> Result<(), EngineError> {
        self.weights.validate()?;
        self.thresholds.validate()?;
        for (name, value) in [
            ("listed_proficiency", self.listed_proficiency),
            ("mentioned_proficiency", self.mentioned_proficiency),
        ] {
            if !(0.0..=100.0).contains(&value) {
                return Err(EngineError::ComputationFault(format!(
                    "{name} must be within [0, 100], got {value}"
                )));
            }
        }
        Ok(())
    }
}
