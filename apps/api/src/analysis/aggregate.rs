use serde::{Deserialize, Serialize};

use crate::analysis::error::EngineError;
use crate::models::result::{Category, CategoryScores};

/// Tolerance for the weights-sum-to-one check.
const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Weighting table for the overall score. Must sum to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryWeights {
    pub skills: f64,
    pub experience: f64,
    pub keywords: f64,
    pub education: f64,
}

impl Default for CategoryWeights {
    fn default() -> Self {
        Self {
            skills: 0.4,
            experience: 0.3,
            keywords: 0.2,
            education: 0.1,
        }
    }
}

impl CategoryWeights {
    pub fn weight(&self, category: Category) -> f64 {
        match category {
            Category::Skills => self.skills,
            Category::Experience => self.experience,
            Category::Education => self.education,
            Category::Keywords => self.keywords,
        }
    }

    pub fn sum(&self) -> f64 {
        self.skills + self.experience + self.keywords + self.education
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        for category in Category::ALL {
            let w = self.weight(category);
            if !(0.0..=1.0).contains(&w) {
                return Err(EngineError::ComputationFault(format!(
                    "weight for {} must be within [0, 1], got {w}",
                    category.label().to_lowercase()
                )));
            }
        }
        let sum = self.sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(EngineError::ComputationFault(format!(
                "category weights must sum to 1.0, got {sum}"
            )));
        }
        Ok(())
    }
}

/// Overall score: skills×w_s + experience×w_x + keywords×w_k + education×w_e, clamped to [0, 100].
pub fn aggregate(
    skills: f64,
    experience: f64,
    education: f64,
    keywords: f64,
    weights: &CategoryWeights,
) -> f64 {
    (weights.skills * skills
        + weights.experience * experience
        + weights.keywords * keywords
        + weights.education * education)
        .clamp(0.0, 100.0)
}

pub fn aggregate_scores(scores: &CategoryScores, weights: &CategoryWeights) -> f64 {
    aggregate(
        scores.skills,
        scores.experience,
        scores.education,
        scores.keywords,
        weights,
    )
}
