//! Insight and improvement generation from category scores and skill gaps.
//!
//! Insights are ordered strengths → weaknesses → improvements; within each group the
//! order follows the canonical category order or the missing-skill input order.

use serde::{Deserialize, Serialize};

use crate::analysis::error::EngineError;
use crate::models::result::{
    Category, CategoryScores, Improvement, Insight, InsightKind, MissingSkill, SkillComparison,
};
use crate::models::skill::Importance;

/// How many skills a strength/weakness insight names at most.
const MAX_NAMED_SKILLS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InsightThresholds {
    /// Category scores at or above this emit a strength.
    pub strength: f64,
    /// Category scores strictly below this emit a weakness.
    pub weakness: f64,
}

impl Default for InsightThresholds {
    fn default() -> Self {
        Self {
            strength: 80.0,
            weakness: 50.0,
        }
    }
}

impl InsightThresholds {
    pub fn validate(&self) -> Result<(), EngineError> {
        for (name, value) in [("strength", self.strength), ("weakness", self.weakness)] {
            if !(0.0..=100.0).contains(&value) {
                return Err(EngineError::ComputationFault(format!(
                    "{name} threshold must be within [0, 100], got {value}"
                )));
            }
        }
        if self.weakness > self.strength {
            return Err(EngineError::ComputationFault(format!(
                "weakness threshold ({}) must not exceed strength threshold ({})",
                self.weakness, self.strength
            )));
        }
        Ok(())
    }
}

/// `skills_assessed` is false when the skills score only mirrors the keyword score;
/// the Skills category then emits no insight of its own.
pub fn derive_insights(
    scores: &CategoryScores,
    skills_assessed: bool,
    comparisons: &[SkillComparison],
    missing: &[MissingSkill],
    thresholds: &InsightThresholds,
) -> Vec<Insight> {
    let mut strengths = Vec::new();
    let mut weaknesses = Vec::new();

    for (category, score) in scores.iter() {
        if category == Category::Skills && !skills_assessed {
            continue;
        }
        if score >= thresholds.strength {
            strengths.push(strength_insight(category, score, comparisons));
        } else if score < thresholds.weakness {
            weaknesses.push(weakness_insight(category, score, comparisons, missing));
        }
    }

    let improvements = missing
        .iter()
        .filter(|m| m.importance == Importance::High)
        .map(|m| Insight {
            kind: InsightKind::Improvement,
            title: format!("Add {}", m.name),
            description: format!(
                "{} is a high-priority requirement for this role but does not appear in your résumé. \
                 If you have experience with it, add it explicitly.",
                m.name
            ),
        });

    strengths
        .into_iter()
        .chain(weaknesses)
        .chain(improvements)
        .collect()
}

fn strength_insight(category: Category, score: f64, comparisons: &[SkillComparison]) -> Insight {
    let description = match category {
        Category::Skills => {
            let met: Vec<&str> = comparisons
                .iter()
                .filter(|c| c.meets_requirement())
                .take(MAX_NAMED_SKILLS)
                .map(|c| c.name.as_str())
                .collect();
            if met.is_empty() {
                format!("Your skills align well with this role ({score:.0}/100).")
            } else {
                format!(
                    "Your skills align well with this role ({score:.0}/100), including {}.",
                    join_plain(&met)
                )
            }
        }
        Category::Experience => format!(
            "Your work history closely matches what this role describes ({score:.0}/100)."
        ),
        Category::Education => {
            format!("Your education meets the role's requirements ({score:.0}/100).")
        }
        Category::Keywords => format!(
            "Your résumé uses much of the posting's vocabulary ({score:.0}/100)."
        ),
    };

    Insight {
        kind: InsightKind::Strength,
        title: format!("Strong {} Match", category.label()),
        description,
    }
}

fn weakness_insight(
    category: Category,
    score: f64,
    comparisons: &[SkillComparison],
    missing: &[MissingSkill],
) -> Insight {
    let description = match category {
        Category::Skills => {
            let absent: Vec<&str> = missing
                .iter()
                .take(MAX_NAMED_SKILLS)
                .map(|m| m.name.as_str())
                .collect();
            let below: Vec<&str> = comparisons
                .iter()
                .filter(|c| !c.meets_requirement())
                .take(MAX_NAMED_SKILLS - absent.len())
                .map(|c| c.name.as_str())
                .collect();

            let mut gaps = Vec::new();
            if !absent.is_empty() {
                let verb = if absent.len() == 1 { "is" } else { "are" };
                gaps.push(format!("{} {verb} missing from your résumé", join_plain(&absent)));
            }
            if !below.is_empty() {
                let verb = if below.len() == 1 { "falls" } else { "fall" };
                gaps.push(format!("{} {verb} below the required level", join_plain(&below)));
            }

            if gaps.is_empty() {
                format!("Your skills cover little of what this role asks for ({score:.0}/100).")
            } else {
                format!(
                    "Your skills cover little of what this role asks for ({score:.0}/100): {}.",
                    gaps.join("; ")
                )
            }
        }
        Category::Experience => format!(
            "Your described experience overlaps little with this role's responsibilities ({score:.0}/100)."
        ),
        Category::Education => format!(
            "The role asks for a higher degree than your résumé shows ({score:.0}/100)."
        ),
        Category::Keywords => format!(
            "Few of the posting's keywords appear in your résumé ({score:.0}/100)."
        ),
    };

    Insight {
        kind: InsightKind::Weakness,
        title: format!("Limited {} Match", category.label()),
        description,
    }
}

pub fn derive_improvements(
    missing: &[MissingSkill],
    comparisons: &[SkillComparison],
) -> Vec<Improvement> {
    let mut improvements = Vec::new();

    let to_add: Vec<&str> = missing
        .iter()
        .filter(|m| matches!(m.importance, Importance::High | Importance::Medium))
        .map(|m| m.name.as_str())
        .collect();
    if !to_add.is_empty() {
        improvements.push(Improvement {
            section: "Skills Section".to_string(),
            description: "Add missing keywords that are important for this role.".to_string(),
            example: format!("Add {} to your skills section.", join_quoted(&to_add)),
        });
    }

    let below: Vec<&str> = comparisons
        .iter()
        .filter(|c| !c.meets_requirement())
        .map(|c| c.name.as_str())
        .collect();
    if !below.is_empty() {
        improvements.push(Improvement {
            section: "Experience Description".to_string(),
            description: "Show concrete depth in skills that fall below the role's expectations."
                .to_string(),
            example: format!(
                "Describe a project where you used {}, with the scope and measurable outcome.",
                join_quoted(&below)
            ),
        });
    }

    improvements
}

/// `a`, `a and b`, `a, b, and c`
fn join_plain(items: &[&str]) -> String {
    match items {
        [] => String::new(),
        [one] => one.to_string(),
        [a, b] => format!("{a} and {b}"),
        [init @ .., last] => format!("{}, and {last}", init.join(", ")),
    }
}

fn join_quoted(items: &[&str]) -> String {
    let quoted: Vec<String> = items.iter().map(|s| format!("\"{s}\"")).collect();
    let refs: Vec<&str> = quoted.iter().map(String::as_str).collect();
    join_plain(&refs)
}
