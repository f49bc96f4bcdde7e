use serde::{Deserialize, Serialize};

use crate::models::skill::Importance;

/// One independently scored analysis dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Skills,
    Experience,
    Education,
    Keywords,
}

impl Category {
    /// Canonical ordering used for insights and serialization.
    pub const ALL: [Category; 4] = [
        Category::Skills,
        Category::Experience,
        Category::Education,
        Category::Keywords,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Skills => "Skills",
            Category::Experience => "Experience",
            Category::Education => "Education",
            Category::Keywords => "Keywords",
        }
    }
}

/// Per-category scores, each in [0, 100].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryScores {
    pub skills: f64,
    pub experience: f64,
    pub education: f64,
    pub keywords: f64,
}

impl CategoryScores {
    pub fn get(&self, category: Category) -> f64 {
        match category {
            Category::Skills => self.skills,
            Category::Experience => self.experience,
            Category::Education => self.education,
            Category::Keywords => self.keywords,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, f64)> + '_ {
        Category::ALL.into_iter().map(move |c| (c, self.get(c)))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillComparison {
    pub name: String,
    pub resume_score: f64,
    pub job_requirement: f64,
}

impl SkillComparison {
    pub fn meets_requirement(&self) -> bool {
        self.resume_score >= self.job_requirement
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissingSkill {
    pub name: String,
    pub importance: Importance,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightKind {
    Strength,
    Weakness,
    Improvement,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    pub kind: InsightKind,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Improvement {
    pub section: String,
    pub description: String,
    pub example: String,
}

/// Full output of one résumé / job posting analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub overall_score: f64, // 0 – 100
    pub category_scores: CategoryScores,
    pub skills_comparison: Vec<SkillComparison>,
    pub missing_skills: Vec<MissingSkill>,
    pub insights: Vec<Insight>,
    pub improvements: Vec<Improvement>,
}
