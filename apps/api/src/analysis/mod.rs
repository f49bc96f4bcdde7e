//! Compatibility scoring engine: keyword extraction, matching, aggregation, insights.
//! Everything except `handlers` is pure and deterministic — no I/O, no logging, no clock.

pub mod aggregate;
pub mod education;
pub mod error;
pub mod handlers;
pub mod insights;
pub mod keywords;
pub mod matcher;
pub mod policy;
pub mod sections;

use crate::analysis::aggregate::aggregate_scores;
use crate::analysis::education::{education_score, highest_degree, resume_degree};
use crate::analysis::error::EngineError;
use crate::analysis::insights::{derive_improvements, derive_insights};
use crate::analysis::keywords::extract_keywords;
use crate::analysis::matcher::{
    compare_keywords, compare_skill_levels, experience_score, with_mentioned_skills,
};
use crate::analysis::policy::ScoringPolicy;
use crate::models::document::{JobPosting, Resume};
use crate::models::result::{CategoryScores, ComparisonResult};
use crate::models::skill::SkillRecord;

/// The scoring engine. Holds only a validated, immutable policy, so one instance
/// can be shared across any number of concurrent requests.
#[derive(Debug, Clone)]
pub struct Analyzer {
    policy: ScoringPolicy,
}

impl Analyzer {
    /// Fails with `ComputationFault` when the policy is inconsistent.
    pub fn new(policy: ScoringPolicy) -> Result<Self, EngineError> {
        policy.validate()?;
        Ok(Self { policy })
    }

    pub fn policy(&self) -> &ScoringPolicy {
        &self.policy
    }

    /// Scores raw texts with no structured résumé records.
    pub fn analyze_text(
        &self,
        resume_text: &str,
        resume_skills: &[SkillRecord],
        job_text: &str,
        job_skills: &[SkillRecord],
    ) -> Result<ComparisonResult, EngineError> {
        self.analyze(
            &Resume::new(resume_text),
            resume_skills,
            &JobPosting::new(job_text),
            job_skills,
        )
    }

    pub fn analyze(
        &self,
        resume: &Resume,
        resume_skills: &[SkillRecord],
        job: &JobPosting,
        job_skills: &[SkillRecord],
    ) -> Result<ComparisonResult, EngineError> {
        require_text("resume text", resume.text())?;
        require_text("job text", job.text())?;
        validate_skills("resume_skills", resume_skills)?;
        validate_skills("job_skills", job_skills)?;

        let policy = &self.policy;

        let resume_keywords = extract_keywords(resume.text());
        let job_keywords = extract_keywords(job.text());
        let keywords =
            compare_keywords(&resume_keywords, &job_keywords, job.text(), policy.match_policy)
                .coverage;

        let effective_skills = with_mentioned_skills(
            resume.text(),
            resume_skills,
            job_skills,
            policy.mentioned_proficiency,
        );
        let skill_levels =
            compare_skill_levels(&effective_skills, job_skills, policy.listed_proficiency);
        let skills = skill_levels.score.unwrap_or(keywords);

        let experience = experience_score(resume, job, &job_keywords, policy.match_policy);
        let education = education_score(highest_degree(job.text()), resume_degree(resume));

        let category_scores = CategoryScores {
            skills,
            experience,
            education,
            keywords,
        };
        let overall_score = aggregate_scores(&category_scores, &policy.weights);

        let insights = derive_insights(
            &category_scores,
            skill_levels.score.is_some(),
            &skill_levels.comparisons,
            &skill_levels.missing,
            &policy.thresholds,
        );
        let improvements = derive_improvements(&skill_levels.missing, &skill_levels.comparisons);

        Ok(ComparisonResult {
            overall_score,
            category_scores,
            skills_comparison: skill_levels.comparisons,
            missing_skills: skill_levels.missing,
            insights,
            improvements,
        })
    }
}

fn require_text(label: &str, text: &str) -> Result<(), EngineError> {
    if text.trim().is_empty() {
        return Err(EngineError::InvalidArgument(format!("{label} cannot be empty")));
    }
    Ok(())
}

fn validate_skills(label: &str, skills: &[SkillRecord]) -> Result<(), EngineError> {
    for (i, skill) in skills.iter().enumerate() {
        if skill.name.trim().is_empty() {
            return Err(EngineError::InvalidArgument(format!(
                "{label}[{i}] has an empty name"
            )));
        }
        if let Some(p) = skill.proficiency {
            if !(0.0..=100.0).contains(&p) {
                return Err(EngineError::InvalidArgument(format!(
                    "{label}[{i}] ({}) proficiency must be within [0, 100], got {p}",
                    skill.name
                )));
            }
        }
    }
    Ok(())
}
