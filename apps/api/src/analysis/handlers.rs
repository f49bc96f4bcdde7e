//! Axum route handlers for the Analysis API.

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use crate::analysis::error::EngineError;
use crate::analysis::keywords::extract_keywords;
use crate::analysis::policy::ScoringPolicy;
use crate::errors::AppError;
use crate::models::document::{JobPosting, Resume, ResumeProfile};
use crate::models::result::ComparisonResult;
use crate::models::skill::SkillRecord;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// Text fields are optional at the serde layer so that a missing or `null`
/// value is reported as `INVALID_ARGUMENT` rather than a generic JSON rejection.
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub resume_text: Option<String>,
    #[serde(default)]
    pub resume_skills: Vec<SkillRecord>,
    pub job_text: Option<String>,
    #[serde(default)]
    pub job_skills: Vec<SkillRecord>,
    #[serde(default)]
    pub resume_profile: ResumeProfile,
    #[serde(default)]
    pub job_title: Option<String>,
    #[serde(default)]
    pub job_company: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub analysis_id: Uuid,
    pub analyzed_at: DateTime<Utc>,
    pub result: ComparisonResult,
}

#[derive(Debug, Deserialize)]
pub struct KeywordsRequest {
    pub text: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct KeywordsResponse {
    pub keywords: Vec<String>,
    pub count: usize,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/analyze
///
/// Scores a résumé against a job posting and returns the full comparison.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let resume_text = require_field(request.resume_text, "resume_text")?;
    let job_text = require_field(request.job_text, "job_text")?;

    let resume = Resume::with_profile(resume_text, request.resume_profile);
    let job = JobPosting::with_header(job_text, request.job_title, request.job_company);

    debug!(
        resume_id = %resume.id(),
        job_id = %job.id(),
        job_title = job.title().unwrap_or("-"),
        job_company = job.company().unwrap_or("-"),
        has_contact = resume.contact().is_some(),
        resume_skills = request.resume_skills.len(),
        job_skills = request.job_skills.len(),
        "Analyzing compatibility"
    );

    let result = state
        .analyzer
        .analyze(&resume, &request.resume_skills, &job, &request.job_skills)?;

    let analysis_id = Uuid::new_v4();
    info!(
        %analysis_id,
        overall_score = result.overall_score,
        missing_skills = result.missing_skills.len(),
        "Analysis complete"
    );

    Ok(Json(AnalyzeResponse {
        analysis_id,
        analyzed_at: Utc::now(),
        result,
    }))
}

/// POST /api/v1/keywords
///
/// Returns the normalized keyword set for a text. Useful for previewing extraction.
pub async fn handle_keywords(
    Json(request): Json<KeywordsRequest>,
) -> Result<Json<KeywordsResponse>, AppError> {
    let text = require_field(request.text, "text")?;
    let keywords = extract_keywords(&text).into_vec();
    Ok(Json(KeywordsResponse {
        count: keywords.len(),
        keywords,
    }))
}

/// GET /api/v1/policy
///
/// Returns the active scoring policy (weights, thresholds, match policy).
pub async fn handle_policy(State(state): State<AppState>) -> Json<ScoringPolicy> {
    Json(state.analyzer.policy().clone())
}

fn require_field(value: Option<String>, name: &str) -> Result<String, EngineError> {
    value.ok_or_else(|| EngineError::InvalidArgument(format!("{name} is required")))
}
