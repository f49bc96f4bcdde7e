//! Matcher — compares résumé and job keyword sets and skill lists.
//!
//! Keyword coverage = min(100, 100 × |matched| / max(1, |job keywords|)).
//! Under the default `Substring` policy a résumé keyword counts as matched when the lower-cased
//! job text contains it; `Exact` restricts this to set intersection.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::analysis::keywords::{extract_keywords, KeywordSet};
use crate::analysis::sections::{split_sections, SectionKind};
use crate::models::document::{JobPosting, Resume};
use crate::models::result::{MissingSkill, SkillComparison};
use crate::models::skill::SkillRecord;

/// Share of the experience score taken by job-title relevance when the posting has a title.
const TITLE_SHARE: f64 = 0.3;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchPolicy {
    #[default]
    Substring,
    Exact,
}

impl FromStr for MatchPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "substring" => Ok(MatchPolicy::Substring),
            "exact" => Ok(MatchPolicy::Exact),
            other => Err(format!(
                "unknown keyword match policy '{other}' (expected 'substring' or 'exact')"
            )),
        }
    }
}

impl fmt::Display for MatchPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchPolicy::Substring => write!(f, "substring"),
            MatchPolicy::Exact => write!(f, "exact"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeywordComparison {
    pub matched: KeywordSet,
    pub coverage: f64, // 0 – 100
}

/// Compares a résumé keyword set against a job keyword set.
///
/// `job_text` is the text `job` was extracted from; the substring policy searches it
/// as written (punctuation included), so "self" matches "yourself" but "nodejs" does
/// not match "Node.js". The denominator is always `|job|`.
pub fn compare_keywords(
    resume: &KeywordSet,
    job: &KeywordSet,
    job_text: &str,
    policy: MatchPolicy,
) -> KeywordComparison {
    let haystack = job_text.to_lowercase();
    let matched: KeywordSet = resume
        .iter()
        .filter(|kw| match policy {
            MatchPolicy::Exact => job.contains(kw),
            MatchPolicy::Substring => haystack.contains(kw),
        })
        .collect();

    let coverage = (100.0 * matched.len() as f64 / job.len().max(1) as f64).min(100.0);

    KeywordComparison { matched, coverage }
}

/// Output of pairing résumé skills with required skills.
#[derive(Debug, Clone, PartialEq)]
pub struct SkillLevelComparison {
    /// One entry per required skill present in the résumé, in requirement order.
    pub comparisons: Vec<SkillComparison>,
    /// Required skills absent from the résumé, in requirement order.
    pub missing: Vec<MissingSkill>,
    /// Importance-weighted coverage of the requirements, 0 – 100.
    /// `None` when nothing is required.
    pub score: Option<f64>,
}

/// Pairs skills by case-insensitive name.
///
/// Requirement level = required proficiency, else the importance default.
/// Résumé level = résumé proficiency, else `listed_proficiency`.
pub fn compare_skill_levels(
    resume_skills: &[SkillRecord],
    required_skills: &[SkillRecord],
    listed_proficiency: f64,
) -> SkillLevelComparison {
    let mut resume_levels: HashMap<String, f64> = HashMap::new();
    for skill in resume_skills {
        resume_levels
            .entry(skill.key())
            .or_insert_with(|| skill.proficiency.unwrap_or(listed_proficiency));
    }

    let mut comparisons = Vec::new();
    let mut missing = Vec::new();
    let mut seen = Vec::new();
    let mut total_weight = 0.0_f64;
    let mut earned = 0.0_f64;

    for required in required_skills {
        let key = required.key();
        if seen.contains(&key) {
            continue;
        }
        seen.push(key.clone());

        let requirement = required
            .proficiency
            .unwrap_or_else(|| required.importance.default_requirement());
        let weight = required.importance.weight();
        total_weight += weight;

        match resume_levels.get(&key) {
            Some(&level) => {
                let credit = if requirement > 0.0 {
                    (level / requirement).min(1.0)
                } else {
                    1.0
                };
                earned += weight * credit;
                comparisons.push(SkillComparison {
                    name: required.name.trim().to_string(),
                    resume_score: level,
                    job_requirement: requirement,
                });
            }
            None => missing.push(MissingSkill {
                name: required.name.trim().to_string(),
                importance: required.importance,
            }),
        }
    }

    let score = (total_weight > 0.0).then(|| (100.0 * earned / total_weight).clamp(0.0, 100.0));

    SkillLevelComparison {
        comparisons,
        missing,
        score,
    }
}

/// Returns `resume_skills` extended with every required skill that the résumé text
/// mentions as a whole term but does not list, at `mentioned_proficiency`.
pub fn with_mentioned_skills(
    resume_text: &str,
    resume_skills: &[SkillRecord],
    required_skills: &[SkillRecord],
    mentioned_proficiency: f64,
) -> Vec<SkillRecord> {
    let haystack = resume_text.to_lowercase();
    let mut skills = resume_skills.to_vec();

    for required in required_skills {
        let key = required.key();
        if skills.iter().any(|s| s.key() == key) {
            continue;
        }
        if mentions_term(&haystack, &key) {
            skills.push(
                SkillRecord::new(required.name.trim(), required.importance)
                    .with_proficiency(mentioned_proficiency),
            );
        }
    }

    skills
}

/// True when `term` occurs in `haystack` without an alphanumeric character on either side.
/// Both arguments must already be lower-cased.
fn mentions_term(haystack: &str, term: &str) -> bool {
    if term.is_empty() {
        return false;
    }
    haystack.match_indices(term).any(|(start, _)| {
        let end = start + term.len();
        let before = haystack[..start].chars().next_back();
        let after = haystack[end..].chars().next();
        !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
    })
}

/// Experience relevance, 0 – 100.
///
/// Experience text comes from structured entries, else the résumé's experience section,
/// else the whole résumé. When the posting has a title, part of the score is the
/// coverage of job-title keywords by experience titles.
pub fn experience_score(
    resume: &Resume,
    job: &JobPosting,
    job_keywords: &KeywordSet,
    policy: MatchPolicy,
) -> f64 {
    let entries = resume.experience();

    let (experience_text, titles) = if entries.is_empty() {
        let sections = split_sections(resume.text());
        let text = sections
            .get(SectionKind::Experience)
            .unwrap_or(resume.text())
            .to_string();
        // Without structured entries the section text stands in for titles too.
        (text.clone(), text)
    } else {
        let text = entries
            .iter()
            .map(|e| format!("{} {} {}", e.title, e.company, e.description))
            .collect::<Vec<_>>()
            .join("\n");
        let titles = entries
            .iter()
            .map(|e| e.title.as_str())
            .collect::<Vec<_>>()
            .join("\n");
        (text, titles)
    };

    let body = compare_keywords(
        &extract_keywords(&experience_text),
        job_keywords,
        job.text(),
        policy,
    )
    .coverage;

    let job_title = job.title().unwrap_or_default();
    let title_keywords = extract_keywords(job_title);
    if title_keywords.is_empty() {
        return body;
    }

    let title =
        compare_keywords(&extract_keywords(&titles), &title_keywords, job_title, policy).coverage;
    ((1.0 - TITLE_SHARE) * body + TITLE_SHARE * title).clamp(0.0, 100.0)
}
