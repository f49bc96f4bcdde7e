//! Education relevance — compares the highest degree the posting asks for with the
//! highest degree the résumé shows.

use serde::{Deserialize, Serialize};

use crate::analysis::keywords::normalized_tokens;
use crate::analysis::sections::{split_sections, SectionKind};
use crate::models::document::Resume;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DegreeLevel {
    Bachelor,
    Master,
    Doctorate,
}

impl DegreeLevel {
    fn rank(self) -> f64 {
        match self {
            DegreeLevel::Bachelor => 1.0,
            DegreeLevel::Master => 2.0,
            DegreeLevel::Doctorate => 3.0,
        }
    }
}

// Matched against punctuation-stripped tokens, so "B.S." arrives as "bs" and "Ph.D." as "phd".
const DEGREE_TERMS: &[(&str, DegreeLevel)] = &[
    ("bachelor", DegreeLevel::Bachelor),
    ("bachelors", DegreeLevel::Bachelor),
    ("bsc", DegreeLevel::Bachelor),
    ("bs", DegreeLevel::Bachelor),
    ("ba", DegreeLevel::Bachelor),
    ("bba", DegreeLevel::Bachelor),
    ("beng", DegreeLevel::Bachelor),
    ("btech", DegreeLevel::Bachelor),
    ("undergraduate", DegreeLevel::Bachelor),
    ("master", DegreeLevel::Master),
    ("masters", DegreeLevel::Master),
    ("msc", DegreeLevel::Master),
    ("ms", DegreeLevel::Master),
    ("ma", DegreeLevel::Master),
    ("meng", DegreeLevel::Master),
    ("mtech", DegreeLevel::Master),
    ("mphil", DegreeLevel::Master),
    ("mba", DegreeLevel::Master),
    ("phd", DegreeLevel::Doctorate),
    ("doctorate", DegreeLevel::Doctorate),
    ("doctoral", DegreeLevel::Doctorate),
    ("dphil", DegreeLevel::Doctorate),
];

/// Highest degree level mentioned in `text`, if any.
pub fn highest_degree(text: &str) -> Option<DegreeLevel> {
    normalized_tokens(text)
        .iter()
        .filter_map(|token| {
            DEGREE_TERMS
                .iter()
                .find(|(term, _)| *term == token.as_str())
                .map(|(_, level)| *level)
        })
        .max()
}

/// Candidate degree from structured entries, else the education section, else the full text.
pub fn resume_degree(resume: &Resume) -> Option<DegreeLevel> {
    if !resume.education().is_empty() {
        return resume
            .education()
            .iter()
            .filter_map(|e| highest_degree(&e.degree))
            .max();
    }
    let sections = split_sections(resume.text());
    highest_degree(
        sections
            .get(SectionKind::Education)
            .unwrap_or(resume.text()),
    )
}

/// 100 when nothing is required or the requirement is met, otherwise proportional to rank.
pub fn education_score(required: Option<DegreeLevel>, candidate: Option<DegreeLevel>) -> f64 {
    match (required, candidate) {
        (None, _) => 100.0,
        (Some(_), None) => 0.0,
        (Some(req), Some(have)) if have >= req => 100.0,
        (Some(req), Some(have)) => 100.0 * have.rank() / req.rank(),
    }
}
