//! Splits plain résumé text into sections by recognising heading lines
//! such as `EXPERIENCE`, `Education:` or `Technical Skills`.

use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Summary,
    Experience,
    Education,
    Skills,
    Other,
}

const HEADINGS: &[(&str, SectionKind)] = &[
    ("summary", SectionKind::Summary),
    ("professional summary", SectionKind::Summary),
    ("profile", SectionKind::Summary),
    ("objective", SectionKind::Summary),
    ("experience", SectionKind::Experience),
    ("work experience", SectionKind::Experience),
    ("professional experience", SectionKind::Experience),
    ("employment", SectionKind::Experience),
    ("employment history", SectionKind::Experience),
    ("work history", SectionKind::Experience),
    ("education", SectionKind::Education),
    ("academic background", SectionKind::Education),
    ("education and training", SectionKind::Education),
    ("skills", SectionKind::Skills),
    ("technical skills", SectionKind::Skills),
    ("core competencies", SectionKind::Skills),
    ("projects", SectionKind::Other),
    ("certifications", SectionKind::Other),
    ("awards", SectionKind::Other),
    ("publications", SectionKind::Other),
    ("interests", SectionKind::Other),
    ("references", SectionKind::Other),
];

/// Section bodies keyed by kind. Repeated headings of the same kind are concatenated.
#[derive(Debug, Clone, Default)]
pub struct ResumeSections {
    bodies: HashMap<SectionKind, String>,
}

impl ResumeSections {
    /// The trimmed body of a section, if present and non-empty.
    pub fn get(&self, kind: SectionKind) -> Option<&str> {
        self.bodies
            .get(&kind)
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
    }
}

fn heading_kind(line: &str) -> Option<SectionKind> {
    let normalized = line.trim().trim_end_matches(':').trim().to_lowercase();
    if normalized.is_empty() {
        return None;
    }
    HEADINGS
        .iter()
        .find(|(heading, _)| *heading == normalized)
        .map(|(_, kind)| *kind)
}

/// Text before the first recognised heading is dropped.
pub fn split_sections(text: &str) -> ResumeSections {
    let mut sections = ResumeSections::default();
    let mut current: Option<SectionKind> = None;

    for line in text.lines() {
        if let Some(kind) = heading_kind(line) {
            current = Some(kind);
            continue;
        }
        if let Some(kind) = current {
            let body = sections.bodies.entry(kind).or_default();
            body.push_str(line.trim());
            body.push('\n');
        }
    }

    sections
}
