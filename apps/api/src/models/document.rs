use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub title: String,
    pub company: String,
    #[serde(default)]
    pub date_range: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub institution: String,
    pub degree: String,
    #[serde(default)]
    pub date_range: String,
}

/// Structured résumé records produced by an upstream parser, if any.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResumeProfile {
    #[serde(default)]
    pub contact: Option<ContactInfo>,
    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,
    #[serde(default)]
    pub education: Vec<EducationEntry>,
}

/// A résumé document. Immutable once constructed.
#[derive(Debug, Clone)]
pub struct Resume {
    id: Uuid,
    text: String,
    profile: ResumeProfile,
}

impl Resume {
    pub fn new(text: impl Into<String>) -> Self {
        Self::with_profile(text, ResumeProfile::default())
    }

    pub fn with_profile(text: impl Into<String>, profile: ResumeProfile) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            profile,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn contact(&self) -> Option<&ContactInfo> {
        self.profile.contact.as_ref()
    }

    pub fn experience(&self) -> &[ExperienceEntry] {
        &self.profile.experience
    }

    pub fn education(&self) -> &[EducationEntry] {
        &self.profile.education
    }
}

/// A job posting document. Immutable once constructed.
#[derive(Debug, Clone)]
pub struct JobPosting {
    id: Uuid,
    title: Option<String>,
    company: Option<String>,
    text: String,
}

impl JobPosting {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: None,
            company: None,
            text: text.into(),
        }
    }

    pub fn with_header(
        text: impl Into<String>,
        title: Option<String>,
        company: Option<String>,
    ) -> Self {
        Self {
            title,
            company,
            ..Self::new(text)
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn company(&self) -> Option<&str> {
        self.company.as_deref()
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documents_get_distinct_ids() {
        let a = Resume::new("text");
        let b = Resume::new("text");
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_resume_profile_deserializes_partial() {
        let json = r#"{
            "experience": [
                {"title": "Senior Developer", "company": "ABC Tech", "description": "Built APIs"}
            ]
        }"#;
        let profile: ResumeProfile = serde_json::from_str(json).unwrap();
        assert!(profile.contact.is_none());
        assert_eq!(profile.experience.len(), 1);
        assert_eq!(profile.experience[0].date_range, "");
        assert!(profile.education.is_empty());
    }

    #[test]
    fn test_job_posting_header() {
        let job = JobPosting::with_header(
            "We need Rust",
            Some("Backend Engineer".to_string()),
            None,
        );
        assert_eq!(job.title(), Some("Backend Engineer"));
        assert_eq!(job.company(), None);
        assert_eq!(job.text(), "We need Rust");
    }
}
