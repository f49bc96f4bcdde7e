use serde::{Deserialize, Serialize};

/// Qualitative weight attached to a required skill.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Importance {
    High,
    #[default]
    Medium,
    Low,
}

impl Importance {
    /// Requirement level used when a required skill carries no explicit proficiency.
    pub fn default_requirement(self) -> f64 {
        match self {
            Importance::High => 90.0,
            Importance::Medium => 70.0,
            Importance::Low => 50.0,
        }
    }

    /// Relative weight of a requirement when averaging skill coverage.
    pub fn weight(self) -> f64 {
        match self {
            Importance::High => 3.0,
            Importance::Medium => 2.0,
            Importance::Low => 1.0,
        }
    }
}

/// A named skill. On the résumé side `proficiency` is the candidate's level;
/// on the job side it is the required level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillRecord {
    pub name: String,
    #[serde(default)]
    pub importance: Importance,
    /// 0 – 100
    #[serde(default)]
    pub proficiency: Option<f64>,
}

impl SkillRecord {
    pub fn new(name: impl Into<String>, importance: Importance) -> Self {
        Self {
            name: name.into(),
            importance,
            proficiency: None,
        }
    }

    pub fn with_proficiency(mut self, proficiency: f64) -> Self {
        self.proficiency = Some(proficiency);
        self
    }

    /// Lower-cased, trimmed name used for pairing résumé and job skills.
    pub fn key(&self) -> String {
        self.name.trim().to_lowercase()
    }
}
