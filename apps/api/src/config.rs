use std::str::FromStr;

use anyhow::{anyhow, Context, Result};

use crate::analysis::aggregate::CategoryWeights;
use crate::analysis::insights::InsightThresholds;
use crate::analysis::matcher::MatchPolicy;
use crate::analysis::policy::ScoringPolicy;

const DEFAULT_MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// Application configuration loaded from environment variables.
/// Every variable is optional; malformed values abort startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub max_upload_bytes: usize,
    pub scoring: ScoringPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            rust_log: "info".to_string(),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            scoring: ScoringPolicy::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = ScoringPolicy::default();

        let scoring = ScoringPolicy {
            weights: CategoryWeights {
                skills: optional_env("WEIGHT_SKILLS", defaults.weights.skills)?,
                experience: optional_env("WEIGHT_EXPERIENCE", defaults.weights.experience)?,
                keywords: optional_env("WEIGHT_KEYWORDS", defaults.weights.keywords)?,
                education: optional_env("WEIGHT_EDUCATION", defaults.weights.education)?,
            },
            thresholds: InsightThresholds {
                strength: optional_env("STRENGTH_THRESHOLD", defaults.thresholds.strength)?,
                weakness: optional_env("WEAKNESS_THRESHOLD", defaults.thresholds.weakness)?,
            },
            match_policy: optional_env_with("KEYWORD_MATCH_POLICY", defaults.match_policy, |s| {
                MatchPolicy::from_str(s).map_err(|e| anyhow!(e))
            })?,
            listed_proficiency: optional_env("LISTED_PROFICIENCY", defaults.listed_proficiency)?,
            mentioned_proficiency: optional_env(
                "MENTIONED_PROFICIENCY",
                defaults.mentioned_proficiency,
            )?,
        };

        Ok(Config {
            port: optional_env("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            max_upload_bytes: optional_env("MAX_UPLOAD_BYTES", DEFAULT_MAX_UPLOAD_BYTES)?,
            scoring,
        })
    }
}

fn optional_env<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    optional_env_with(key, default, |s| s.parse::<T>().map_err(anyhow::Error::from))
}

fn optional_env_with<T>(key: &str, default: T, parse: impl Fn(&str) -> Result<T>) -> Result<T> {
    match std::env::var(key) {
        Ok(raw) => parse(raw.trim())
            .with_context(|| format!("Environment variable '{key}' has an invalid value '{raw}'")),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_carries_default_policy() {
        let config = Config::default();
        assert_eq!(config.port, 8080);
        assert_eq!(config.scoring, ScoringPolicy::default());
    }

    #[test]
    fn test_optional_env_falls_back_when_unset() {
        let value: f64 = optional_env("RESUMATCH_TEST_UNSET_VARIABLE", 0.25).unwrap();
        assert_eq!(value, 0.25);
    }

    #[test]
    fn test_optional_env_rejects_malformed_value() {
        std::env::set_var("RESUMATCH_TEST_BAD_FLOAT", "zero point four");
        let result: Result<f64> = optional_env("RESUMATCH_TEST_BAD_FLOAT", 0.4);
        let err = result.unwrap_err();
        assert!(format!("{err:#}").contains("RESUMATCH_TEST_BAD_FLOAT"));
    }

    #[test]
    fn test_optional_env_with_custom_parser() {
        std::env::set_var("RESUMATCH_TEST_POLICY", "exact");
        let policy = optional_env_with("RESUMATCH_TEST_POLICY", MatchPolicy::Substring, |s| {
            MatchPolicy::from_str(s).map_err(|e| anyhow!(e))
        })
        .unwrap();
        assert_eq!(policy, MatchPolicy::Exact);
    }
}
