use anyhow::{Context, Result};

use crate::matching::skills::SkillVocabulary;

/// Application configuration loaded from environment variables.
/// Every variable has a default; invalid values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub cors_allowed_origin: String,
    pub skill_vocabulary: SkillVocabulary,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let skill_vocabulary = match optional_env("SKILL_VOCABULARY") {
            Some(raw) => parse_vocabulary(&raw)?,
            None => SkillVocabulary::default(),
        };

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            cors_allowed_origin: optional_env("CORS_ALLOWED_ORIGIN")
                .unwrap_or_else(|| "http://localhost:3000".to_string()),
            skill_vocabulary,
        })
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_vocabulary(raw: &str) -> Result<SkillVocabulary> {
    let vocabulary = SkillVocabulary::parse_list(raw);
    anyhow::ensure!(
        !vocabulary.is_empty(),
        "SKILL_VOCABULARY must contain at least one non-empty term"
    );
    Ok(vocabulary)
}
