use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::matching::pipeline::DEFAULT_MATCH_LIMIT;

const DEFAULT_LLM_API_URL: &str = "https://openrouter.ai/api/v1/chat/completions";
const DEFAULT_LLM_MODEL: &str = "mistralai/mistral-7b-instruct:free";

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub db_max_connections: u32,
    pub llm: LlmSettings,
    /// Number of ranked matches returned per request.
    pub match_limit: usize,
    pub port: u16,
    pub rust_log: String,
}

/// Settings for the remote text-completion service used to score matches.
#[derive(Debug, Clone)]
pub struct LlmSettings {
    /// `None` disables remote scoring; every job is scored heuristically.
    pub api_key: Option<String>,
    pub api_url: String,
    pub model: String,
    pub timeout: Duration,
    pub max_retries: u32,
    pub site_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            db_max_connections: parse_env("DB_MAX_CONNECTIONS", 10)?,
            llm: LlmSettings {
                api_key: std::env::var("OPENROUTER_API_KEY")
                    .ok()
                    .filter(|key| !key.trim().is_empty()),
                api_url: env_or("LLM_API_URL", DEFAULT_LLM_API_URL),
                model: env_or("LLM_MODEL", DEFAULT_LLM_MODEL),
                timeout: Duration::from_secs(parse_env("LLM_TIMEOUT_SECS", 20)?),
                max_retries: parse_env("LLM_MAX_RETRIES", 1)?,
                site_url: env_or("SITE_URL", "http://localhost:3000"),
            },
            match_limit: parse_env("MATCH_LIMIT", DEFAULT_MATCH_LIMIT)?,
            port: parse_env("PORT", 8080)?,
            rust_log: env_or("RUST_LOG", "info"),
        })
    }
}

impl LlmSettings {
    /// Settings pointing at a local stub endpoint.
    #[cfg(test)]
    pub fn for_endpoint(api_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            api_key: Some("test-key".to_string()),
            api_url: api_url.into(),
            model: DEFAULT_LLM_MODEL.to_string(),
            timeout,
            max_retries: 1,
            site_url: "http://localhost:3000".to_string(),
        }
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        Err(_) => Ok(default),
    }
}
