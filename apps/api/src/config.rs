use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Everything has a sensible default; the summarizer backend is optional
/// and condensation degrades to a pass-through without it.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Base URL of the abstractive summarization backend. When unset the
    /// condenser stage is a pass-through.
    pub summarizer_url: Option<String>,
    pub summarizer_api_key: Option<String>,
    pub enable_condensation: bool,
    /// Target length band for condensation, in words.
    pub condensation_min_words: usize,
    pub condensation_max_words: usize,
    /// Per-request processing budget for the whole pipeline.
    pub analysis_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            summarizer_url: std::env::var("SUMMARIZER_URL").ok(),
            summarizer_api_key: std::env::var("SUMMARIZER_API_KEY").ok(),
            enable_condensation: std::env::var("ENABLE_CONDENSATION")
                .map(|v| v != "false" && v != "0")
                .unwrap_or(true),
            condensation_min_words: parse_env("CONDENSATION_MIN_WORDS", 30)?,
            condensation_max_words: parse_env("CONDENSATION_MAX_WORDS", 150)?,
            analysis_timeout_secs: parse_env("ANALYSIS_TIMEOUT_SECS", 30)?,
        })
    }
}

fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> Result<T> {
    match std::env::var(key) {
        Ok(v) => v
            .parse::<T>()
            .ok()
            .with_context(|| format!("'{key}' must be a valid number")),
        Err(_) => Ok(default),
    }
}
