use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
///
/// The LLM credential is deliberately optional: when `LLM_API_KEY` is unset
/// the service runs in template-only mode with no warning beyond the
/// informational banner on the form page.
#[derive(Debug, Clone)]
pub struct Config {
    pub llm_api_key: Option<String>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            llm_api_key: optional_env("LLM_API_KEY"),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Reads an optional environment variable, treating blank values as absent.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
