use anyhow::{Context, Result};

const DEFAULT_LLAMA_API_URL: &str = "https://api.llama.com/v1/chat/completions";
const DEFAULT_LLAMA_MODEL: &str = "Llama-4-Maverick-17B-128E-Instruct-FP8";

/// Application configuration loaded from environment variables.
/// Nothing is strictly required at startup: without `LLAMA_API_KEY` the
/// service still scores letters and only generation fails.
#[derive(Debug, Clone)]
pub struct Config {
    pub llama_api_key: Option<String>,
    pub llama_api_url: String,
    pub llama_model: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            llama_api_key: optional_env("LLAMA_API_KEY"),
            llama_api_url: optional_env("LLAMA_API_URL")
                .unwrap_or_else(|| DEFAULT_LLAMA_API_URL.to_string()),
            llama_model: optional_env("LLAMA_MODEL")
                .unwrap_or_else(|| DEFAULT_LLAMA_MODEL.to_string()),
            port: optional_env("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: optional_env("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            llama_api_key: None,
            llama_api_url: DEFAULT_LLAMA_API_URL.to_string(),
            llama_model: DEFAULT_LLAMA_MODEL.to_string(),
            port: 8080,
            rust_log: "info".to_string(),
        }
    }
}

/// Reads a variable, treating an empty value the same as an unset one.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
