use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable is optional; command-line flags override what is loaded here.
#[derive(Debug, Clone)]
pub struct Config {
    /// Fixed seed for reproducible runs. `None` seeds from entropy.
    pub seed: Option<u64>,
    /// Whether the scorer adds its random 0–4 point term.
    pub score_jitter: bool,
    pub export_dir: PathBuf,
    pub rust_log: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            score_jitter: true,
            export_dir: PathBuf::from("."),
            rust_log: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            seed: optional_env("RANKER_SEED")
                .map(|v| v.parse::<u64>())
                .transpose()
                .context("RANKER_SEED must be an unsigned integer")?,
            score_jitter: optional_env("RANKER_SCORE_JITTER")
                .map(|v| parse_bool(&v))
                .transpose()
                .context("RANKER_SCORE_JITTER must be true or false")?
                .unwrap_or(true),
            export_dir: optional_env("RANKER_EXPORT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(".")),
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_bool(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => anyhow::bail!("invalid boolean '{other}'"),
    }
}
