use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{ensure, Context, Result};

use crate::recommendation::ranker::EngineConfig;

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// JSON candidate list to serve instead of the bundled one.
    pub catalog_path: Option<PathBuf>,
    pub engine: EngineConfig,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = EngineConfig::default();

        let engine = EngineConfig {
            completion_gate: parse_or(&lookup, "MATCH_COMPLETION_GATE", defaults.completion_gate)?,
            min_match_score: parse_or(&lookup, "MATCH_MIN_SCORE", defaults.min_match_score)?,
            display_floor: parse_or(&lookup, "MATCH_DISPLAY_FLOOR", defaults.display_floor)?,
            weights: defaults.weights,
        };
        ensure!(
            engine.completion_gate <= 100,
            "MATCH_COMPLETION_GATE must be between 0 and 100"
        );
        ensure!(
            engine.min_match_score <= 100 && engine.display_floor <= 100,
            "MATCH_MIN_SCORE and MATCH_DISPLAY_FLOOR must be between 0 and 100"
        );

        Ok(Config {
            port: parse_or(&lookup, "PORT", 8080)?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            catalog_path: lookup("CATALOG_PATH")
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
            engine,
        })
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        None => Ok(default),
    }
}
