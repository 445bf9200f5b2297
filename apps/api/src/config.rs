use anyhow::{Context, Result};
use std::str::FromStr;

use crate::llm_client::{DEFAULT_BASE_URL, DEFAULT_MODEL};
use crate::weather::{DEFAULT_LATITUDE, DEFAULT_LONGITUDE, DEFAULT_WEATHER_URL};

/// Application configuration loaded from environment variables.
/// Nothing is required: a missing API key only disables the planner.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: Option<String>,
    pub gemini_model: String,
    pub gemini_base_url: String,
    pub weather_url: String,
    pub weather_latitude: f64,
    pub weather_longitude: f64,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup. `from_env` passes the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Ok(Config {
            api_key: var("API_KEY").or_else(|| var("GEMINI_API_KEY")),
            gemini_model: var("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            gemini_base_url: var("GEMINI_BASE_URL")
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            weather_url: var("WEATHER_URL").unwrap_or_else(|| DEFAULT_WEATHER_URL.to_string()),
            weather_latitude: parse_or(var("WEATHER_LATITUDE"), "WEATHER_LATITUDE", DEFAULT_LATITUDE)?,
            weather_longitude: parse_or(
                var("WEATHER_LONGITUDE"),
                "WEATHER_LONGITUDE",
                DEFAULT_LONGITUDE,
            )?,
            port: parse_or(var("PORT"), "PORT", 8080)?,
            rust_log: var("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}

fn parse_or<T>(value: Option<String>, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match value {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} has an invalid value '{raw}'")),
        None => Ok(default),
    }
}
