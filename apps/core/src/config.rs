//! Runtime configuration read from `ATLAS_*` environment variables.
//!
//! A `.env` file in the working directory is honored (loaded by the binary
//! before `AppConfig::from_env`). Scoring weights and gates are not
//! configurable.

use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use validator::Validate;

use crate::brain::CachedAnalyzer;
use crate::error::AppError;
use crate::matching::DEFAULT_LIMIT;

pub const ENV_DEFAULT_LIMIT: &str = "ATLAS_DEFAULT_LIMIT";
pub const ENV_ANALYSIS_CACHE_SIZE: &str = "ATLAS_ANALYSIS_CACHE_SIZE";
pub const ENV_MENTOR_POOL_PATH: &str = "ATLAS_MENTOR_POOL_PATH";
pub const ENV_LOG_FORMAT: &str = "ATLAS_LOG_FORMAT";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines on stderr
    #[default]
    Pretty,
    /// Bunyan JSON records on stderr
    Json,
}

impl FromStr for LogFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(AppError::Config(format!(
                "{} must be 'pretty' or 'json', got '{}'",
                ENV_LOG_FORMAT, other
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    /// Matches returned when no limit is given
    #[validate(range(min = 1, max = 50))]
    pub default_limit: usize,
    /// Capacity of the analysis LRU cache
    #[validate(range(min = 1, max = 10000))]
    pub analysis_cache_size: usize,
    pub mentor_pool_path: Option<PathBuf>,
    pub log_format: LogFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_limit: DEFAULT_LIMIT,
            analysis_cache_size: CachedAnalyzer::DEFAULT_CAPACITY.get(),
            mentor_pool_path: None,
            log_format: LogFormat::Pretty,
        }
    }
}

fn parse_var<T: FromStr>(name: &str, raw: &str) -> Result<T, AppError> {
    raw.trim()
        .parse()
        .map_err(|_| AppError::Config(format!("{} has an invalid value '{}'", name, raw)))
}

impl AppConfig {
    /// Build from the process environment, falling back to defaults for unset variables
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_DEFAULT_LIMIT) {
            config.default_limit = parse_var(ENV_DEFAULT_LIMIT, &raw)?;
        }
        if let Some(raw) = lookup(ENV_ANALYSIS_CACHE_SIZE) {
            config.analysis_cache_size = parse_var(ENV_ANALYSIS_CACHE_SIZE, &raw)?;
        }
        if let Some(raw) = lookup(ENV_MENTOR_POOL_PATH).filter(|p| !p.trim().is_empty()) {
            config.mentor_pool_path = Some(PathBuf::from(raw.trim()));
        }
        if let Some(raw) = lookup(ENV_LOG_FORMAT) {
            config.log_format = raw.parse()?;
        }

        config
            .validate()
            .map_err(|e| AppError::Config(format!("Invalid configuration: {}", e)))?;

        Ok(config)
    }
}
