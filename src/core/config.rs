use std::env;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{anyhow, Result};
use tracing::debug;
use validator::ValidateUrl;

pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";

/// Fixed for every request; not configurable.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub const ENV_API_URL: &str = "TICKETDASH_API_URL";
pub const ENV_LOG_DIR: &str = "TICKETDASH_LOG_DIR";

/// Process-wide configuration, built once at startup and shared read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub request_timeout: Duration,
    pub log_dir: Option<PathBuf>,
    /// `.env` file read by [`AppConfig::from_env`], if one was found.
    pub env_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            request_timeout: REQUEST_TIMEOUT,
            log_dir: None,
            env_file: None,
        }
    }
}

impl AppConfig {
    /// Loads `.env` (if any) and reads the `TICKETDASH_*` variables.
    pub fn from_env() -> Result<Self> {
        let env_file = dotenvy::dotenv().ok();
        let config = Self::from_lookup(|key| env::var(key).ok())?;
        Ok(Self { env_file, ..config })
    }

    /// Reports where settings came from. Call once tracing is installed.
    pub fn log_sources(&self) {
        if let Some(path) = &self.env_file {
            debug!("Loaded environment from {}", path.display());
        }
        debug!(api_base_url = %self.api_base_url, "Configuration ready");
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_base_url = match lookup(ENV_API_URL).filter(|v| !v.trim().is_empty()) {
            Some(raw) => normalize_base_url(&raw)?,
            None => DEFAULT_API_URL.to_string(),
        };

        let log_dir = lookup(ENV_LOG_DIR)
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            api_base_url,
            request_timeout: REQUEST_TIMEOUT,
            log_dir,
            env_file: None,
        })
    }

    /// Replace the base URL (CLI `--api-url`), with the same checks as the env path.
    pub fn with_api_base_url(mut self, raw: &str) -> Result<Self> {
        self.api_base_url = normalize_base_url(raw)?;
        Ok(self)
    }
}

fn normalize_base_url(raw: &str) -> Result<String> {
    let trimmed = raw.trim().trim_end_matches('/');

    if !trimmed.validate_url() {
        return Err(anyhow!("{} is not a valid URL: {:?}", ENV_API_URL, raw));
    }
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(anyhow!(
            "{} must use http or https, got {:?}",
            ENV_API_URL,
            raw
        ));
    }

    Ok(trimmed.to_string())
}
