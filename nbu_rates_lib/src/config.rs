//! Runtime configuration: endpoint, timeout and default currency.

use std::time::Duration;

use nbu_api::Client;

use crate::error::NbuRatesError;
use crate::validation::validate_base_url;

/// Environment variable overriding the exchange endpoint URL.
pub const BASE_URL_ENV: &str = "NBU_BASE_URL";
/// Environment variable overriding the request timeout, in seconds.
pub const TIMEOUT_ENV: &str = "NBU_TIMEOUT_SECS";
/// Currency charted when none is requested.
pub const DEFAULT_CURRENCY: &str = "USD";

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: nbu_api::DEFAULT_BASE_URL.to_string(),
            timeout: nbu_api::REQUEST_TIMEOUT,
        }
    }
}

impl Config {
    /// Loads `.env` when present, then reads the process environment.
    pub fn from_env() -> Result<Self, NbuRatesError> {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!("loaded environment from {}", path.display());
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup. An unset or unparsable
    /// timeout falls back to the default; a set base URL must be http(s).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, NbuRatesError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let base_url = lookup(BASE_URL_ENV)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(|v| validate_base_url(&v))
            .transpose()?
            .unwrap_or(defaults.base_url);
        let timeout = lookup(TIMEOUT_ENV)
            .and_then(|v| v.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
            .unwrap_or(defaults.timeout);
        Ok(Self { base_url, timeout })
    }

    /// Builds the API client for this configuration.
    pub fn client(&self) -> Result<Client, NbuRatesError> {
        Ok(Client::with_timeout(&self.base_url, self.timeout)?)
    }
}
