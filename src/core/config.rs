//! Client configuration: base URL, timeout, user agent and fan-out width.

use std::time::Duration;

use crate::{
    error::{NhlError, Result},
    BASE_URL_ENV_VAR, CONCURRENCY_ENV_VAR, TIMEOUT_ENV_VAR,
};


/// Public NHL stats API root.
pub const NHL_BASE_URL: &str = "https://statsapi.web.nhl.com/api/v1";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

pub const DEFAULT_CONCURRENCY: usize = 4;

/// Settings shared by every request made through a [`StatsApi`](crate::nhl::StatsApi).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// API root without trailing slash, e.g. `https://statsapi.web.nhl.com/api/v1`.
    pub base_url: String,
    /// Per-request timeout, covering connect through body read.
    pub timeout: Duration,
    pub user_agent: String,
    /// Maximum boxscores in flight during `get_games_against`.
    pub concurrency: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: NHL_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("nhl-stats/{}", env!("CARGO_PKG_VERSION")),
            concurrency: DEFAULT_CONCURRENCY,
        }
    }
}

impl ClientConfig {
    /// Default config pointed at another API root (mock servers, mirrors).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: normalize_base_url(base_url.into()),
            ..Self::default()
        }
    }

    /// Build a config from `NHL_STATS_BASE_URL`, `NHL_STATS_TIMEOUT_SECS`
    /// and `NHL_STATS_CONCURRENCY`, falling back to defaults for unset vars.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup(BASE_URL_ENV_VAR).filter(|u| !u.trim().is_empty()) {
            config.base_url = normalize_base_url(url);
        }

        if let Some(raw) = lookup(TIMEOUT_ENV_VAR) {
            let secs = parse_positive(TIMEOUT_ENV_VAR, &raw)?;
            config.timeout = Duration::from_secs(secs as u64);
        }

        if let Some(raw) = lookup(CONCURRENCY_ENV_VAR) {
            config.concurrency = parse_positive(CONCURRENCY_ENV_VAR, &raw)?;
        }

        Ok(config)
    }
}

fn normalize_base_url(url: String) -> String {
    url.trim().trim_end_matches('/').to_string()
}

fn parse_positive(key: &str, raw: &str) -> Result<usize> {
    match raw.trim().parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(NhlError::InvalidConfig {
            key: key.to_string(),
            value: raw.to_string(),
        }),
    }
}
