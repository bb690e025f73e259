#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{
    sync::{Arc, Mutex, OnceLock},
    time::Duration,
};

use anyhow::{Context, Result};
use reqwest::blocking::Client;

use crate::constants::{DEFAULT_FETCH_TIMEOUT_SECS, FETCH_TIMEOUT_ENV, USER_AGENT_ENV};

/// Runtime configuration shared across the crate.
pub struct ConfigState {
    /// Shared blocking HTTP client used to fetch submissions.
    http_client:   Client,
    /// Upper bound on a single fetch.
    fetch_timeout: Duration,
    /// User agent sent to the hosting provider.
    user_agent:    String,
}

impl ConfigState {
    /// Construct a new configuration instance from the environment.
    fn new() -> Result<Self> {
        let fetch_timeout = read_timeout_secs(FETCH_TIMEOUT_ENV, DEFAULT_FETCH_TIMEOUT_SECS);
        let user_agent = user_agent_or_default(std::env::var(USER_AGENT_ENV).ok().as_deref());

        Self::with_settings(fetch_timeout, user_agent)
    }

    /// Construct a configuration with explicit settings instead of reading
    /// the environment.
    pub fn with_settings(fetch_timeout: Duration, user_agent: impl Into<String>) -> Result<Self> {
        let user_agent = user_agent.into();
        let http_client = Client::builder()
            .timeout(fetch_timeout)
            .user_agent(user_agent.clone())
            .build()
            .context("Failed to construct shared HTTP client")?;

        Ok(Self {
            http_client,
            fetch_timeout,
            user_agent,
        })
    }

    /// Returns a clone of the shared HTTP client.
    pub fn http_client(&self) -> Client {
        self.http_client.clone()
    }

    /// Returns the fetch timeout.
    pub fn fetch_timeout(&self) -> Duration {
        self.fetch_timeout
    }

    /// Returns the configured user agent.
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

/// Shared configuration handle used throughout the crate.
#[derive(Clone)]
pub struct ConfigHandle(Arc<ConfigState>);

impl ConfigHandle {
    /// Wraps an explicitly built configuration.
    pub fn new(state: ConfigState) -> Self {
        Self(Arc::new(state))
    }
}

impl std::ops::Deref for ConfigHandle {
    type Target = ConfigState;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Global storage for the lazily constructed configuration state.
static CONFIG_SLOT: OnceLock<Mutex<Option<Arc<ConfigState>>>> = OnceLock::new();

/// Returns the mutex guarding the global configuration slot.
fn slot() -> &'static Mutex<Option<Arc<ConfigState>>> {
    CONFIG_SLOT.get_or_init(|| Mutex::new(None))
}

/// Ensure the global configuration has been initialized and return a handle.
pub fn ensure_initialized() -> Result<ConfigHandle> {
    let mut guard = slot()
        .lock()
        .map_err(|_| anyhow::anyhow!("config slot poisoned"))?;
    if let Some(cfg) = guard.as_ref() {
        return Ok(ConfigHandle(Arc::clone(cfg)));
    }

    let cfg = Arc::new(ConfigState::new()?);
    *guard = Some(Arc::clone(&cfg));
    Ok(ConfigHandle(cfg))
}

/// `spacegrade/<version>`.
fn default_user_agent() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}

/// Parses an environment variable into a `Duration`, falling back to
/// `default_secs` when parsing fails or the variable is missing.
fn read_timeout_secs(env: &str, default_secs: u64) -> Duration {
    parse_timeout_secs(std::env::var(env).ok().as_deref(), default_secs)
}

/// Whole seconds from `raw`; zero, garbage and absence all mean `default_secs`.
fn parse_timeout_secs(raw: Option<&str>, default_secs: u64) -> Duration {
    raw.and_then(|value| value.trim().parse::<u64>().ok())
        .filter(|secs| *secs > 0)
        .map(Duration::from_secs)
        .unwrap_or_else(|| Duration::from_secs(default_secs))
}

/// The trimmed override, or `spacegrade/<version>` when it is blank or unset.
fn user_agent_or_default(raw: Option<&str>) -> String {
    raw.map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_owned)
        .unwrap_or_else(default_user_agent)
}
