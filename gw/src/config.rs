//! GasWatch configuration types and loading
//!
//! Every field has a default, so a run needs no config file except to set the
//! webhook URL.

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main GasWatch configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Tracked repository and commit API
    pub github: GithubConfig,

    /// Webhook delivery
    pub notify: NotifyConfig,

    /// Gas price reference data
    pub gas: GasConfig,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[serde(rename = "log-level")]
    pub log_level: Option<String>,
}

impl Config {
    /// Validate configuration before use
    pub fn validate(&self) -> Result<()> {
        if self.notify.webhook_url.trim().is_empty() {
            return Err(eyre::eyre!("Webhook URL not set. Set notify.webhook-url in the config file."));
        }
        if self.github.lookback_hours == 0 {
            return Err(eyre::eyre!("github.lookback-hours must be greater than zero"));
        }
        if self.notify.timeout_ms == 0 {
            return Err(eyre::eyre!("notify.timeout-ms must be greater than zero"));
        }
        Ok(())
    }

    /// Load configuration with fallback chain
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        // If explicit config path provided, try to load it
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        for candidate in Self::default_paths() {
            if candidate.exists() {
                match Self::load_from_file(&candidate) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        tracing::warn!("Failed to load config from {}: {}", candidate.display(), e);
                    }
                }
            }
        }

        // No config file found, use defaults
        tracing::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Read only the log level, before logging is set up
    ///
    /// Errors are ignored here; `load` reports them once logging is running.
    pub fn load_log_level(config_path: Option<&PathBuf>) -> Option<String> {
        let path = match config_path {
            Some(p) => p.clone(),
            None => Self::default_paths().into_iter().find(|p| p.exists())?,
        };
        let content = fs::read_to_string(path).ok()?;
        let config: Self = serde_yaml::from_str(&content).ok()?;
        config.log_level
    }

    /// Project-local `.gaswatch.yml`, then `~/.config/gaswatch/gaswatch.yml`
    fn default_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(".gaswatch.yml")];
        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("gaswatch").join("gaswatch.yml"));
        }
        paths
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;

        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;

        tracing::info!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }
}

/// Tracked repository configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GithubConfig {
    /// REST API base URL
    #[serde(rename = "api-base-url")]
    pub api_base_url: String,

    /// Repository owner
    pub owner: String,

    /// Repository name
    pub repo: String,

    /// Web URL prefix for commit links in reports
    #[serde(rename = "commit-base-url")]
    pub commit_base_url: String,

    /// User-Agent sent with every API request
    #[serde(rename = "user-agent")]
    pub user_agent: String,

    /// Look-back window in hours
    #[serde(rename = "lookback-hours")]
    pub lookback_hours: u32,

    /// Cap on concurrent commit detail fetches (unset = no cap)
    #[serde(rename = "max-concurrent-fetches")]
    pub max_concurrent_fetches: Option<usize>,
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            api_base_url: "https://api.github.com".to_string(),
            owner: "cosmos".to_string(),
            repo: "chain-registry".to_string(),
            commit_base_url: "https://github.com/cosmos/chain-registry/commit".to_string(),
            user_agent: format!("gaswatch/{}", env!("CARGO_PKG_VERSION")),
            lookback_hours: 6,
            max_concurrent_fetches: None,
        }
    }
}

/// Webhook configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NotifyConfig {
    /// Incoming webhook URL
    #[serde(rename = "webhook-url")]
    pub webhook_url: String,

    /// Request timeout in milliseconds
    #[serde(rename = "timeout-ms")]
    pub timeout_ms: u64,
}

impl Default for NotifyConfig {
    fn default() -> Self {
        Self {
            webhook_url: String::new(),
            timeout_ms: 3_000,
        }
    }
}

/// Gas price reference configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GasConfig {
    /// URL of the chain -> {low, average, high} JSON document
    #[serde(rename = "prices-url")]
    pub prices_url: String,
}

impl Default for GasConfig {
    fn default() -> Self {
        Self {
            prices_url: "https://assets.leapwallet.io/cosmos-registry/v1/gas/gas-prices.json".to_string(),
        }
    }
}
