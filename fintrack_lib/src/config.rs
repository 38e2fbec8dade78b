//! Runtime settings: an optional TOML file overlaid with `FINTRACK_*` environment variables.

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::error::FinTrackError;
use crate::validation;

pub const CONFIG_PATH_VAR: &str = "FINTRACK_CONFIG";

/// Settings shared by every command.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Overrides the `quoteSummary`/`options` API base URL.
    pub base_url: Option<String>,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
    /// Ticker used when none is given on the command line.
    pub default_ticker: String,
    /// History period used when none is given on the command line.
    pub default_period: String,
    /// Number of institutions in the ownership chart.
    pub top_holders: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout_secs: 30,
            default_ticker: "AAPL".to_string(),
            default_period: "1y".to_string(),
            top_holders: 5,
        }
    }
}

impl Settings {
    /// Loads settings from `path`, or from `$FINTRACK_CONFIG` when no path is
    /// given, then applies environment overrides. A missing file is only an
    /// error when a path was requested explicitly.
    pub fn load(path: Option<&Path>) -> Result<Self, FinTrackError> {
        let env_path = std::env::var(CONFIG_PATH_VAR).ok();
        let mut settings = match path.or(env_path.as_deref().map(Path::new)) {
            Some(p) => Self::from_file(p)?,
            None => Self::default(),
        };
        settings.apply_overrides(|key| std::env::var(key).ok());
        settings.validate()
    }

    pub fn from_file(path: &Path) -> Result<Self, FinTrackError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            FinTrackError::Config(format!("failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, FinTrackError> {
        toml::from_str(content).map_err(|e| FinTrackError::Config(e.to_string()))
    }

    /// Applies `FINTRACK_*` overrides read through `lookup`. Unparseable
    /// numeric values are ignored with a warning.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("FINTRACK_BASE_URL").filter(|v| !v.trim().is_empty()) {
            self.base_url = Some(url.trim().to_string());
        }
        if let Some(raw) = lookup("FINTRACK_TIMEOUT_SECS") {
            match raw.trim().parse::<u64>() {
                Ok(secs) => self.timeout_secs = secs,
                Err(_) => tracing::warn!("Ignoring FINTRACK_TIMEOUT_SECS={:?}: not a number", raw),
            }
        }
        if let Some(ticker) = lookup("FINTRACK_DEFAULT_TICKER").filter(|v| !v.trim().is_empty()) {
            self.default_ticker = ticker;
        }
        if let Some(period) = lookup("FINTRACK_DEFAULT_PERIOD").filter(|v| !v.trim().is_empty()) {
            self.default_period = period;
        }
        if let Some(raw) = lookup("FINTRACK_TOP_HOLDERS") {
            match raw.trim().parse::<usize>() {
                Ok(n) => self.top_holders = n,
                Err(_) => tracing::warn!("Ignoring FINTRACK_TOP_HOLDERS={:?}: not a number", raw),
            }
        }
    }

    /// Normalizes the defaults through the same validators as command-line input.
    pub fn validate(mut self) -> Result<Self, FinTrackError> {
        if self.timeout_secs == 0 {
            return Err(FinTrackError::Config(
                "timeout_secs must be greater than zero".to_string(),
            ));
        }
        self.default_ticker = validation::validate_ticker(&self.default_ticker)?;
        self.default_period = validation::validate_period(&self.default_period)?;
        self.top_holders = validation::validate_top_holders(self.top_holders)?;
        Ok(self)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
