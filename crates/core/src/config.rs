//! Resolver configuration.
//!
//! Loaded from a JSON file (by default `~/.dbscope/resolver.json`) and then
//! overridden by `DBSCOPE_*` environment variables.

use crate::error::{DbscopeError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

pub const ENV_DISABLED_PROVIDERS: &str = "DBSCOPE_DISABLED_PROVIDERS";
pub const ENV_CONSTRUCT_TIMEOUT_MS: &str = "DBSCOPE_CONSTRUCT_TIMEOUT_MS";
pub const ENV_FAILURE_POLICY: &str = "DBSCOPE_FAILURE_POLICY";

/// What to do when one provider fails to construct its file systems.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// Log the failure, record it, and keep the other providers' results.
    #[default]
    Skip,
    /// Abort the whole resolution with the failure.
    FailFast,
}

impl FromStr for FailurePolicy {
    type Err = DbscopeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "skip" => Ok(FailurePolicy::Skip),
            "fail_fast" => Ok(FailurePolicy::FailFast),
            other => Err(DbscopeError::Config(format!(
                "unknown failure policy '{other}' (expected 'skip' or 'fail_fast')"
            ))),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Provider ids that never contribute, even for supporting projects.
    pub disabled_providers: Vec<String>,
    /// Upper bound on a single provider's construction step.
    pub construct_timeout_ms: Option<u64>,
    pub failure_policy: FailurePolicy,
}

impl ResolverConfig {
    /// `~/.dbscope/resolver.json`
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".dbscope").join("resolver.json"))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Load an explicit file, or the default file when it exists, or defaults.
    /// Environment overrides are applied on top in every case.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::load(path)?,
            None => match Self::default_path() {
                Some(default) if default.is_file() => Self::load(&default)?,
                _ => Self::default(),
            },
        };
        config.apply_env()?;
        Ok(config)
    }

    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        config.apply_env()?;
        Ok(config)
    }

    pub fn apply_env(&mut self) -> Result<()> {
        self.apply_vars(|key| std::env::var(key).ok())
    }

    fn apply_vars(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(value) = lookup(ENV_DISABLED_PROVIDERS) {
            self.disabled_providers = value
                .split(',')
                .map(str::trim)
                .filter(|id| !id.is_empty())
                .map(String::from)
                .collect();
        }

        if let Some(value) = lookup(ENV_CONSTRUCT_TIMEOUT_MS) {
            let millis = value.trim().parse::<u64>().map_err(|e| {
                DbscopeError::Config(format!("{ENV_CONSTRUCT_TIMEOUT_MS}='{value}': {e}"))
            })?;
            // 0 disables the timeout
            self.construct_timeout_ms = (millis > 0).then_some(millis);
        }

        if let Some(value) = lookup(ENV_FAILURE_POLICY) {
            self.failure_policy = value.parse()?;
        }

        Ok(())
    }

    pub fn construct_timeout(&self) -> Option<Duration> {
        self.construct_timeout_ms.map(Duration::from_millis)
    }

    pub fn is_disabled(&self, provider_id: &str) -> bool {
        self.disabled_providers.iter().any(|id| id == provider_id)
    }
}
