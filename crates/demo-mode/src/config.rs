//! Demo mode configuration
//!
//! Loaded from TOML; every key is optional.
//!
//! ```toml
//! poll_interval_ms = 1000
//! demo_notice = "This job contains pre-computed results used to demo GenePattern functionality."
//! no_match_prompt = "You are running in demo mode and ..."
//! ```

use demo_intercept::{InterceptMessages, DEFAULT_DEMO_NOTICE, DEFAULT_NO_MATCH_PROMPT};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::error::ConfigError;

/// Session configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Discovery scan period in milliseconds
    pub poll_interval_ms: u64,
    /// Notice posted on substituted job views
    pub demo_notice: String,
    /// Question asked when no demo job matches
    pub no_match_prompt: String,
}

impl DemoConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With scan period
    ///
    /// Sub-millisecond remainders round up, so only `Duration::ZERO` yields a
    /// zero interval.
    #[inline]
    #[must_use]
    pub fn with_poll_interval(mut self, period: Duration) -> Self {
        let millis = period.as_nanos().div_ceil(1_000_000);
        self.poll_interval_ms = u64::try_from(millis).unwrap_or(u64::MAX);
        self
    }

    /// With substituted-job notice
    #[inline]
    #[must_use]
    pub fn with_demo_notice(mut self, notice: impl Into<String>) -> Self {
        self.demo_notice = notice.into();
        self
    }

    /// With no-match confirmation text
    #[inline]
    #[must_use]
    pub fn with_no_match_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.no_match_prompt = prompt.into();
        self
    }

    /// Scan period
    #[inline]
    #[must_use]
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    /// User-facing texts for the interceptor
    #[must_use]
    pub fn messages(&self) -> InterceptMessages {
        InterceptMessages {
            demo_notice: self.demo_notice.clone(),
            no_match_prompt: self.no_match_prompt.clone(),
        }
    }

    /// Check value ranges
    ///
    /// # Errors
    /// - `ConfigError::Invalid` for a zero scan period
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.poll_interval_ms == 0 {
            return Err(ConfigError::Invalid {
                field: "poll_interval_ms",
                reason: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }

    /// Parse and validate TOML
    ///
    /// # Errors
    /// - `ConfigError::Parse` for malformed TOML
    /// - `ConfigError::Invalid` for out-of-range values
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file
    ///
    /// # Errors
    /// - `ConfigError::Io` if the file cannot be read
    /// - see [`from_toml_str`](Self::from_toml_str)
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: 1000,
            demo_notice: DEFAULT_DEMO_NOTICE.to_string(),
            no_match_prompt: DEFAULT_NO_MATCH_PROMPT.to_string(),
        }
    }
}
