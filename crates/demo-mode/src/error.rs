//! Error types for demo mode sessions

use demo_jobs::RegistryError;
use std::path::PathBuf;

/// Main demo mode error type
#[derive(Debug, thiserror::Error)]
pub enum DemoModeError {
    /// Registry could not be loaded or serialized
    #[error("registry error: {0}")]
    Registry(#[from] RegistryError),

    /// Configuration is invalid
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Activation requires a running tokio runtime
    #[error("activation requires a tokio runtime")]
    NoRuntime,
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML could not be parsed
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Config file could not be read
    #[error("cannot read config {path}: {source}")]
    Io {
        /// File that failed
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// A value is out of range
    #[error("invalid value for {field}: {reason}")]
    Invalid {
        /// Offending key
        field: &'static str,
        /// What is wrong with it
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_wraps() {
        let err: DemoModeError = ConfigError::Invalid {
            field: "poll_interval_ms",
            reason: "must be greater than zero".to_string(),
        }
        .into();
        assert!(err.to_string().contains("poll_interval_ms"));
    }

    #[test]
    fn no_runtime_display() {
        assert_eq!(
            DemoModeError::NoRuntime.to_string(),
            "activation requires a tokio runtime"
        );
    }
}
