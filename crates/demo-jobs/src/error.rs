//! Error types for loading demo job registries
//!
//! Matching has no error path: a missing registry, a missing live parameter
//! or a non-matching job all end in "no match".

use std::path::PathBuf;

/// Registry load errors
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// Registry payload is not a JSON array of jobs
    #[error("invalid registry payload: {0}")]
    Parse(#[from] serde_json::Error),

    /// Registry file could not be read
    #[error("cannot read registry {path}: {source}")]
    Io {
        /// File that failed
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_display() {
        let err: RegistryError = serde_json::from_str::<Vec<u8>>("{").unwrap_err().into();
        assert!(err.to_string().contains("invalid registry payload"));
    }

    #[test]
    fn io_error_names_path() {
        let err = RegistryError::Io {
            path: PathBuf::from("/missing/jobs.json"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert!(err.to_string().contains("/missing/jobs.json"));
    }
}
