//! Process-scoped demo job registry
//!
//! Constructed once per session and replaced wholesale through
//! [`JobRegistry::set_jobs`]; readers take an `Arc` snapshot and iterate it
//! without holding the lock.

use parking_lot::RwLock;
use std::path::Path;
use std::sync::Arc;

use crate::error::RegistryError;
use crate::matcher;
use crate::params::CanonicalParams;
use crate::types::{DemoJob, JobHandle};

/// Current set of demo jobs
#[derive(Debug, Default)]
pub struct JobRegistry {
    jobs: RwLock<Arc<Vec<DemoJob>>>,
}

impl JobRegistry {
    /// Create empty registry
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create registry holding `jobs`
    #[must_use]
    pub fn with_jobs(jobs: Vec<DemoJob>) -> Self {
        Self {
            jobs: RwLock::new(Arc::new(jobs)),
        }
    }

    /// Parse the registry load format: a JSON array of `{name, params, job}`
    ///
    /// # Errors
    /// - `RegistryError::Parse` if the payload is malformed
    pub fn from_json_str(payload: &str) -> Result<Self, RegistryError> {
        let jobs: Vec<DemoJob> = serde_json::from_str(payload)?;
        Ok(Self::with_jobs(jobs))
    }

    /// Read and parse a registry file
    ///
    /// # Errors
    /// - `RegistryError::Io` if the file cannot be read
    /// - `RegistryError::Parse` if its content is malformed
    pub fn load_json_file(path: impl AsRef<Path>) -> Result<Self, RegistryError> {
        let path = path.as_ref();
        let payload = std::fs::read_to_string(path).map_err(|source| RegistryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&payload)
    }

    /// Replace every job; last writer wins
    pub fn set_jobs(&self, jobs: Vec<DemoJob>) {
        let count = jobs.len();
        *self.jobs.write() = Arc::new(jobs);
        tracing::info!("Demo job registry replaced: {} jobs", count);
    }

    /// Snapshot of the current jobs
    #[inline]
    #[must_use]
    pub fn all_jobs(&self) -> Arc<Vec<DemoJob>> {
        self.jobs.read().clone()
    }

    /// Number of jobs
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.jobs.read().len()
    }

    /// Check if no jobs are registered
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.jobs.read().is_empty()
    }

    /// Serialize the current jobs in the registry load format
    ///
    /// # Errors
    /// - `RegistryError::Parse` if a job cannot be serialized
    pub fn to_json(&self) -> Result<String, RegistryError> {
        Ok(serde_json::to_string(self.all_jobs().as_slice())?)
    }

    /// Find the cached job for a submit attempt
    #[must_use]
    pub fn find_match(&self, task_name: &str, params: &CanonicalParams) -> Option<JobHandle> {
        let jobs = self.all_jobs();
        let matched = matcher::find_match(&jobs, task_name, params).cloned();
        tracing::debug!(
            "Demo match for {}: {}",
            task_name,
            matched
                .as_ref()
                .map_or_else(|| "none".to_string(), ToString::to_string)
        );
        matched
    }
}
