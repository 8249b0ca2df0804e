//! Demo mode session
//!
//! Owns the job registry and at most one running discovery loop.
//! Activation snapshots the registry: widgets intercepted by a loop keep
//! matching against the jobs that were current when that loop started.

use demo_intercept::{
    extract_params, ConfirmPrompt, DiscoveryLoop, Interceptor, ScanReport, TaskDocument,
    TaskWidget,
};
use demo_jobs::{DemoJob, JobHandle, JobRegistry};
use parking_lot::Mutex;
use std::path::Path;
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::config::DemoConfig;
use crate::error::DemoModeError;

/// Demo mode for one notebook session
#[derive(Debug)]
pub struct DemoMode {
    registry: Arc<JobRegistry>,
    config: DemoConfig,
    active: Mutex<Option<JoinHandle<()>>>,
}

impl DemoMode {
    /// Create session with an empty registry
    #[must_use]
    pub fn new(config: DemoConfig) -> Self {
        Self::with_registry(config, Arc::new(JobRegistry::new()))
    }

    /// Create session around an existing registry
    #[must_use]
    pub fn with_registry(config: DemoConfig, registry: Arc<JobRegistry>) -> Self {
        Self {
            registry,
            config,
            active: Mutex::new(None),
        }
    }

    /// Session configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &DemoConfig {
        &self.config
    }

    /// Session registry
    #[inline]
    #[must_use]
    pub fn registry(&self) -> &Arc<JobRegistry> {
        &self.registry
    }

    /// Replace every demo job
    pub fn set_jobs(&self, jobs: Vec<DemoJob>) {
        self.registry.set_jobs(jobs);
    }

    /// Replace every demo job from a registry file; returns the job count
    ///
    /// # Errors
    /// - `DemoModeError::Registry` if the file cannot be read or parsed
    pub fn load_jobs_file(&self, path: impl AsRef<Path>) -> Result<usize, DemoModeError> {
        let loaded = JobRegistry::load_json_file(path)?;
        let jobs = loaded.all_jobs().to_vec();
        let count = jobs.len();
        self.registry.set_jobs(jobs);
        Ok(count)
    }

    /// Serialized registry payload
    ///
    /// # Errors
    /// - `DemoModeError::Registry` if serialization fails
    pub fn jobs_json(&self) -> Result<String, DemoModeError> {
        Ok(self.registry.to_json()?)
    }

    /// Match a widget's current state without touching it
    #[must_use]
    pub fn check(&self, widget: &dyn TaskWidget) -> Option<JobHandle> {
        let params = extract_params(widget);
        self.registry.find_match(&widget.task_name(), &params)
    }

    /// Start intercepting task widgets found in `document`
    ///
    /// Takes a snapshot of the registry and starts a discovery loop on the
    /// current tokio runtime. A loop started by an earlier activation is
    /// replaced.
    ///
    /// # Errors
    /// - `DemoModeError::Config` if the session configuration is invalid
    /// - `DemoModeError::NoRuntime` outside a tokio runtime
    pub fn activate(
        &self,
        document: Arc<dyn TaskDocument>,
        prompt: Arc<dyn ConfirmPrompt>,
    ) -> Result<ActivationHandle, DemoModeError> {
        self.config.validate()?;
        let runtime = Handle::try_current().map_err(|_| DemoModeError::NoRuntime)?;
        let jobs = self.registry.all_jobs();

        let interceptor =
            Interceptor::new(Arc::clone(&jobs), prompt).with_messages(self.config.messages());
        let discovery =
            DiscoveryLoop::new(document, interceptor).with_period(self.config.poll_interval());

        let task = runtime.spawn(discovery.clone().run());
        if let Some(previous) = self.active.lock().replace(task) {
            previous.abort();
            tracing::info!("Demo mode re-activated; previous discovery loop replaced");
        }
        tracing::info!(
            "Demo mode active: {} jobs, scanning every {:?}",
            jobs.len(),
            discovery.period()
        );

        Ok(ActivationHandle { jobs: jobs.len(), discovery })
    }

    /// Check whether a discovery loop is running
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
            .lock()
            .as_ref()
            .is_some_and(|task| !task.is_finished())
    }
}

impl Default for DemoMode {
    fn default() -> Self {
        Self::new(DemoConfig::default())
    }
}

/// Returned by [`DemoMode::activate`]
#[derive(Debug, Clone)]
pub struct ActivationHandle {
    jobs: usize,
    discovery: DiscoveryLoop,
}

impl ActivationHandle {
    /// Number of jobs in the activated snapshot
    #[inline]
    #[must_use]
    pub fn job_count(&self) -> usize {
        self.jobs
    }

    /// Run a scan immediately instead of waiting for the next period
    pub fn scan_now(&self) -> ScanReport {
        self.discovery.scan_once()
    }
}
