//! Periodic discovery of task widgets
//!
//! Every period the document is scanned for task-widget containers and each
//! bound widget is handed to [`Interceptor::wrap`]. Wrapping is idempotent,
//! so rescanning already intercepted widgets is harmless.

use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

use crate::interceptor::Interceptor;
use crate::widget::TaskDocument;

/// Default scan period
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(1000);

/// Shortest accepted scan period
pub const MIN_POLL_INTERVAL: Duration = Duration::from_millis(1);

/// Summary of one scan
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanReport {
    /// Containers found in the document
    pub containers: usize,
    /// Containers with a bound widget
    pub resolved: usize,
    /// Widgets wrapped during this scan
    pub wrapped: usize,
}

/// Recurring scan of a document
#[derive(Clone)]
pub struct DiscoveryLoop {
    document: Arc<dyn TaskDocument>,
    interceptor: Interceptor,
    period: Duration,
}

impl DiscoveryLoop {
    /// Create loop with the default period
    #[must_use]
    pub fn new(document: Arc<dyn TaskDocument>, interceptor: Interceptor) -> Self {
        Self {
            document,
            interceptor,
            period: DEFAULT_POLL_INTERVAL,
        }
    }

    /// With scan period, clamped to at least [`MIN_POLL_INTERVAL`]
    #[inline]
    #[must_use]
    pub fn with_period(mut self, period: Duration) -> Self {
        self.period = period.max(MIN_POLL_INTERVAL);
        self
    }

    /// Scan period
    #[inline]
    #[must_use]
    pub fn period(&self) -> Duration {
        self.period
    }

    /// Run one synchronous scan
    pub fn scan_once(&self) -> ScanReport {
        let mut report = ScanReport::default();
        for container in self.document.task_containers() {
            report.containers += 1;
            let Some(widget) = self.document.resolve_widget(&container) else {
                tracing::trace!("Container {} has no widget yet", container);
                continue;
            };
            report.resolved += 1;
            if self.interceptor.wrap(&widget) {
                report.wrapped += 1;
            }
        }
        if report.wrapped > 0 {
            tracing::debug!(
                "Discovery scan: {} containers, {} newly intercepted",
                report.containers,
                report.wrapped
            );
        }
        report
    }

    /// Scan forever, once per period, starting one period from now
    ///
    /// Each scan completes before the next tick is awaited, so scans never
    /// overlap; late ticks are delayed rather than bunched.
    pub async fn run(self) {
        let mut ticker = interval_at(Instant::now() + self.period, self.period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            self.scan_once();
        }
    }

    /// Spawn [`run`](Self::run) on the current tokio runtime
    ///
    /// # Panics
    /// Panics if called outside a tokio runtime.
    #[must_use]
    pub fn spawn(self) -> JoinHandle<()> {
        tokio::spawn(self.run())
    }
}

impl std::fmt::Debug for DiscoveryLoop {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiscoveryLoop")
            .field("interceptor", &self.interceptor)
            .field("period", &self.period)
            .finish_non_exhaustive()
    }
}
