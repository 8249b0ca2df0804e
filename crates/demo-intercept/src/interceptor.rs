//! Submit interception
//!
//! [`Interceptor::wrap`] installs a [`DemoSubmit`] decorator in a widget's
//! [`SubmitSlot`](crate::SubmitSlot). On submit the decorator looks for a
//! recorded job matching the widget's task name and live parameters:
//! - match: the form collapses and the cached result is rendered instead
//! - no match: the user is asked whether to submit for real

use demo_jobs::{find_match, DemoJob, JobHandle};
use std::sync::{Arc, Weak};

use crate::error::WidgetError;
use crate::extract::extract_params;
use crate::widget::{ConfirmPrompt, Submittable, TaskWidget};

/// Notice posted on a substituted job view
pub const DEFAULT_DEMO_NOTICE: &str =
    "This job contains pre-computed results used to demo GenePattern functionality.";

/// Question asked when no recorded job matches
pub const DEFAULT_NO_MATCH_PROMPT: &str = "You are running in demo mode and no demo job can be \
     found which match your inputs.\n\nWould you like to submit the job anyway?";

/// User-facing texts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterceptMessages {
    /// Posted on the rendered cached-job view
    pub demo_notice: String,
    /// Confirmation prompt when nothing matches
    pub no_match_prompt: String,
}

impl Default for InterceptMessages {
    fn default() -> Self {
        Self {
            demo_notice: DEFAULT_DEMO_NOTICE.to_string(),
            no_match_prompt: DEFAULT_NO_MATCH_PROMPT.to_string(),
        }
    }
}

/// Result of one intercepted submit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Cached job rendered, nothing submitted
    ShowedDemoJob(JobHandle),
    /// No match; user confirmed and the original submit ran
    Submitted,
    /// No match; user declined
    Declined,
}

/// Decorated submit operation installed by [`Interceptor::wrap`]
pub struct DemoSubmit {
    widget: Weak<dyn TaskWidget>,
    original: Arc<dyn Submittable>,
    jobs: Arc<Vec<DemoJob>>,
    prompt: Arc<dyn ConfirmPrompt>,
    messages: Arc<InterceptMessages>,
}

impl DemoSubmit {
    /// Run one submit attempt
    ///
    /// # Errors
    /// - `WidgetError::Detached` if the widget is gone
    /// - rendering or real-submission errors, unchanged
    pub fn run(&self) -> Result<SubmitOutcome, WidgetError> {
        let widget = self.widget.upgrade().ok_or(WidgetError::Detached)?;
        let task_name = widget.task_name();
        let params = extract_params(widget.as_ref());

        if let Some(job) = find_match(&self.jobs, &task_name, &params).cloned() {
            tracing::info!("Showing demo job {} for {}", job, task_name);
            widget.expand_collapse(false);
            let view = widget.add_job_result_view(&widget.cell(), widget.session_index(), &job)?;
            view.info_message(&self.messages.demo_notice)?;
            return Ok(SubmitOutcome::ShowedDemoJob(job));
        }

        tracing::debug!("No demo job for {} ({} params)", task_name, params.len());
        if self.prompt.confirm(&self.messages.no_match_prompt) {
            tracing::info!("Submitting {} for real", task_name);
            self.original.submit()?;
            Ok(SubmitOutcome::Submitted)
        } else {
            Ok(SubmitOutcome::Declined)
        }
    }
}

impl Submittable for DemoSubmit {
    fn submit(&self) -> Result<(), WidgetError> {
        self.run().map(|_| ())
    }
}

/// Wraps task widgets with [`DemoSubmit`]
#[derive(Clone)]
pub struct Interceptor {
    jobs: Arc<Vec<DemoJob>>,
    prompt: Arc<dyn ConfirmPrompt>,
    messages: Arc<InterceptMessages>,
}

impl Interceptor {
    /// Create interceptor matching against `jobs`
    #[must_use]
    pub fn new(jobs: Arc<Vec<DemoJob>>, prompt: Arc<dyn ConfirmPrompt>) -> Self {
        Self {
            jobs,
            prompt,
            messages: Arc::new(InterceptMessages::default()),
        }
    }

    /// With custom texts
    #[inline]
    #[must_use]
    pub fn with_messages(mut self, messages: InterceptMessages) -> Self {
        self.messages = Arc::new(messages);
        self
    }

    /// Jobs this interceptor matches against
    #[inline]
    #[must_use]
    pub fn jobs(&self) -> &[DemoJob] {
        &self.jobs
    }

    /// Build the decorator for `widget` around its `original` submit
    ///
    /// The widget is held weakly; [`wrap`](Self::wrap) installs the result in
    /// the widget's own slot.
    #[must_use]
    pub fn decorate(
        &self,
        widget: &Arc<dyn TaskWidget>,
        original: Arc<dyn Submittable>,
    ) -> DemoSubmit {
        DemoSubmit {
            widget: Arc::downgrade(widget),
            original,
            jobs: Arc::clone(&self.jobs),
            prompt: Arc::clone(&self.prompt),
            messages: Arc::clone(&self.messages),
        }
    }

    /// Install the decorator unless the widget is already intercepted
    ///
    /// Returns `true` if this call wrapped the widget.
    pub fn wrap(&self, widget: &Arc<dyn TaskWidget>) -> bool {
        let wrapped = widget
            .submit_slot()
            .intercept_with(|original| Arc::new(self.decorate(widget, original)));
        if wrapped {
            tracing::debug!("Intercepted submit of {}", widget.task_name());
        }
        wrapped
    }
}

impl std::fmt::Debug for Interceptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Interceptor")
            .field("jobs", &self.jobs.len())
            .field("messages", &self.messages)
            .finish_non_exhaustive()
    }
}
