//! Testing utilities for the demo mode workspace
//!
//! In-memory stand-ins for the widget framework: widgets, job views,
//! documents, prompts and a submitter that counts real submissions.

#![allow(missing_docs)]

use demo_intercept::{
    CellRef, ConfirmPrompt, ContainerId, JobResultView, ParamControl, SubmitSlot, Submittable,
    TaskDocument, TaskWidget, WidgetError,
};
use demo_jobs::{DemoJob, JobHandle, UiValue};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

/// Counts real submissions; optionally fails them
#[derive(Debug, Default)]
pub struct RecordingSubmitter {
    calls: AtomicUsize,
    fail: AtomicBool,
}

impl RecordingSubmitter {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn fail_with_error(&self) {
        self.fail.store(true, Ordering::SeqCst);
    }
}

impl Submittable for RecordingSubmitter {
    fn submit(&self) -> Result<(), WidgetError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail.load(Ordering::SeqCst) {
            return Err(WidgetError::framework("remote submission rejected"));
        }
        Ok(())
    }
}

/// Prompt answering with a fixed choice and remembering what it was asked
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    answer: AtomicBool,
    asked: Mutex<Vec<String>>,
}

impl ScriptedPrompt {
    pub fn answering(answer: bool) -> Arc<Self> {
        Arc::new(Self {
            answer: AtomicBool::new(answer),
            asked: Mutex::new(Vec::new()),
        })
    }

    pub fn asked(&self) -> Vec<String> {
        self.asked.lock().clone()
    }
}

impl ConfirmPrompt for ScriptedPrompt {
    fn confirm(&self, message: &str) -> bool {
        self.asked.lock().push(message.to_string());
        self.answer.load(Ordering::SeqCst)
    }
}

/// Rendered job-result view
#[derive(Debug)]
pub struct FakeJobView {
    pub cell: CellRef,
    pub session_index: usize,
    pub job: JobHandle,
    messages: Mutex<Vec<String>>,
}

impl FakeJobView {
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().clone()
    }
}

impl JobResultView for FakeJobView {
    fn info_message(&self, message: &str) -> Result<(), WidgetError> {
        self.messages.lock().push(message.to_string());
        Ok(())
    }
}

#[derive(Debug, Clone)]
struct FakeControl {
    control: ParamControl,
    name: String,
    value: Option<UiValue>,
}

/// Task widget with scripted controls
#[derive(Debug)]
pub struct FakeWidget {
    task: String,
    controls: Mutex<Vec<FakeControl>>,
    cell: CellRef,
    session_index: usize,
    expand_calls: Mutex<Vec<bool>>,
    views: Mutex<Vec<Arc<FakeJobView>>>,
    fail_render: AtomicBool,
    submitter: Arc<RecordingSubmitter>,
    slot: SubmitSlot,
}

impl FakeWidget {
    pub fn new(task: &str) -> Self {
        let submitter = RecordingSubmitter::new();
        Self {
            task: task.to_string(),
            controls: Mutex::new(Vec::new()),
            cell: CellRef(format!("cell-{task}")),
            session_index: 0,
            expand_calls: Mutex::new(Vec::new()),
            views: Mutex::new(Vec::new()),
            fail_render: AtomicBool::new(false),
            slot: SubmitSlot::new(submitter.clone()),
            submitter,
        }
    }

    pub fn with_session_index(mut self, index: usize) -> Self {
        self.session_index = index;
        self
    }

    pub fn with_text(self, name: &str, value: impl Into<UiValue>) -> Self {
        self.push(ParamControl::text(name), name, Some(value.into()))
    }

    pub fn with_file(self, name: &str, value: impl Into<UiValue>) -> Self {
        self.push(ParamControl::file(name), name, Some(value.into()))
    }

    pub fn with_absent(self, name: &str, file_param: bool) -> Self {
        let control = if file_param {
            ParamControl::file(name)
        } else {
            ParamControl::text(name)
        };
        self.push(control, name, None)
    }

    fn push(self, control: ParamControl, name: &str, value: Option<UiValue>) -> Self {
        self.controls.lock().push(FakeControl {
            control,
            name: name.to_string(),
            value,
        });
        self
    }

    pub fn shared(self) -> Arc<Self> {
        Arc::new(self)
    }

    pub fn as_task_widget(self: &Arc<Self>) -> Arc<dyn TaskWidget> {
        Arc::clone(self) as Arc<dyn TaskWidget>
    }

    /// Change the live value of the control named `name`
    pub fn set_value(&self, name: &str, value: Option<UiValue>) {
        for entry in self.controls.lock().iter_mut() {
            if entry.name == name {
                entry.value = value.clone();
            }
        }
    }

    pub fn fail_rendering(&self) {
        self.fail_render.store(true, Ordering::SeqCst);
    }

    /// Simulate the user pressing run
    pub fn click_run(&self) -> Result<(), WidgetError> {
        self.slot.submit()
    }

    pub fn real_submits(&self) -> usize {
        self.submitter.calls()
    }

    pub fn submitter(&self) -> &Arc<RecordingSubmitter> {
        &self.submitter
    }

    pub fn expand_calls(&self) -> Vec<bool> {
        self.expand_calls.lock().clone()
    }

    pub fn views(&self) -> Vec<Arc<FakeJobView>> {
        self.views.lock().clone()
    }
}

impl TaskWidget for FakeWidget {
    fn task_name(&self) -> String {
        self.task.clone()
    }

    fn param_controls(&self) -> Vec<ParamControl> {
        self.controls.lock().iter().map(|c| c.control.clone()).collect()
    }

    fn input_value(&self, control: &ParamControl) -> Option<UiValue> {
        self.controls
            .lock()
            .iter()
            .find(|c| &c.control == control)
            .and_then(|c| c.value.clone())
    }

    fn param_name(&self, control: &ParamControl) -> String {
        self.controls
            .lock()
            .iter()
            .find(|c| &c.control == control)
            .map_or_else(|| control.id.clone(), |c| c.name.clone())
    }

    fn expand_collapse(&self, expanded: bool) {
        self.expand_calls.lock().push(expanded);
    }

    fn cell(&self) -> CellRef {
        self.cell.clone()
    }

    fn session_index(&self) -> usize {
        self.session_index
    }

    fn add_job_result_view(
        &self,
        cell: &CellRef,
        session_index: usize,
        job: &JobHandle,
    ) -> Result<Arc<dyn JobResultView>, WidgetError> {
        if self.fail_render.load(Ordering::SeqCst) {
            return Err(WidgetError::framework("job view failed to render"));
        }
        let view = Arc::new(FakeJobView {
            cell: cell.clone(),
            session_index,
            job: job.clone(),
            messages: Mutex::new(Vec::new()),
        });
        self.views.lock().push(Arc::clone(&view));
        Ok(view)
    }

    fn submit_slot(&self) -> &SubmitSlot {
        &self.slot
    }
}

/// Document holding containers, some of which may not be bound yet
#[derive(Default)]
pub struct FakeDocument {
    containers: Mutex<Vec<(ContainerId, Option<Arc<dyn TaskWidget>>)>>,
}

impl FakeDocument {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn add_widget(&self, widget: Arc<dyn TaskWidget>) -> ContainerId {
        let mut containers = self.containers.lock();
        let id = ContainerId(format!("task-{}", containers.len()));
        containers.push((id.clone(), Some(widget)));
        id
    }

    pub fn add_unbound(&self) -> ContainerId {
        let mut containers = self.containers.lock();
        let id = ContainerId(format!("task-{}", containers.len()));
        containers.push((id.clone(), None));
        id
    }

    pub fn bind(&self, container: &ContainerId, widget: Arc<dyn TaskWidget>) {
        for entry in self.containers.lock().iter_mut() {
            if &entry.0 == container {
                entry.1 = Some(Arc::clone(&widget));
            }
        }
    }
}

impl TaskDocument for FakeDocument {
    fn task_containers(&self) -> Vec<ContainerId> {
        self.containers.lock().iter().map(|(id, _)| id.clone()).collect()
    }

    fn resolve_widget(&self, container: &ContainerId) -> Option<Arc<dyn TaskWidget>> {
        self.containers
            .lock()
            .iter()
            .find(|(id, _)| id == container)
            .and_then(|(_, widget)| widget.clone())
    }
}

/// Registry used by the scenario tests
pub fn compute_stats_jobs() -> Vec<DemoJob> {
    vec![DemoJob::new("ComputeStats", 42).with_param("input.file", vec!["sample.csv"])]
}
