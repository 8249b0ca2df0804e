//! Offline task widget for match checks
//!
//! Lets a registry be checked against a task name and parameter values
//! without a notebook. Repeating a parameter name makes it multi-valued.

use demo_intercept::{
    CellRef, JobResultView, ParamControl, SubmitSlot, Submittable, TaskWidget, WidgetError,
};
use demo_jobs::{JobHandle, UiValue};
use std::sync::Arc;

/// Parse a `name=value` command line assignment
///
/// # Errors
/// A message when `=` is missing or the name is empty.
pub fn parse_assignment(arg: &str) -> Result<(String, String), String> {
    match arg.split_once('=') {
        Some((name, _)) if name.is_empty() => Err(format!("missing parameter name in '{arg}'")),
        Some((name, value)) => Ok((name.to_string(), value.to_string())),
        None => Err(format!("expected name=value, got '{arg}'")),
    }
}

struct OfflineSubmit;

impl Submittable for OfflineSubmit {
    fn submit(&self) -> Result<(), WidgetError> {
        Err(WidgetError::framework("no job server available offline"))
    }
}

struct OfflineControl {
    control: ParamControl,
    values: Vec<String>,
}

/// Task widget assembled from command line values
pub struct OfflineTaskWidget {
    task: String,
    controls: Vec<OfflineControl>,
    slot: SubmitSlot,
}

impl OfflineTaskWidget {
    /// Create widget for `task`
    #[must_use]
    pub fn new(task: impl Into<String>) -> Self {
        Self {
            task: task.into(),
            controls: Vec::new(),
            slot: SubmitSlot::new(Arc::new(OfflineSubmit)),
        }
    }

    /// Add a value to a plain parameter
    #[must_use]
    pub fn with_value(self, name: &str, value: &str) -> Self {
        self.push(ParamControl::text(name), value)
    }

    /// Add a path to a file parameter
    #[must_use]
    pub fn with_file(self, name: &str, path: &str) -> Self {
        self.push(ParamControl::file(name), path)
    }

    fn push(mut self, control: ParamControl, value: &str) -> Self {
        match self.controls.iter_mut().find(|c| c.control == control) {
            Some(existing) => existing.values.push(value.to_string()),
            None => self.controls.push(OfflineControl {
                control,
                values: vec![value.to_string()],
            }),
        }
        self
    }
}

impl TaskWidget for OfflineTaskWidget {
    fn task_name(&self) -> String {
        self.task.clone()
    }

    fn param_controls(&self) -> Vec<ParamControl> {
        self.controls.iter().map(|c| c.control.clone()).collect()
    }

    fn input_value(&self, control: &ParamControl) -> Option<UiValue> {
        let entry = self.controls.iter().find(|c| &c.control == control)?;
        match entry.values.as_slice() {
            [single] => Some(UiValue::Text(single.clone())),
            many => Some(UiValue::List(many.iter().cloned().map(UiValue::Text).collect())),
        }
    }

    fn param_name(&self, control: &ParamControl) -> String {
        control.id.clone()
    }

    fn expand_collapse(&self, _expanded: bool) {}

    fn cell(&self) -> CellRef {
        CellRef("offline".to_string())
    }

    fn session_index(&self) -> usize {
        0
    }

    fn add_job_result_view(
        &self,
        _cell: &CellRef,
        _session_index: usize,
        _job: &JobHandle,
    ) -> Result<Arc<dyn JobResultView>, WidgetError> {
        Err(WidgetError::framework("job views cannot be rendered offline"))
    }

    fn submit_slot(&self) -> &SubmitSlot {
        &self.slot
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use demo_intercept::extract_params;

    #[test]
    fn assignments() {
        assert_eq!(
            parse_assignment("input.file=/tmp/a.csv"),
            Ok(("input.file".to_string(), "/tmp/a.csv".to_string()))
        );
        assert_eq!(parse_assignment("k="), Ok(("k".to_string(), String::new())));
        assert_eq!(parse_assignment("a=b=c"), Ok(("a".to_string(), "b=c".to_string())));
        assert!(parse_assignment("novalue").is_err());
        assert!(parse_assignment("=x").is_err());
    }

    #[test]
    fn repeated_names_become_sequences() {
        let widget = OfflineTaskWidget::new("T")
            .with_value("k", "1")
            .with_value("k", "2")
            .with_file("f", "/up/x.txt");

        let params = extract_params(&widget);
        assert_eq!(params.representation("k").as_deref(), Some("1,2"));
        assert_eq!(params.representation("f").as_deref(), Some("x.txt"));
    }

    #[test]
    fn offline_submit_fails() {
        let widget = OfflineTaskWidget::new("T");
        assert!(widget.submit_slot().submit().is_err());
    }
}
