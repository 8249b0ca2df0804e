//! Capability surface consumed from the widget framework
//!
//! Rendering, input controls and real job dispatch belong to the framework.
//! This layer only sees the traits below.

use demo_jobs::{JobHandle, UiValue};
use std::fmt;
use std::sync::Arc;

use crate::error::WidgetError;
use crate::slot::SubmitSlot;

/// Something that can be submitted
pub trait Submittable: Send + Sync {
    /// Run the submission
    ///
    /// # Errors
    /// Whatever the implementation reports; callers propagate it unchanged.
    fn submit(&self) -> Result<(), WidgetError>;
}

/// One parameter control of a task widget, in display order
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParamControl {
    /// Framework identifier of the control
    pub id: String,
    /// Whether the control is a file parameter
    pub file_param: bool,
}

impl ParamControl {
    /// Plain (non-file) control
    #[inline]
    #[must_use]
    pub fn text(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            file_param: false,
        }
    }

    /// File upload control
    #[inline]
    #[must_use]
    pub fn file(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            file_param: true,
        }
    }

    /// Check for a file parameter control
    #[inline]
    #[must_use]
    pub fn is_file_param(&self) -> bool {
        self.file_param
    }
}

/// Notebook cell hosting a widget
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CellRef(pub String);

impl fmt::Display for CellRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Rendered job-result view
pub trait JobResultView: Send + Sync {
    /// Post an informational notice on the view
    ///
    /// # Errors
    /// Framework rendering failures.
    fn info_message(&self, message: &str) -> Result<(), WidgetError>;
}

/// A rendered task widget
pub trait TaskWidget: Send + Sync {
    /// Name of the task this widget submits
    fn task_name(&self) -> String;

    /// Parameter controls in display order
    fn param_controls(&self) -> Vec<ParamControl>;

    /// Current input value of a control; `None` when nothing is set
    fn input_value(&self, control: &ParamControl) -> Option<UiValue>;

    /// Logical parameter name of a control
    fn param_name(&self, control: &ParamControl) -> String;

    /// Expand (`true`) or collapse (`false`) the input form
    fn expand_collapse(&self, expanded: bool);

    /// Cell the widget is rendered in
    fn cell(&self) -> CellRef;

    /// Session the widget belongs to
    fn session_index(&self) -> usize;

    /// Render a job-result view for `job` in `cell`
    ///
    /// # Errors
    /// Framework rendering failures.
    fn add_job_result_view(
        &self,
        cell: &CellRef,
        session_index: usize,
        job: &JobHandle,
    ) -> Result<Arc<dyn JobResultView>, WidgetError>;

    /// Slot holding the submit operation the framework invokes
    fn submit_slot(&self) -> &SubmitSlot;
}

/// Blocking yes/no prompt shown to the user
pub trait ConfirmPrompt: Send + Sync {
    /// Ask `message`; `true` when the user confirms
    fn confirm(&self, message: &str) -> bool;
}

/// Element of the host document marked as a task-widget container
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContainerId(pub String);

impl fmt::Display for ContainerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Host document scanned by the discovery loop
pub trait TaskDocument: Send + Sync {
    /// Every task-widget container currently in the document
    fn task_containers(&self) -> Vec<ContainerId>;

    /// Widget bound to a container, if it has been rendered
    fn resolve_widget(&self, container: &ContainerId) -> Option<Arc<dyn TaskWidget>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn control_kinds() {
        assert!(ParamControl::file("input.file").is_file_param());
        assert!(!ParamControl::text("k").is_file_param());
    }

    #[test]
    fn refs_display() {
        assert_eq!(CellRef("cell-3".into()).to_string(), "cell-3");
        assert_eq!(ContainerId("task-1".into()).to_string(), "task-1");
    }
}
