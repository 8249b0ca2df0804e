//! Submit slot owned by each task widget
//!
//! The framework calls [`SubmitSlot::submit`] when the user runs a task.
//! Interception swaps the handler for a decorator around the original one,
//! at most once per slot.

use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;

use crate::error::WidgetError;
use crate::widget::Submittable;

struct SlotState {
    handler: Arc<dyn Submittable>,
    intercepted: bool,
}

/// Current submit handler of a widget plus its interception flag
pub struct SubmitSlot {
    state: Mutex<SlotState>,
}

impl SubmitSlot {
    /// Create slot around the framework's own submit operation
    #[must_use]
    pub fn new(original: Arc<dyn Submittable>) -> Self {
        Self {
            state: Mutex::new(SlotState {
                handler: original,
                intercepted: false,
            }),
        }
    }

    /// Invoke the current handler
    ///
    /// The lock is released before the handler runs.
    ///
    /// # Errors
    /// Whatever the handler returns.
    pub fn submit(&self) -> Result<(), WidgetError> {
        let handler = self.current();
        handler.submit()
    }

    /// Current handler
    #[inline]
    #[must_use]
    pub fn current(&self) -> Arc<dyn Submittable> {
        Arc::clone(&self.state.lock().handler)
    }

    /// Check whether the slot has been intercepted
    #[inline]
    #[must_use]
    pub fn is_intercepted(&self) -> bool {
        self.state.lock().intercepted
    }

    /// Replace the handler with `decorate(original)` unless already done
    ///
    /// Returns `true` if this call installed the decorator.
    pub fn intercept_with<F>(&self, decorate: F) -> bool
    where
        F: FnOnce(Arc<dyn Submittable>) -> Arc<dyn Submittable>,
    {
        let mut state = self.state.lock();
        if state.intercepted {
            return false;
        }
        let original = Arc::clone(&state.handler);
        state.handler = decorate(original);
        state.intercepted = true;
        true
    }
}

impl fmt::Debug for SubmitSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubmitSlot")
            .field("intercepted", &self.is_intercepted())
            .finish_non_exhaustive()
    }
}
