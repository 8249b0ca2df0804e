//! Demo Intercept
//!
//! Hooks demo-job substitution into task widgets rendered by a notebook
//! widget framework:
//! - **extract_params**: reads live controls into [`CanonicalParams`](demo_jobs::CanonicalParams)
//! - **Interceptor**: decorates a widget's submit slot with [`DemoSubmit`]
//! - **DiscoveryLoop**: periodically finds new widgets and wraps them
//!
//! The framework itself is reached only through the traits in [`widget`].

#![warn(missing_docs)]

pub mod discovery;
pub mod error;
pub mod extract;
pub mod interceptor;
pub mod slot;
pub mod widget;

// Re-exports
pub use discovery::{DiscoveryLoop, ScanReport, DEFAULT_POLL_INTERVAL, MIN_POLL_INTERVAL};
pub use error::{FrameworkError, WidgetError};
pub use extract::extract_params;
pub use interceptor::{
    DemoSubmit, InterceptMessages, Interceptor, SubmitOutcome, DEFAULT_DEMO_NOTICE,
    DEFAULT_NO_MATCH_PROMPT,
};
pub use slot::SubmitSlot;
pub use widget::{
    CellRef, ConfirmPrompt, ContainerId, JobResultView, ParamControl, Submittable, TaskDocument,
    TaskWidget,
};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
