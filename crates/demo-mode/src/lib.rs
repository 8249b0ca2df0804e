//! Demo Mode
//!
//! Substitutes pre-recorded results for task submissions in a notebook
//! session. A [`DemoMode`] holds the session's demo jobs; activating it
//! starts a discovery loop that intercepts every task widget the document
//! renders.
//!
//! # Example
//!
//! ```rust,ignore
//! use demo_mode::{DemoConfig, DemoMode};
//!
//! # async fn example(document: std::sync::Arc<dyn demo_intercept::TaskDocument>,
//! #                  prompt: std::sync::Arc<dyn demo_intercept::ConfirmPrompt>)
//! #     -> Result<(), demo_mode::DemoModeError> {
//! let demo = DemoMode::new(DemoConfig::new());
//! demo.load_jobs_file("demo_jobs.json")?;
//!
//! let handle = demo.activate(document, prompt)?;
//! println!("Demo mode active with {} jobs", handle.job_count());
//! # Ok(())
//! # }
//! ```

#![warn(unreachable_pub)]

pub mod check;
pub mod config;
pub mod error;
pub mod logging;
pub mod session;

// Re-exports for convenience
pub use check::{parse_assignment, OfflineTaskWidget};
pub use config::DemoConfig;
pub use error::{ConfigError, DemoModeError};
pub use logging::init_tracing;
pub use session::{ActivationHandle, DemoMode};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for running demo mode
    pub use crate::{ActivationHandle, DemoConfig, DemoMode, DemoModeError};
    pub use demo_intercept::{ConfirmPrompt, TaskDocument, TaskWidget};
    pub use demo_jobs::{DemoJob, JobHandle, JobRegistry};
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
