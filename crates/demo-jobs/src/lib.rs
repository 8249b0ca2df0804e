//! Demo Jobs
//!
//! Registry of pre-recorded task results and the logic that decides whether a
//! submit attempt can be answered from it:
//! - **JobRegistry**: process-scoped, replace-all set of [`DemoJob`]s
//! - **normalize**: reduces file parameter values to base names
//! - **CanonicalParams**: sequence-wrapped live parameter mapping
//! - **find_match**: name + rendered-parameter comparison, last match wins
//!
//! # Example
//!
//! ```rust
//! use demo_jobs::{CanonicalParams, DemoJob, JobHandle, JobRegistry, UiValue, normalize};
//!
//! let registry = JobRegistry::new();
//! registry.set_jobs(vec![
//!     DemoJob::new("ComputeStats", 42).with_param("input.file", vec!["sample.csv"]),
//! ]);
//!
//! let live = normalize(Some(UiValue::from("/tmp/abc/sample.csv")), true).unwrap();
//! let mut params = CanonicalParams::new();
//! params.insert("input.file", &live);
//!
//! assert_eq!(registry.find_match("ComputeStats", &params), Some(JobHandle::from(42)));
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod matcher;
pub mod normalize;
pub mod params;
pub mod registry;
pub mod repr;
pub mod types;

// Re-exports
pub use error::RegistryError;
pub use matcher::find_match;
pub use normalize::{base_name, normalize};
pub use params::CanonicalParams;
pub use registry::JobRegistry;
pub use types::{DemoJob, FileObject, JobHandle, ParamValue, UiValue};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for demo job matching
    pub use crate::{
        find_match, normalize, CanonicalParams, DemoJob, FileObject, JobHandle, JobRegistry,
        ParamValue, UiValue,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
