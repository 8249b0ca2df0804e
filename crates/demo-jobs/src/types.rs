//! Demo job data model
//!
//! Recorded side: [`DemoJob`], [`ParamValue`], [`JobHandle`].
//! Live side: [`UiValue`] and [`FileObject`], as read from a task widget.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt::{self, Display, Formatter};

use crate::repr::{json_element, json_sequence};

/// Opaque reference to a previously computed job result
///
/// Registry files carry it as a number or a string; it is handed to the
/// widget framework untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum JobHandle {
    /// Numeric job identifier
    Number(serde_json::Number),
    /// Textual job identifier
    Text(String),
}

impl Display for JobHandle {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

macro_rules! numeric_handle {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for JobHandle {
                fn from(id: $ty) -> Self {
                    Self::Number(id.into())
                }
            }
        )*
    };
}

numeric_handle!(i32, i64, u32, u64);

impl From<&str> for JobHandle {
    fn from(id: &str) -> Self {
        Self::Text(id.to_string())
    }
}

impl From<String> for JobHandle {
    fn from(id: String) -> Self {
        Self::Text(id)
    }
}

/// Recorded parameter value: a single JSON scalar or an ordered sequence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    /// Ordered sequence of values
    Sequence(Vec<Value>),
    /// Single value, wrapped into a one-element sequence for comparison
    Single(Value),
}

impl ParamValue {
    /// Single string value
    #[inline]
    #[must_use]
    pub fn single(value: impl Into<String>) -> Self {
        Self::Single(Value::String(value.into()))
    }

    /// Sequence of string values
    #[must_use]
    pub fn sequence<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Sequence(values.into_iter().map(|v| Value::String(v.into())).collect())
    }

    /// Representation of the sequence-wrapped value
    ///
    /// A scalar `x` is compared as `[x]`, so `"5"`, `5` and `["5"]` all
    /// render to `5`.
    #[must_use]
    pub fn wrapped_representation(&self) -> String {
        match self {
            Self::Sequence(values) => json_sequence(values),
            Self::Single(value) => json_element(value),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::single(value)
    }
}

impl From<Vec<&str>> for ParamValue {
    fn from(values: Vec<&str>) -> Self {
        Self::sequence(values)
    }
}

/// A pre-recorded job: task name, recorded inputs and cached result handle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemoJob {
    /// Task type this job was recorded for
    pub name: String,
    /// Recorded canonical inputs, keyed by parameter name
    #[serde(default)]
    pub params: IndexMap<String, ParamValue>,
    /// Cached result
    pub job: JobHandle,
}

impl DemoJob {
    /// Create a job without parameters
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>, job: impl Into<JobHandle>) -> Self {
        Self {
            name: name.into(),
            params: IndexMap::new(),
            job: job.into(),
        }
    }

    /// Add a recorded parameter
    #[inline]
    #[must_use]
    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }
}

/// File handle selected through an upload control
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileObject {
    /// Name reported by the host for the selected file
    pub name: String,
}

impl FileObject {
    /// Create file handle
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Raw value read from a parameter control
///
/// An absent value is represented by `Option::None` at the call sites, never
/// by an empty `Text`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiValue {
    /// Text input, path or choice
    Text(String),
    /// Uploaded file handle
    File(FileObject),
    /// Multi-valued input
    List(Vec<UiValue>),
}

impl UiValue {
    /// Check whether this value is already a sequence
    #[inline]
    #[must_use]
    pub fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }
}

impl From<&str> for UiValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for UiValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<FileObject> for UiValue {
    fn from(file: FileObject) -> Self {
        Self::File(file)
    }
}

impl From<Vec<&str>> for UiValue {
    fn from(values: Vec<&str>) -> Self {
        Self::List(values.into_iter().map(Self::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn job_handle_untagged_json() {
        let numeric: JobHandle = serde_json::from_str("42").unwrap();
        assert_eq!(numeric, JobHandle::from(42));
        assert_eq!(numeric.to_string(), "42");

        let text: JobHandle = serde_json::from_str("\"job-7\"").unwrap();
        assert_eq!(text, JobHandle::from("job-7"));
        assert_eq!(text.to_string(), "job-7");
    }

    #[test]
    fn param_value_scalar_or_sequence() {
        let single: ParamValue = serde_json::from_str("\"a.txt\"").unwrap();
        assert_eq!(single, ParamValue::single("a.txt"));

        let seq: ParamValue = serde_json::from_str("[\"a\", \"b\"]").unwrap();
        assert_eq!(seq, ParamValue::sequence(["a", "b"]));

        let number: ParamValue = serde_json::from_str("5").unwrap();
        assert_eq!(number.wrapped_representation(), "5");
    }

    #[test]
    fn demo_job_registry_format() {
        let job: DemoJob = serde_json::from_str(
            r#"{"name": "ComputeStats", "params": {"input.file": ["sample.csv"], "k": "3"}, "job": 42}"#,
        )
        .unwrap();

        assert_eq!(job.name, "ComputeStats");
        assert_eq!(job.job, JobHandle::from(42));
        assert_eq!(job.params.len(), 2);
        assert_eq!(job.params["input.file"], ParamValue::sequence(["sample.csv"]));
        assert_eq!(job.params["k"], ParamValue::single("3"));
    }

    #[test]
    fn demo_job_without_params() {
        let job: DemoJob = serde_json::from_str(r#"{"name": "Noop", "job": "x"}"#).unwrap();
        assert!(job.params.is_empty());
    }

    #[test]
    fn ui_value_is_list() {
        assert!(UiValue::from(vec!["a"]).is_list());
        assert!(!UiValue::from("a").is_list());
        assert!(!UiValue::from(FileObject::new("f.csv")).is_list());
    }
}
