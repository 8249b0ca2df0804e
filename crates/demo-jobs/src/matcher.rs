//! Matching live parameters against recorded demo jobs

use crate::params::CanonicalParams;
use crate::types::{DemoJob, JobHandle};

impl DemoJob {
    /// Check every recorded parameter against the live mapping
    ///
    /// Each recorded value is sequence-wrapped and compared by rendered form.
    /// A recorded key missing from `params` is a mismatch. Live keys the job
    /// did not record are ignored.
    #[must_use]
    pub fn params_match(&self, params: &CanonicalParams) -> bool {
        self.params.iter().all(|(key, recorded)| {
            params
                .representation(key)
                .is_some_and(|live| live == recorded.wrapped_representation())
        })
    }

    /// Check task name and parameters
    #[inline]
    #[must_use]
    pub fn matches(&self, task_name: &str, params: &CanonicalParams) -> bool {
        self.name == task_name && self.params_match(params)
    }
}

/// Find the cached job for a submit attempt
///
/// When several jobs match, the last one in registry order wins.
#[must_use]
pub fn find_match<'a>(
    jobs: &'a [DemoJob],
    task_name: &str,
    params: &CanonicalParams,
) -> Option<&'a JobHandle> {
    jobs.iter()
        .rev()
        .find(|job| job.matches(task_name, params))
        .map(|job| &job.job)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ParamValue, UiValue};
    use proptest::prelude::*;
    use serde_json::json;

    fn stats_job(handle: u64) -> DemoJob {
        DemoJob::new("ComputeStats", handle).with_param("input.file", vec!["sample.csv"])
    }

    #[test]
    fn name_and_params_match() {
        let jobs = vec![stats_job(42)];
        let params = CanonicalParams::new().with("input.file", "sample.csv");
        assert_eq!(find_match(&jobs, "ComputeStats", &params), Some(&JobHandle::from(42)));
    }

    #[test]
    fn different_name_does_not_match() {
        let jobs = vec![stats_job(42)];
        let params = CanonicalParams::new().with("input.file", "sample.csv");
        assert_eq!(find_match(&jobs, "ComputeOther", &params), None);
    }

    #[test]
    fn different_value_does_not_match() {
        let jobs = vec![stats_job(42)];
        let params = CanonicalParams::new().with("input.file", "other.csv");
        assert_eq!(find_match(&jobs, "ComputeStats", &params), None);
    }

    #[test]
    fn missing_live_key_fails_closed() {
        let jobs = vec![stats_job(42)];
        let params = CanonicalParams::new().with("unrelated", "x");
        assert_eq!(find_match(&jobs, "ComputeStats", &params), None);
    }

    #[test]
    fn extra_live_keys_ignored() {
        let jobs = vec![stats_job(42)];
        let params = CanonicalParams::new()
            .with("input.file", "sample.csv")
            .with("extra", "anything");
        assert_eq!(find_match(&jobs, "ComputeStats", &params), Some(&JobHandle::from(42)));
    }

    #[test]
    fn last_match_wins() {
        let jobs = vec![stats_job(1), stats_job(2)];
        let params = CanonicalParams::new().with("input.file", "sample.csv");
        assert_eq!(find_match(&jobs, "ComputeStats", &params), Some(&JobHandle::from(2)));
    }

    #[test]
    fn empty_registry_never_matches() {
        let params = CanonicalParams::new().with("input.file", "sample.csv");
        assert_eq!(find_match(&[], "ComputeStats", &params), None);
    }

    #[test]
    fn scalar_equals_single_element_sequence() {
        let job = DemoJob::new("T", 1).with_param("k", "v");
        let params = CanonicalParams::new().with("k", vec!["v"]);
        assert!(job.matches("T", &params));
    }

    #[test]
    fn rendered_form_comparison_is_loose() {
        let job = DemoJob::new("T", 1).with_param("k", vec!["a,b"]);
        let params = CanonicalParams::new().with("k", vec!["a", "b"]);
        assert!(job.matches("T", &params));

        let numeric = DemoJob {
            params: [("n".to_string(), ParamValue::Single(json!(5)))].into_iter().collect(),
            ..DemoJob::new("T", 2)
        };
        assert!(numeric.matches("T", &CanonicalParams::new().with("n", "5")));
    }

    #[test]
    fn sequence_order_matters() {
        let job = DemoJob::new("T", 1).with_param("k", vec!["a", "b"]);
        let params = CanonicalParams::new().with("k", vec!["b", "a"]);
        assert!(!job.matches("T", &params));
    }

    #[test]
    fn job_without_params_matches_any_live_params() {
        let job = DemoJob::new("T", 1);
        assert!(job.matches("T", &CanonicalParams::new()));
        assert!(job.matches("T", &CanonicalParams::new().with("k", "v")));
    }

    proptest! {
        #[test]
        fn prop_match_iff_all_recorded_keys_equal(
            recorded in prop::collection::vec(("[a-c]", "[xy]{0,2}"), 0..4),
            live in prop::collection::vec(("[a-c]", "[xy]{0,2}"), 0..4),
            same_name in any::<bool>(),
        ) {
            let mut job = DemoJob::new("Task", 7);
            for (k, v) in &recorded {
                job = job.with_param(k.clone(), v.as_str());
            }
            let mut params = CanonicalParams::new();
            for (k, v) in &live {
                params.insert(k.clone(), &UiValue::from(v.clone()));
            }
            let task = if same_name { "Task" } else { "Other" };

            let expected = same_name
                && job.params.iter().all(|(k, v)| {
                    params.get(k).map(|seq| seq.join(",")) == Some(v.wrapped_representation())
                });
            let jobs = [job];
            prop_assert_eq!(find_match(&jobs, task, &params).is_some(), expected);
        }
    }
}
