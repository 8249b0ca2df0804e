//! Canonical parameter mapping built from live UI state

use indexmap::IndexMap;

use crate::repr;
use crate::types::UiValue;

/// Parameter name to ordered sequence of rendered values
///
/// Built fresh for every submit attempt. Scalars are wrapped into a
/// one-element sequence on insertion; a name inserted twice keeps its
/// original position and takes the later value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CanonicalParams {
    values: IndexMap<String, Vec<String>>,
}

impl CanonicalParams {
    /// Create empty mapping
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a normalized value, wrapping scalars into a sequence
    pub fn insert(&mut self, name: impl Into<String>, value: &UiValue) {
        let elements = match value {
            UiValue::List(items) => items.iter().map(repr::ui_element).collect(),
            scalar => vec![repr::ui_element(scalar)],
        };
        self.values.insert(name.into(), elements);
    }

    /// Builder-style insert
    #[inline]
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<UiValue>) -> Self {
        self.insert(name, &value.into());
        self
    }

    /// Sequence stored under `name`
    #[inline]
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.values.get(name).map(Vec::as_slice)
    }

    /// Rendered sequence stored under `name`
    #[inline]
    #[must_use]
    pub fn representation(&self, name: &str) -> Option<String> {
        self.get(name).map(repr::sequence)
    }

    /// Check whether `name` was retained
    #[inline]
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Number of retained parameters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if nothing was retained
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_is_wrapped() {
        let params = CanonicalParams::new().with("k", "v");
        assert_eq!(params.get("k"), Some(&["v".to_string()][..]));
        assert_eq!(params.representation("k").as_deref(), Some("v"));
    }

    #[test]
    fn sequence_kept_in_order() {
        let params = CanonicalParams::new().with("files", vec!["b.txt", "a.txt"]);
        assert_eq!(params.representation("files").as_deref(), Some("b.txt,a.txt"));
    }

    #[test]
    fn empty_string_is_retained() {
        let params = CanonicalParams::new().with("blank", "");
        assert!(params.contains("blank"));
        assert_eq!(params.representation("blank").as_deref(), Some(""));
    }

    #[test]
    fn duplicate_name_overwrites_in_place() {
        let params = CanonicalParams::new()
            .with("a", "1")
            .with("b", "2")
            .with("a", "3");
        let order: Vec<_> = params.iter().map(|(k, _)| k).collect();
        assert_eq!(order, vec!["a", "b"]);
        assert_eq!(params.representation("a").as_deref(), Some("3"));
    }

    #[test]
    fn missing_name() {
        let params = CanonicalParams::new();
        assert!(params.is_empty());
        assert_eq!(params.representation("absent"), None);
    }
}
