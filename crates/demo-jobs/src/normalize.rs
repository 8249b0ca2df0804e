//! Value normalization
//!
//! Recorded demo jobs store only file base names, so live values of file
//! parameters are reduced the same way before comparison. Every other value
//! passes through untouched.

use crate::types::UiValue;

/// Separator used by upload and session paths
pub const PATH_SEPARATOR: char = '/';

/// Normalize a raw control value
///
/// - not a file parameter: returned unchanged
/// - file parameter, sequence: each element reduced to its base name
/// - file parameter, scalar: reduced to its base name
///
/// An absent value stays absent.
#[must_use]
pub fn normalize(value: Option<UiValue>, is_file_param: bool) -> Option<UiValue> {
    if !is_file_param {
        return value;
    }
    value.map(file_base_names)
}

fn file_base_names(value: UiValue) -> UiValue {
    match value {
        UiValue::List(items) => UiValue::List(items.into_iter().map(file_base_names).collect()),
        UiValue::File(file) => UiValue::Text(base_name(&file.name).to_string()),
        UiValue::Text(path) => UiValue::Text(base_name(&path).to_string()),
    }
}

/// Text after the final path separator, or the whole string if there is none
#[inline]
#[must_use]
pub fn base_name(path: &str) -> &str {
    match path.rfind(PATH_SEPARATOR) {
        Some(idx) => &path[idx + PATH_SEPARATOR.len_utf8()..],
        None => path,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FileObject;
    use proptest::prelude::*;

    #[test]
    fn base_name_of_paths() {
        assert_eq!(base_name("/uploads/session1/sample.csv"), "sample.csv");
        assert_eq!(base_name("sample.csv"), "sample.csv");
        assert_eq!(base_name("/tmp/dir/"), "");
        assert_eq!(base_name(""), "");
    }

    #[test]
    fn file_scalar_reduced() {
        let value = normalize(Some("/uploads/session1/sample.csv".into()), true);
        assert_eq!(value, Some(UiValue::from("sample.csv")));
    }

    #[test]
    fn file_sequence_reduced() {
        let value = normalize(Some(vec!["/a/x.txt", "/b/y.txt"].into()), true);
        assert_eq!(value, Some(UiValue::from(vec!["x.txt", "y.txt"])));
    }

    #[test]
    fn file_objects_use_their_name() {
        let value = normalize(
            Some(UiValue::List(vec![
                FileObject::new("local.csv").into(),
                "/srv/remote.csv".into(),
            ])),
            true,
        );
        assert_eq!(value, Some(UiValue::from(vec!["local.csv", "remote.csv"])));

        let scalar = normalize(Some(FileObject::new("C/dir/up.bam").into()), true);
        assert_eq!(scalar, Some(UiValue::from("up.bam")));
    }

    #[test]
    fn absent_stays_absent() {
        assert_eq!(normalize(None, true), None);
        assert_eq!(normalize(None, false), None);
    }

    #[test]
    fn non_file_paths_untouched() {
        let value = normalize(Some("/keep/full/path".into()), false);
        assert_eq!(value, Some(UiValue::from("/keep/full/path")));
    }

    fn ui_value() -> impl Strategy<Value = UiValue> {
        let leaf = prop_oneof![
            ".*".prop_map(UiValue::Text),
            ".*".prop_map(|name| UiValue::File(FileObject::new(name))),
        ];
        leaf.prop_recursive(3, 16, 4, |inner| {
            prop::collection::vec(inner, 0..4).prop_map(UiValue::List)
        })
    }

    proptest! {
        #[test]
        fn prop_non_file_is_identity(value in proptest::option::of(ui_value())) {
            prop_assert_eq!(normalize(value.clone(), false), value);
        }

        #[test]
        fn prop_file_output_has_no_separator(value in ui_value()) {
            let normalized = normalize(Some(value), true).unwrap();
            prop_assert!(!crate::repr::ui_element(&normalized).contains(PATH_SEPARATOR));
        }
    }
}
