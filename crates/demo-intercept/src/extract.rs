//! Parameter extraction from live widget state

use demo_jobs::{normalize, CanonicalParams};

use crate::widget::TaskWidget;

/// Read every parameter control of `widget` into a canonical mapping
///
/// Controls are visited in display order. A control whose normalized value
/// is absent is omitted; an empty string is kept.
#[must_use]
pub fn extract_params(widget: &dyn TaskWidget) -> CanonicalParams {
    let mut params = CanonicalParams::new();
    for control in widget.param_controls() {
        let raw = widget.input_value(&control);
        let value = normalize(raw, control.is_file_param());
        let name = widget.param_name(&control);
        match value {
            Some(value) => {
                tracing::trace!("Extracted {} = {:?}", name, value);
                params.insert(name, &value);
            }
            None => tracing::trace!("Skipped {}: no value", name),
        }
    }
    params
}
