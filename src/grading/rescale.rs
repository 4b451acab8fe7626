use tracing::debug;

use crate::grading::validate::GRADE_MAX;

/// Linearly maps `values` from `[0, scale]` onto `[0, 10]`.
///
/// Each output is `value * 10 / scale`, in input order. Values are not
/// validated and may land outside `[0, 10]`. A scale that is not strictly
/// positive (NaN included) produces an empty vector.
pub fn rescale(values: &[f64], scale: f64) -> Vec<f64> {
    if scale.is_nan() || scale <= 0.0 {
        debug!(scale, len = values.len(), "Non-positive scale, nothing to rescale");
        return Vec::new();
    }

    values.iter().map(|v| (v * GRADE_MAX) / scale).collect()
}
