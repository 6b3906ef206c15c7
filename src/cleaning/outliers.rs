//! Outlier removal: replace out-of-band samples with missing markers.
//!
//! Removal shares its interval definition with quality reporting
//! ([`outlier_bounds`]), but takes its own method and threshold: the
//! tolerance for *removing* a sample is a separate decision from the
//! tolerance for *mentioning* it in a report.

use crate::stats::{finite_values, outlier_bounds, OutlierMethod};

/// Replace samples outside the acceptance interval with `NaN`.
///
/// Parameters
/// ----------
/// - `values`: the series; already-missing samples pass through unchanged.
/// - `method`: interval definition, see [`OutlierMethod`].
/// - `threshold`: width multiplier for the chosen method.
///
/// Returns
/// -------
/// - A series of the same length with out-of-band samples replaced by
///   `NaN`. When fewer than three finite samples exist, the input is
///   returned unchanged: no removal without a statistical basis.
///
/// Notes
/// -----
/// - The bounds are computed once over the whole series, not per window;
///   pair with [`fill_gaps`](crate::cleaning::fill_gaps) to repair the
///   holes this creates.
pub fn remove_outliers(values: &[f64], method: OutlierMethod, threshold: f64) -> Vec<f64> {
    let clean = finite_values(values);
    let Some((lo, hi)) = outlier_bounds(&clean, method, threshold) else {
        return values.to_vec();
    };
    values
        .iter()
        .map(|&x| if x.is_finite() && (x < lo || x > hi) { f64::NAN } else { x })
        .collect()
}
