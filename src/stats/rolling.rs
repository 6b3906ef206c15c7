//! Centered rolling-window statistics with explicit edge handling.
//!
//! Implements the windowed primitives shared by spike detection, base-pressure
//! search, and smoothing: rolling mean, sample standard deviation, and
//! minimum over a centered window, plus the backward-then-forward edge fill
//! that several consumers apply to the undefined window regions.
//!
//! ## Window convention
//! For a window of `w` samples centered on position `i`, the window covers
//! `[i − (w−1)/2, i + w/2]` (integer division). Positions whose full window
//! does not fit inside the array yield `NaN`; consumers either inspect the
//! raw output (base-pressure stability search) or run it through
//! [`fill_edges`] first (spike thresholds, smoothing).
//!
//! ## Missing values
//! Non-finite samples inside a window are skipped. A window with no valid
//! sample (mean/min) or fewer than two (std, which is the sample statistic)
//! yields `NaN` at that position.
//!
//! ## Degradation
//! These functions never panic: empty input produces an empty array, a
//! window of zero is treated as one, and all-missing input produces all-`NaN`
//! output (still all-`NaN` after [`fill_edges`]; callers apply their own
//! sentinel in that case).

use ndarray::Array1;

/// Bounds `[start, end)` of the full centered window at position `i`, or
/// `None` when the window would extend past either edge of the array.
#[inline]
fn full_window(i: usize, n: usize, window: usize) -> Option<(usize, usize)> {
    let left = (window - 1) / 2;
    let right = window / 2;
    if i < left || i + right >= n {
        None
    } else {
        Some((i - left, i + right + 1))
    }
}

/// Rolling mean over a centered window of `window` samples.
///
/// Positions without a full window, or whose window holds no finite sample,
/// are `NaN`. Never panics; `window == 0` is treated as 1.
pub fn rolling_mean(values: &[f64], window: usize) -> Array1<f64> {
    let window = window.max(1);
    let n = values.len();
    Array1::from_iter((0..n).map(|i| match full_window(i, n, window) {
        Some((start, end)) => {
            let mut sum = 0.0;
            let mut count = 0usize;
            for &x in &values[start..end] {
                if x.is_finite() {
                    sum += x;
                    count += 1;
                }
            }
            if count > 0 { sum / count as f64 } else { f64::NAN }
        }
        None => f64::NAN,
    }))
}

/// Rolling sample standard deviation over a centered window of `window`
/// samples.
///
/// Positions without a full window, or with fewer than two finite samples in
/// the window, are `NaN`. Never panics; `window == 0` is treated as 1.
pub fn rolling_std(values: &[f64], window: usize) -> Array1<f64> {
    let window = window.max(1);
    let n = values.len();
    Array1::from_iter((0..n).map(|i| match full_window(i, n, window) {
        Some((start, end)) => window_std(&values[start..end]),
        None => f64::NAN,
    }))
}

/// Rolling minimum over a centered window of `window` samples.
///
/// Positions without a full window, or whose window holds no finite sample,
/// are `NaN`. Never panics; `window == 0` is treated as 1.
pub fn rolling_min(values: &[f64], window: usize) -> Array1<f64> {
    let window = window.max(1);
    let n = values.len();
    Array1::from_iter((0..n).map(|i| match full_window(i, n, window) {
        Some((start, end)) => {
            let mut min = f64::NAN;
            for &x in &values[start..end] {
                if x.is_finite() && !(min <= x) {
                    min = x;
                }
            }
            min
        }
        None => f64::NAN,
    }))
}

/// Sample standard deviation of the finite values in one window slice.
#[inline]
fn window_std(window: &[f64]) -> f64 {
    let mut sum = 0.0;
    let mut count = 0usize;
    for &x in window {
        if x.is_finite() {
            sum += x;
            count += 1;
        }
    }
    if count < 2 {
        return f64::NAN;
    }
    let mean = sum / count as f64;
    let mut ss = 0.0;
    for &x in window {
        if x.is_finite() {
            ss += (x - mean) * (x - mean);
        }
    }
    (ss / (count - 1) as f64).sqrt()
}

/// Fill `NaN` holes by backward fill (next valid value) and then forward
/// fill (previous valid value).
///
/// This is the edge-fill convention used wherever a rolling statistic must be
/// defined at every position: the undefined leading region takes the first
/// defined value, the undefined trailing region the last one, and interior
/// holes are bridged from the right. An all-`NaN` input stays all-`NaN`.
pub fn fill_edges(series: &Array1<f64>) -> Array1<f64> {
    let mut out = series.clone();
    // Backward pass: propagate the next valid value toward the front.
    let mut next_valid = f64::NAN;
    for x in out.iter_mut().rev() {
        if x.is_finite() {
            next_valid = *x;
        } else if next_valid.is_finite() {
            *x = next_valid;
        }
    }
    // Forward pass: propagate the last valid value toward the back.
    let mut last_valid = f64::NAN;
    for x in out.iter_mut() {
        if x.is_finite() {
            last_valid = *x;
        } else if last_valid.is_finite() {
            *x = last_valid;
        }
    }
    out
}
