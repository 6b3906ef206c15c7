//! Noise smoothing: centered moving average and exponential weighting.
//!
//! Smoothing is length-preserving and, unlike gap filling, makes no
//! hole-free promise: it attenuates noise in what is there. Pair with
//! [`fill_gaps`](crate::cleaning::fill_gaps) first when the series has
//! holes.

use crate::stats::{fill_edges, rolling_mean};

/// How the series is smoothed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SmoothMethod {
    /// Centered rolling mean of `window` samples; the undefined edge
    /// regions take the nearest defined value, and any position the mean
    /// cannot cover falls back to the raw sample.
    MovingAverage,
    /// Exponentially weighted mean with `α = 2 / (window + 1)`, the span
    /// convention. Missing samples leave the running state unchanged, so
    /// the smoothed value carries across holes; positions before the
    /// first valid sample stay missing.
    Exponential,
}

/// Smooth one series with the given window.
///
/// Parameters
/// ----------
/// - `values`: the series; `NaN`/±∞ entries count as missing.
/// - `window`: window width in samples (moving average) or span
///   (exponential); 0 is treated as 1.
/// - `method`: see [`SmoothMethod`].
///
/// Returns
/// -------
/// - A series of the same length. A window of 1 reproduces the finite
///   samples unchanged.
pub fn smooth_data(values: &[f64], window: usize, method: SmoothMethod) -> Vec<f64> {
    let window = window.max(1);
    match method {
        SmoothMethod::MovingAverage => {
            let smoothed = fill_edges(&rolling_mean(values, window));
            smoothed
                .iter()
                .zip(values)
                .map(|(&s, &raw)| if s.is_finite() { s } else { raw })
                .collect()
        }
        SmoothMethod::Exponential => {
            let alpha = 2.0 / (window as f64 + 1.0);
            let mut state = f64::NAN;
            values
                .iter()
                .map(|&x| {
                    if x.is_finite() {
                        state =
                            if state.is_finite() { alpha * x + (1.0 - alpha) * state } else { x };
                    }
                    state
                })
                .collect()
        }
    }
}
