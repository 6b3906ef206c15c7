//! Base-pressure estimation from the most stable plateau.
//!
//! Purpose
//! -------
//! Estimate the base (ultimate) pressure a system settled at. The base
//! pressure is not the global minimum — a downward gauge glitch would win
//! that — but the level held during the most temporally stable stretch of
//! the trace.
//!
//! Key behaviors
//! -------------
//! - Slide a centered window over the series, find the position with the
//!   smallest rolling standard deviation, and report the rolling minimum
//!   of that window.
//! - Fall back to the global finite minimum when no window has a defined
//!   standard deviation (too few valid samples everywhere).
//! - Replace a non-finite or non-positive result with the `1e-6` sentinel,
//!   so the estimate is always strictly positive and finite.
//!
//! Invariants & assumptions
//! ------------------------
//! - The window width is derived from wall-clock intent
//!   (`window_minutes · 60 · sample_rate_hz`) and clamped to `[1, n]`.
//! - Stability is judged on the raw rolling standard deviation, without
//!   edge fill: an edge position with no full window never wins the
//!   stability search.
//!
//! Downstream usage
//! ----------------
//! - Used directly and as the base-pressure stage of
//!   [`PumpdownAnalyzer`](crate::vacuum::PumpdownAnalyzer).

use crate::stats::{finite_values, rolling_min, rolling_std};
use statrs::statistics::Statistics;

/// Sentinel returned when no strictly positive, finite estimate exists.
const MIN_PRESSURE: f64 = 1e-6;

/// BasePressureEstimator — stability-search base-pressure estimation.
///
/// Fields
/// ------
/// - `window_minutes`: `f64`
///   Wall-clock width of the stability window. Default `10.0`.
/// - `sample_rate_hz`: `f64`
///   Sampling rate used to convert the window to samples. Default `1.0`.
///
/// Invariants
/// ----------
/// - [`estimate`](Self::estimate) always returns a finite, strictly
///   positive value and never panics on numeric input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BasePressureEstimator {
    pub window_minutes: f64,
    pub sample_rate_hz: f64,
}

impl Default for BasePressureEstimator {
    fn default() -> Self {
        BasePressureEstimator { window_minutes: 10.0, sample_rate_hz: 1.0 }
    }
}

impl BasePressureEstimator {
    /// Estimator with the default ten-minute window at 1 Hz.
    pub fn new() -> Self {
        Self::default()
    }

    /// Base pressure of one trace, using the configured wall-clock window.
    pub fn estimate(&self, pressure: &[f64]) -> f64 {
        if pressure.is_empty() {
            return MIN_PRESSURE;
        }
        let samples = (self.window_minutes * 60.0 * self.sample_rate_hz) as usize;
        self.estimate_with_window(pressure, samples.clamp(1, pressure.len()))
    }

    /// Base pressure with an explicit window width in samples.
    ///
    /// Parameters
    /// ----------
    /// - `pressure`: the trace; `NaN`/±∞ entries are skipped.
    /// - `window`: stability-window width; clamped to `[1, n]`.
    ///
    /// Returns
    /// -------
    /// - The rolling minimum at the most stable position; the global finite
    ///   minimum when no position has a defined rolling standard deviation;
    ///   the `1e-6` sentinel when even that is non-finite or non-positive.
    pub fn estimate_with_window(&self, pressure: &[f64], window: usize) -> f64 {
        if pressure.is_empty() {
            return MIN_PRESSURE;
        }
        let window = window.clamp(1, pressure.len());

        let candidate = match self.most_stable_position(pressure, window) {
            Some(i) => rolling_min(pressure, window)[i],
            None => {
                let clean = finite_values(pressure);
                if clean.is_empty() {
                    f64::NAN
                } else {
                    Statistics::min(clean.iter())
                }
            }
        };

        if candidate.is_finite() && candidate > 0.0 {
            candidate
        } else {
            MIN_PRESSURE
        }
    }

    /// Center position of the most stable window, for callers that want
    /// the plateau location alongside the estimate. `None` when no
    /// position has a defined rolling standard deviation.
    pub fn most_stable_position(&self, pressure: &[f64], window: usize) -> Option<usize> {
        let window = window.clamp(1, pressure.len().max(1));
        rolling_std(pressure, window)
            .iter()
            .enumerate()
            .filter(|(_, s)| s.is_finite())
            .min_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(i, _)| i)
    }
}
