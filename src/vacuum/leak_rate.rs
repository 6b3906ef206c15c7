//! Leak-rate estimation from a log-linear pressure fit.
//!
//! Purpose
//! -------
//! Estimate the leak (or outgassing) rate of a sealed volume from a
//! pressure trace. Pressure relaxation is exponential to first order, so
//! the trace is fit as `ln p = a + b·t` by closed-form least squares and
//! the rate is derived from the slope.
//!
//! Key behaviors
//! -------------
//! - [`LeakRateEstimator::estimate`] returns the scalar rate
//!   `|volume · slope · mean pressure|`, in pressure·volume per time unit.
//! - [`LeakRateEstimator::fit`] additionally exposes the slope, the fit's
//!   R², and the relaxation time constant `−1/slope`.
//! - Only sample pairs where both pressure and time are finite enter the
//!   fit; pressures are clamped to `1e-10` before the logarithm so zeros
//!   and negatives cannot poison it.
//!
//! Invariants & assumptions
//! ------------------------
//! - Fewer than two finite pairs, or a time axis with zero variance,
//!   yield the zero fit (rate 0, slope 0, R² 0, no time constant) rather
//!   than an error: a rate is simply not estimable from such data.
//! - The reported rate is non-negative by construction; the sign of the
//!   process (leak-up versus pump-down) is readable from `slope`.
//!
//! Downstream usage
//! ----------------
//! - Used directly and as the leak-rate stage of
//!   [`PumpdownAnalyzer`](crate::vacuum::PumpdownAnalyzer).

use statrs::statistics::Statistics;

use crate::vacuum::errors::{VacuumError, VacuumResult};

/// Pressures below this are clamped before taking the logarithm.
const LOG_FLOOR: f64 = 1e-10;

/// LeakRateFit — full result of one log-linear leak fit.
///
/// Fields
/// ------
/// - `leak_rate`: `|volume · slope · mean pressure|`, non-negative.
/// - `slope`: slope of `ln p` against time; negative while pumping down,
///   positive while leaking up.
/// - `r_squared`: coefficient of determination of the log-linear fit in
///   `[0, 1]`; 0 when the log-pressure has no variance.
/// - `time_constant`: relaxation time `−1/slope`; `None` when the slope
///   is exactly zero.
#[derive(Debug, Clone, PartialEq)]
pub struct LeakRateFit {
    pub leak_rate: f64,
    pub slope: f64,
    pub r_squared: f64,
    pub time_constant: Option<f64>,
}

impl LeakRateFit {
    /// The zero fit reported when no rate is estimable.
    fn zero() -> Self {
        LeakRateFit { leak_rate: 0.0, slope: 0.0, r_squared: 0.0, time_constant: None }
    }
}

/// LeakRateEstimator — closed-form log-linear leak-rate estimation.
///
/// Fields
/// ------
/// - `volume_liters`: `f64`
///   Sealed volume the rate refers to. Default `1.0`, which makes the
///   result a pure pressure-rise rate.
///
/// Invariants
/// ----------
/// - Never panics on numeric input; the only error is a length mismatch
///   between the pressure and time arrays.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LeakRateEstimator {
    pub volume_liters: f64,
}

impl Default for LeakRateEstimator {
    fn default() -> Self {
        LeakRateEstimator { volume_liters: 1.0 }
    }
}

impl LeakRateEstimator {
    /// Estimator for a unit volume.
    pub fn new() -> Self {
        Self::default()
    }

    /// Scalar leak rate of one trace.
    ///
    /// Errors
    /// ------
    /// - [`VacuumError::LengthMismatch`] when `pressure` and `time` have
    ///   different lengths.
    pub fn estimate(&self, pressure: &[f64], time: &[f64]) -> VacuumResult<f64> {
        Ok(self.fit(pressure, time)?.leak_rate)
    }

    /// Full log-linear fit of one trace.
    ///
    /// Parameters
    /// ----------
    /// - `pressure`: pressure samples; non-finite entries are dropped
    ///   pairwise with their time.
    /// - `time`: parallel time axis, in whatever unit the caller uses; the
    ///   slope and time constant come out in that unit.
    ///
    /// Returns
    /// -------
    /// - `Ok(LeakRateFit)`; the zero fit when fewer than two finite pairs
    ///   remain or the time axis has no variance.
    ///
    /// Errors
    /// ------
    /// - [`VacuumError::LengthMismatch`] when the arrays have different
    ///   lengths.
    pub fn fit(&self, pressure: &[f64], time: &[f64]) -> VacuumResult<LeakRateFit> {
        if pressure.len() != time.len() {
            return Err(VacuumError::LengthMismatch {
                values: pressure.len(),
                timestamps: time.len(),
            });
        }

        let mut t_clean = Vec::with_capacity(pressure.len());
        let mut p_clean = Vec::with_capacity(pressure.len());
        for (&p, &t) in pressure.iter().zip(time) {
            if p.is_finite() && t.is_finite() {
                t_clean.push(t);
                p_clean.push(p.max(LOG_FLOOR));
            }
        }
        if t_clean.len() < 2 {
            return Ok(LeakRateFit::zero());
        }

        let log_p: Vec<f64> = p_clean.iter().map(|&p| p.ln()).collect();
        let t_mean = t_clean.iter().mean();
        let y_mean = log_p.iter().mean();

        let mut sxx = 0.0;
        let mut sxy = 0.0;
        for (&t, &y) in t_clean.iter().zip(&log_p) {
            sxx += (t - t_mean) * (t - t_mean);
            sxy += (t - t_mean) * (y - y_mean);
        }
        if sxx == 0.0 {
            return Ok(LeakRateFit::zero());
        }
        let slope = sxy / sxx;

        let mut ss_res = 0.0;
        let mut ss_tot = 0.0;
        for (&t, &y) in t_clean.iter().zip(&log_p) {
            let predicted = y_mean + slope * (t - t_mean);
            ss_res += (y - predicted) * (y - predicted);
            ss_tot += (y - y_mean) * (y - y_mean);
        }
        let r_squared = if ss_tot > 0.0 { 1.0 - ss_res / ss_tot } else { 0.0 };

        let mean_pressure = p_clean.iter().mean();
        Ok(LeakRateFit {
            leak_rate: (self.volume_liters * slope * mean_pressure).abs(),
            slope,
            r_squared,
            time_constant: if slope != 0.0 { Some(-1.0 / slope) } else { None },
        })
    }
}
