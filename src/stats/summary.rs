//! Distributional summaries and shared outlier bounds.
//!
//! Purpose
//! -------
//! Provide the "clean view" primitives used by every analyzer: extraction of
//! finite samples, whole-series summary statistics, and the out-of-band
//! interval shared by outlier reporting and outlier removal (which are
//! configured independently but must agree on the bound definition).
//!
//! Key behaviors
//! -------------
//! - [`finite_values`] drops `NaN`/±∞ and preserves order.
//! - [`SummaryStats::from_values`] computes the usual location/scale/shape
//!   summary over the finite view (quartiles via `statrs` order statistics).
//! - [`outlier_bounds`] maps an [`OutlierMethod`] and threshold to a closed
//!   acceptance interval, or `None` when fewer than three finite samples
//!   exist (insufficient statistical basis).
//!
//! Conventions
//! -----------
//! - Standard deviations here are population statistics (the z-score method
//!   flags `|z| > k` against the population σ); the rolling module uses the
//!   sample statistic, matching its windowed origin.
//! - All functions are stateless, allocate only their outputs, and never
//!   panic on numeric input.

use statrs::statistics::{Data, OrderStatistics, Statistics};

/// The finite samples of a series, in order. `NaN` and ±∞ are dropped.
pub fn finite_values(values: &[f64]) -> Vec<f64> {
    values.iter().copied().filter(|x| x.is_finite()).collect()
}

/// How out-of-band samples are identified.
///
/// The same interval definition serves both quality *reporting* and cleaning
/// *removal*; the two call sites carry independent thresholds because
/// reporting tolerance and removal tolerance serve different purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutlierMethod {
    /// Tukey fences: `[Q1 − k·IQR, Q3 + k·IQR]`.
    Iqr,
    /// Population z-score: `[mean − k·σ, mean + k·σ]`, i.e. `|z| > k` flags.
    ZScore,
    /// Median absolute deviation: `[median − k·MAD, median + k·MAD]`.
    Mad,
}

/// Acceptance interval `(lower, upper)` for the given method and threshold,
/// computed over an already-cleaned (finite-only) sample.
///
/// Returns `None` when `clean.len() < 3`: with fewer than three samples no
/// outlier call has a statistical basis, so callers report nothing rather
/// than guessing.
pub fn outlier_bounds(clean: &[f64], method: OutlierMethod, threshold: f64) -> Option<(f64, f64)> {
    if clean.len() < 3 {
        return None;
    }
    match method {
        OutlierMethod::Iqr => {
            let mut data = Data::new(clean.to_vec());
            let q1 = data.lower_quartile();
            let q3 = data.upper_quartile();
            let iqr = q3 - q1;
            Some((q1 - threshold * iqr, q3 + threshold * iqr))
        }
        OutlierMethod::ZScore => {
            let mean = clean.iter().mean();
            let std = clean.iter().population_std_dev();
            Some((mean - threshold * std, mean + threshold * std))
        }
        OutlierMethod::Mad => {
            let mut data = Data::new(clean.to_vec());
            let median = data.percentile(50);
            let deviations: Vec<f64> = clean.iter().map(|&x| (x - median).abs()).collect();
            let mad = Data::new(deviations).percentile(50);
            Some((median - threshold * mad, median + threshold * mad))
        }
    }
}

/// Coefficient of variation `σ / μ` (population σ) of an already-cleaned
/// sample.
///
/// Returns `None` for an empty sample. A zero mean yields `Some(1.0)`, the
/// conventional worst-case relative dispersion, so consistency metrics built
/// on this stay bounded.
pub fn population_cv(clean: &[f64]) -> Option<f64> {
    if clean.is_empty() {
        return None;
    }
    let mean = clean.iter().mean();
    if mean == 0.0 {
        return Some(1.0);
    }
    Some(clean.iter().population_std_dev() / mean)
}

/// Whole-series summary over the finite view of one series.
///
/// Mirrors the usual descriptive block: location (mean/median), scale
/// (population std/variance, IQR), extent (min/max/range), and relative
/// dispersion (`cv`, `None` when the mean is zero).
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryStats {
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    pub std: f64,
    pub variance: f64,
    pub min: f64,
    pub max: f64,
    pub range: f64,
    pub q1: f64,
    pub q3: f64,
    pub iqr: f64,
    /// Coefficient of variation `σ / μ`; `None` when the mean is zero.
    pub cv: Option<f64>,
}

impl SummaryStats {
    /// Summary over the finite samples of `values`, or `None` when no finite
    /// sample exists.
    pub fn from_values(values: &[f64]) -> Option<Self> {
        let clean = finite_values(values);
        if clean.is_empty() {
            return None;
        }

        let mean = clean.iter().mean();
        let std = clean.iter().population_std_dev();
        let min = Statistics::min(clean.iter());
        let max = Statistics::max(clean.iter());

        let mut data = Data::new(clean.clone());
        let median = data.percentile(50);
        let q1 = data.lower_quartile();
        let q3 = data.upper_quartile();

        Some(SummaryStats {
            count: clean.len(),
            mean,
            median,
            std,
            variance: std * std,
            min,
            max,
            range: max - min,
            q1,
            q3,
            iqr: q3 - q1,
            cv: if mean != 0.0 { Some(std / mean) } else { None },
        })
    }
}
