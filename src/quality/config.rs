//! Quality thresholds — explicit configuration for quality analysis.
//!
//! Purpose
//! -------
//! Collect the detection thresholds for quality analysis in one value
//! object, so every analysis run states its tolerances explicitly and two
//! analyzers with different configurations can coexist without shared
//! mutable state.
//!
//! Key behaviors
//! -------------
//! - Represent all quality-detection knobs via [`QualityConfig`]: the
//!   near-zero tolerance, the outlier method and threshold, the stuck-sensor
//!   duplicate tolerance, and the sampling-gap factor.
//! - Provide defaults matching the documented detection rules, so
//!   `QualityConfig::default()` is the standard analysis.
//!
//! Conventions
//! -----------
//! - Thresholds are plain `f64` constants, not adaptive; a config is built
//!   once and read many times.
//! - The outlier threshold is interpreted by the chosen
//!   [`OutlierMethod`](crate::stats::OutlierMethod): IQR fence multiplier,
//!   z-score cutoff, or MAD multiplier.
//!
//! Downstream usage
//! ----------------
//! - Pass to [`QualityAnalyzer::with_config`](crate::quality::QualityAnalyzer::with_config),
//!   or use [`QualityAnalyzer::new`](crate::quality::QualityAnalyzer::new)
//!   for the defaults.
//!
//! Testing notes
//! -------------
//! - A unit test pins the default values; behavioral effects of each
//!   threshold are exercised in the analyzer's tests.

use crate::stats::OutlierMethod;

/// QualityConfig — detection thresholds for one analysis run.
///
/// Fields
/// ------
/// - `zero_threshold`: `f64`
///   Finite samples with `|x| ≤ zero_threshold` count as near-zero readings
///   (a dead-gauge signature for strictly positive quantities such as
///   pressure). Default `1e-10`.
/// - `outlier_method`: [`OutlierMethod`]
///   Interval definition used to flag out-of-band samples. Default IQR.
/// - `outlier_threshold`: `f64`
///   Width multiplier for the chosen method. Default `3.0`.
/// - `duplicate_threshold`: `f64`
///   Two consecutive finite samples closer than this are considered
///   repeats of one reading (stuck-sensor signature). Default `1e-6`.
/// - `gap_threshold`: `f64`
///   A timestamp step larger than `gap_threshold` times the median step is
///   reported as a sampling gap. Default `10.0`.
///
/// Invariants
/// ----------
/// - All thresholds are expected to be finite and non-negative; the config
///   carries intent and performs no validation of its own.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QualityConfig {
    pub zero_threshold: f64,
    pub outlier_method: OutlierMethod,
    pub outlier_threshold: f64,
    pub duplicate_threshold: f64,
    pub gap_threshold: f64,
}

impl Default for QualityConfig {
    fn default() -> Self {
        QualityConfig {
            zero_threshold: 1e-10,
            outlier_method: OutlierMethod::Iqr,
            outlier_threshold: 3.0,
            duplicate_threshold: 1e-6,
            gap_threshold: 10.0,
        }
    }
}
