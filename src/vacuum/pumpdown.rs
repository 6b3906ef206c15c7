//! Pump-down characterization: the composite vacuum profile.
//!
//! Purpose
//! -------
//! Condense one pump-down trace into a single [`PumpdownProfile`]: base
//! pressure, leak rate, pump-down speed, and the timing milestones an
//! operator reads off a chart recorder. This is the one-call summary built
//! on the single-purpose estimators in this subtree.
//!
//! Key behaviors
//! -------------
//! - Drop non-finite samples pairwise with their times once, up front;
//!   every downstream step sees the cleaned, aligned arrays.
//! - Compose [`BasePressureEstimator`] and [`LeakRateEstimator`] for the
//!   physical quantities and derive the milestone fields (initial and
//!   minimum pressure, time to 10% of initial, time to minimum, mean
//!   pump-down rate, pumping efficiency) directly.
//! - Report unanalyzable traces through a structured
//!   [`PumpdownDiagnostic`] on the returned [`PumpdownOutcome`], alongside
//!   a sentinel profile, so callers can branch on the failure cause
//!   instead of guessing from zeros.
//!
//! Invariants & assumptions
//! ------------------------
//! - `analyze` never panics and errors only on a length-mismatched time
//!   array; every data problem degrades to the sentinel-plus-diagnostic
//!   outcome.
//! - Without a time array, milestones are in sample-index units over the
//!   cleaned series; with one, in the caller's time units.
//!
//! Downstream usage
//! ----------------
//! - The integration test drives the full clean → quality → pump-down
//!   pipeline through this entry point.

use crate::vacuum::base_pressure::BasePressureEstimator;
use crate::vacuum::errors::{VacuumError, VacuumResult};
use crate::vacuum::leak_rate::LeakRateEstimator;

/// Why a trace could not be characterized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PumpdownDiagnostic {
    /// The pressure array was empty.
    EmptySeries,
    /// No sample had both a finite pressure and a finite time.
    NoFiniteSamples,
}

impl std::fmt::Display for PumpdownDiagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PumpdownDiagnostic::EmptySeries => write!(f, "pressure series is empty"),
            PumpdownDiagnostic::NoFiniteSamples => {
                write!(f, "pressure series has no finite samples")
            }
        }
    }
}

/// PumpdownProfile — the condensed description of one pump-down.
///
/// Fields
/// ------
/// - `base_pressure`: most-stable-plateau estimate, strictly positive.
/// - `leak_rate`: log-linear leak estimate, non-negative.
/// - `pumpdown_rate`: mean magnitude of the falling pressure steps; 0 when
///   the trace never falls.
/// - `initial_pressure` / `min_pressure`: first and smallest cleaned
///   samples.
/// - `time_to_10_percent`: earliest time the pressure reached 10% of the
///   initial value; `None` when it never did.
/// - `time_to_min`: time of the minimum sample.
/// - `pumping_efficiency`: pressure drop per unit time down to the
///   minimum; 0 when the minimum is the first sample.
/// - `pressure_range`: `initial_pressure - min_pressure`.
#[derive(Debug, Clone, PartialEq)]
pub struct PumpdownProfile {
    pub base_pressure: f64,
    pub leak_rate: f64,
    pub pumpdown_rate: f64,
    pub initial_pressure: f64,
    pub min_pressure: f64,
    pub time_to_10_percent: Option<f64>,
    pub time_to_min: f64,
    pub pumping_efficiency: f64,
    pub pressure_range: f64,
}

impl PumpdownProfile {
    /// Sentinel profile for unanalyzable traces. The base pressure carries
    /// the estimator's strictly positive floor; everything else is zero.
    fn unobserved() -> Self {
        PumpdownProfile {
            base_pressure: 1e-6,
            leak_rate: 0.0,
            pumpdown_rate: 0.0,
            initial_pressure: 0.0,
            min_pressure: 0.0,
            time_to_10_percent: None,
            time_to_min: 0.0,
            pumping_efficiency: 0.0,
            pressure_range: 0.0,
        }
    }
}

/// PumpdownOutcome — profile plus failure observability.
///
/// Fields
/// ------
/// - `profile`: the characterization; the sentinel profile when
///   `diagnostic` is set.
/// - `diagnostic`: `None` for an analyzed trace, otherwise why the trace
///   could not be characterized.
#[derive(Debug, Clone, PartialEq)]
pub struct PumpdownOutcome {
    pub profile: PumpdownProfile,
    pub diagnostic: Option<PumpdownDiagnostic>,
}

/// PumpdownAnalyzer — one-call pump-down characterization.
///
/// Fields
/// ------
/// - `base`: the [`BasePressureEstimator`] stage.
/// - `leak`: the [`LeakRateEstimator`] stage.
///
/// Invariants
/// ----------
/// - Holds read-only configuration only; concurrent analyses need no
///   coordination.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PumpdownAnalyzer {
    pub base: BasePressureEstimator,
    pub leak: LeakRateEstimator,
}

impl PumpdownAnalyzer {
    /// Analyzer with default estimator stages.
    pub fn new() -> Self {
        Self::default()
    }

    /// Characterize one pump-down trace.
    ///
    /// Parameters
    /// ----------
    /// - `pressure`: the trace; non-finite samples are dropped pairwise
    ///   with their times.
    /// - `time`: optional parallel time axis; omitted, milestones come out
    ///   in sample-index units over the cleaned series.
    ///
    /// Returns
    /// -------
    /// - `Ok(PumpdownOutcome)`: a full profile, or the sentinel profile
    ///   with a [`PumpdownDiagnostic`] naming why the trace was
    ///   unanalyzable.
    ///
    /// Errors
    /// ------
    /// - [`VacuumError::LengthMismatch`] when `time` is present and its
    ///   length differs from `pressure.len()`.
    pub fn analyze(
        &self,
        pressure: &[f64],
        time: Option<&[f64]>,
    ) -> VacuumResult<PumpdownOutcome> {
        let n = pressure.len();
        if let Some(t) = time {
            if t.len() != n {
                return Err(VacuumError::LengthMismatch { values: n, timestamps: t.len() });
            }
        }
        if n == 0 {
            return Ok(PumpdownOutcome {
                profile: PumpdownProfile::unobserved(),
                diagnostic: Some(PumpdownDiagnostic::EmptySeries),
            });
        }

        let mut p_clean = Vec::with_capacity(n);
        let mut t_clean = Vec::with_capacity(n);
        for i in 0..n {
            let t = match time {
                Some(t) => t[i],
                None => i as f64,
            };
            if pressure[i].is_finite() && t.is_finite() {
                p_clean.push(pressure[i]);
                t_clean.push(t);
            }
        }
        if p_clean.is_empty() {
            return Ok(PumpdownOutcome {
                profile: PumpdownProfile::unobserved(),
                diagnostic: Some(PumpdownDiagnostic::NoFiniteSamples),
            });
        }

        let base_pressure = self.base.estimate(&p_clean);
        let leak_rate = self.leak.estimate(&p_clean, &t_clean)?;

        let mut drop_sum = 0.0;
        let mut drop_count = 0usize;
        for w in p_clean.windows(2) {
            let step = w[1] - w[0];
            if step < 0.0 {
                drop_sum += -step;
                drop_count += 1;
            }
        }
        let pumpdown_rate = if drop_count > 0 { drop_sum / drop_count as f64 } else { 0.0 };

        let initial_pressure = p_clean[0];
        let (min_idx, min_pressure) = p_clean
            .iter()
            .copied()
            .enumerate()
            .fold((0, p_clean[0]), |best, (i, p)| if p < best.1 { (i, p) } else { best });
        let time_to_min = t_clean[min_idx];

        let target = 0.1 * initial_pressure;
        let time_to_10_percent = p_clean
            .iter()
            .zip(&t_clean)
            .find(|(&p, _)| p <= target)
            .map(|(_, &t)| t);

        let elapsed_to_min = time_to_min - t_clean[0];
        let pumping_efficiency = if elapsed_to_min > 0.0 {
            (initial_pressure - min_pressure) / elapsed_to_min
        } else {
            0.0
        };

        Ok(PumpdownOutcome {
            profile: PumpdownProfile {
                base_pressure,
                leak_rate,
                pumpdown_rate,
                initial_pressure,
                min_pressure,
                time_to_10_percent,
                time_to_min,
                pumping_efficiency,
                pressure_range: initial_pressure - min_pressure,
            },
            diagnostic: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Ten-sample pump-down from 1000 down to 5.
    fn pumpdown_trace() -> (Vec<f64>, Vec<f64>) {
        let pressure = vec![1000.0, 800.0, 600.0, 400.0, 200.0, 100.0, 50.0, 20.0, 10.0, 5.0];
        let time = (0..10).map(|i| i as f64).collect();
        (pressure, time)
    }

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Milestone fields on a clean pump-down, with and without a time
    //   axis.
    // - Pairwise cleaning of missing samples before every stage.
    // - The sentinel-plus-diagnostic outcomes and the contract error.
    // - A trace that never falls (no pump-down at all).
    //
    // They intentionally DO NOT cover:
    // - The base-pressure and leak-rate stages in depth; those have their
    //   own tests.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify every milestone field on a clean ten-sample pump-down.
    //
    // Given
    // -----
    // - Pressure falling 1000 → 5 over times 0..9.
    //
    // Expect
    // ------
    // - initial 1000, min 5, range 995, time_to_min 9, efficiency 995/9,
    //   time_to_10_percent 5 (first sample ≤ 100), mean drop 995/9,
    //   positive leak rate and base pressure, no diagnostic.
    fn clean_pumpdown_profile() {
        // Arrange
        let (pressure, time) = pumpdown_trace();

        // Act
        let outcome =
            PumpdownAnalyzer::new().analyze(&pressure, Some(&time)).expect("aligned input");

        // Assert
        assert_eq!(outcome.diagnostic, None);
        let profile = &outcome.profile;
        assert_eq!(profile.initial_pressure, 1000.0);
        assert_eq!(profile.min_pressure, 5.0);
        assert_eq!(profile.pressure_range, 995.0);
        assert_eq!(profile.time_to_min, 9.0);
        assert!((profile.pumping_efficiency - 995.0 / 9.0).abs() < 1e-9);
        assert_eq!(profile.time_to_10_percent, Some(5.0));
        assert!((profile.pumpdown_rate - 995.0 / 9.0).abs() < 1e-9);
        assert!(profile.leak_rate > 0.0);
        assert!(profile.base_pressure > 0.0 && profile.base_pressure.is_finite());
    }

    #[test]
    // Purpose
    // -------
    // Verify that omitting the time axis yields the same shape of profile
    // in sample-index units.
    //
    // Given
    // -----
    // - The same trace without timestamps.
    //
    // Expect
    // ------
    // - time_to_min 9.0 and time_to_10_percent Some(5.0), as indices.
    fn index_units_without_time_axis() {
        let (pressure, _) = pumpdown_trace();

        let outcome = PumpdownAnalyzer::new().analyze(&pressure, None).expect("aligned input");

        assert_eq!(outcome.profile.time_to_min, 9.0);
        assert_eq!(outcome.profile.time_to_10_percent, Some(5.0));
    }

    #[test]
    // Purpose
    // -------
    // Verify pairwise cleaning: interleaved NaN pressures and times are
    // dropped and the remaining samples still characterize the trace.
    //
    // Given
    // -----
    // - The trace with pressure[2] and time[6] set to NaN.
    //
    // Expect
    // ------
    // - No diagnostic; initial 1000, min 5; milestones drawn from the
    //   surviving samples.
    fn missing_samples_are_dropped_pairwise() {
        let (mut pressure, mut time) = pumpdown_trace();
        pressure[2] = f64::NAN;
        time[6] = f64::NAN;

        let outcome =
            PumpdownAnalyzer::new().analyze(&pressure, Some(&time)).expect("aligned input");

        assert_eq!(outcome.diagnostic, None);
        assert_eq!(outcome.profile.initial_pressure, 1000.0);
        assert_eq!(outcome.profile.min_pressure, 5.0);
        assert_eq!(outcome.profile.time_to_min, 9.0);
    }

    #[test]
    // Purpose
    // -------
    // Verify the structured failure outcomes: empty and all-missing
    // traces return the sentinel profile with the matching diagnostic.
    //
    // Given
    // -----
    // - An empty trace and an all-NaN trace.
    //
    // Expect
    // ------
    // - `EmptySeries` and `NoFiniteSamples` diagnostics respectively, both
    //   with the sentinel profile.
    fn unanalyzable_traces_carry_diagnostics() {
        let analyzer = PumpdownAnalyzer::new();

        let empty = analyzer.analyze(&[], None).expect("aligned input");
        assert_eq!(empty.diagnostic, Some(PumpdownDiagnostic::EmptySeries));
        assert_eq!(empty.profile.leak_rate, 0.0);
        assert_eq!(empty.profile.base_pressure, 1e-6);

        let missing = analyzer.analyze(&[f64::NAN; 4], None).expect("aligned input");
        assert_eq!(missing.diagnostic, Some(PumpdownDiagnostic::NoFiniteSamples));
        assert_eq!(missing.profile.pressure_range, 0.0);
    }

    #[test]
    // Purpose
    // -------
    // Verify the never-falling trace: no negative steps, minimum at the
    // first sample.
    //
    // Given
    // -----
    // - Monotonically rising pressure.
    //
    // Expect
    // ------
    // - pumpdown_rate 0, pumping_efficiency 0, time_to_10_percent None.
    fn rising_trace_has_no_pumpdown() {
        let pressure = [1.0, 2.0, 3.0, 4.0];

        let outcome = PumpdownAnalyzer::new().analyze(&pressure, None).expect("aligned input");

        let profile = &outcome.profile;
        assert_eq!(profile.pumpdown_rate, 0.0);
        assert_eq!(profile.pumping_efficiency, 0.0);
        assert_eq!(profile.time_to_10_percent, None);
        assert_eq!(profile.min_pressure, 1.0);
    }

    #[test]
    // Purpose
    // -------
    // Verify that `time_to_min` lands at the turning point of a trace
    // that decays and then rises, not at the end of the array.
    //
    // Given
    // -----
    // - Pressure falling over the first five samples and rising over the
    //   last three.
    //
    // Expect
    // ------
    // - min at index 4, so time_to_min 4.0 and min_pressure 2.0.
    fn time_to_min_lands_at_turning_point() {
        let pressure = [10.0, 8.0, 6.0, 4.0, 2.0, 3.0, 4.0, 5.0];

        let outcome = PumpdownAnalyzer::new().analyze(&pressure, None).expect("aligned input");

        assert_eq!(outcome.profile.min_pressure, 2.0);
        assert_eq!(outcome.profile.time_to_min, 4.0);
    }

    #[test]
    // Purpose
    // -------
    // Verify the length-mismatch contract error.
    //
    // Given
    // -----
    // - Four pressures and three times.
    //
    // Expect
    // ------
    // - `Err(VacuumError::LengthMismatch { values: 4, timestamps: 3 })`.
    fn mismatched_time_axis_is_a_contract_error() {
        let result =
            PumpdownAnalyzer::new().analyze(&[1.0, 2.0, 3.0, 4.0], Some(&[0.0, 1.0, 2.0]));
        assert_eq!(result, Err(VacuumError::LengthMismatch { values: 4, timestamps: 3 }));
    }
}
