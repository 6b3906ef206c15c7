//! Pressure-spike detection against a locally adaptive threshold.
//!
//! Purpose
//! -------
//! Find transient pressure excursions — venting events, outgassing bursts,
//! gauge glitches — by comparing each sample against a rolling local
//! baseline, and group consecutive exceedances into discrete
//! [`SpikeEvent`]s with duration-based severity.
//!
//! Key behaviors
//! -------------
//! - The threshold at each position is `rolling_mean + k · rolling_std`
//!   over a centered window of `max(1, min(100, n / 10))` samples, with
//!   the undefined edge regions made total by
//!   [`fill_edges`](crate::stats::fill_edges).
//! - A sample is in-spike when it is finite and strictly exceeds its local
//!   threshold; maximal runs of in-spike samples at least `min_duration`
//!   long become events. A run still open at the end of the series is
//!   emitted.
//! - Event times are in timestamp units when timestamps are supplied,
//!   sample-index units otherwise.
//!
//! Invariants & assumptions
//! ------------------------
//! - Returned events are sorted by start index and pairwise disjoint.
//! - Missing samples are never in-spike and terminate a run.
//! - Degenerate inputs (empty, all-missing, too short for any window
//!   statistics) yield an empty event list, never an error or panic.
//!
//! Conventions
//! -----------
//! - The rolling window includes the sample under test, so a sustained
//!   excursion inflates its own baseline; detection favors short, sharp
//!   spikes over slow drifts, which is the intended reading of "spike".
//! - Severity is judged by run length alone (how long the excursion
//!   lasted), not by magnitude; `peak_value` carries the magnitude.
//!
//! Downstream usage
//! ----------------
//! - Called directly by consumers; typically run on a raw trace before the
//!   cleaning stages so the events can inform what to remove.
//!
//! Testing notes
//! -------------
//! - Unit tests cover single-sample and sustained spikes, the
//!   `min_duration` filter, severity mapping, timestamp versus index
//!   units, trailing-run emission, and the degenerate inputs.

use crate::stats::{fill_edges, rolling_mean, rolling_std};
use crate::vacuum::errors::{VacuumError, VacuumResult};

/// Largest adaptive window, in samples.
const MAX_WINDOW: usize = 100;

/// How long an excursion lasted, judged by run length in samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SpikeSeverity {
    /// Up to 5 samples.
    Low,
    /// 6 to 10 samples.
    Medium,
    /// More than 10 samples.
    High,
}

impl std::fmt::Display for SpikeSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SpikeSeverity::Low => write!(f, "low"),
            SpikeSeverity::Medium => write!(f, "medium"),
            SpikeSeverity::High => write!(f, "high"),
        }
    }
}

/// SpikeEvent — one detected pressure excursion.
///
/// Fields
/// ------
/// - `start_index` / `end_index`: first and last in-spike sample positions
///   (inclusive) in the analyzed series.
/// - `start_time` / `end_time`: the same endpoints in timestamp units when
///   timestamps were supplied, otherwise the indices as `f64`.
/// - `duration`: `end_time - start_time` with timestamps, run length in
///   samples without.
/// - `peak_value`: largest pressure inside the run.
/// - `mean_value`: mean pressure over the run.
/// - `severity`: run-length class, see [`SpikeSeverity`].
#[derive(Debug, Clone, PartialEq)]
pub struct SpikeEvent {
    pub start_index: usize,
    pub end_index: usize,
    pub start_time: f64,
    pub end_time: f64,
    pub duration: f64,
    pub peak_value: f64,
    pub mean_value: f64,
    pub severity: SpikeSeverity,
}

/// SpikeDetector — rolling-threshold spike detection.
///
/// Purpose
/// -------
/// Bundle the two detection knobs with the detection logic. The detector
/// holds read-only configuration and no cross-call state.
///
/// Fields
/// ------
/// - `threshold_sigma`: `f64`
///   Multiplier `k` on the rolling standard deviation. Default `3.0`.
/// - `min_duration`: `usize`
///   Shortest run, in samples, reported as an event. Default `1`.
///
/// Invariants
/// ----------
/// - Never panics on numeric input; never mutates its inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpikeDetector {
    pub threshold_sigma: f64,
    pub min_duration: usize,
}

impl Default for SpikeDetector {
    fn default() -> Self {
        SpikeDetector { threshold_sigma: 3.0, min_duration: 1 }
    }
}

impl SpikeDetector {
    /// Detector with the default threshold (3σ) and minimum duration (1).
    pub fn new() -> Self {
        Self::default()
    }

    /// Detect spike events in one pressure series.
    ///
    /// Parameters
    /// ----------
    /// - `pressure`: the series; `NaN`/±∞ entries are never in-spike.
    /// - `timestamps`: optional parallel timestamp array; switches event
    ///   times from sample-index units to timestamp units.
    ///
    /// Returns
    /// -------
    /// - `Ok(events)` sorted by start index and pairwise disjoint; empty
    ///   for degenerate input.
    ///
    /// Errors
    /// ------
    /// - [`VacuumError::LengthMismatch`] when `timestamps` is present and
    ///   its length differs from `pressure.len()`.
    pub fn detect(
        &self,
        pressure: &[f64],
        timestamps: Option<&[f64]>,
    ) -> VacuumResult<Vec<SpikeEvent>> {
        let n = pressure.len();
        if let Some(ts) = timestamps {
            if ts.len() != n {
                return Err(VacuumError::LengthMismatch {
                    values: n,
                    timestamps: ts.len(),
                });
            }
        }
        if n == 0 {
            return Ok(Vec::new());
        }

        let window = (n / 10).clamp(1, MAX_WINDOW);
        let mean = fill_edges(&rolling_mean(pressure, window));
        let std = fill_edges(&rolling_std(pressure, window));

        let mut events = Vec::new();
        let mut run_start: Option<usize> = None;
        for i in 0..n {
            let in_spike = pressure[i].is_finite()
                && mean[i].is_finite()
                && std[i].is_finite()
                && pressure[i] > mean[i] + self.threshold_sigma * std[i];
            match (in_spike, run_start) {
                (true, None) => run_start = Some(i),
                (false, Some(start)) => {
                    self.push_event(&mut events, pressure, timestamps, start, i - 1);
                    run_start = None;
                }
                _ => {}
            }
        }
        if let Some(start) = run_start {
            self.push_event(&mut events, pressure, timestamps, start, n - 1);
        }
        Ok(events)
    }

    /// Append the run `[start, end]` as an event if it meets `min_duration`.
    fn push_event(
        &self,
        events: &mut Vec<SpikeEvent>,
        pressure: &[f64],
        timestamps: Option<&[f64]>,
        start: usize,
        end: usize,
    ) {
        let len = end - start + 1;
        if len < self.min_duration.max(1) {
            return;
        }

        let run = &pressure[start..=end];
        let peak_value = run.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let mean_value = run.iter().sum::<f64>() / len as f64;

        let (start_time, end_time, duration) = match timestamps {
            Some(ts) => (ts[start], ts[end], ts[end] - ts[start]),
            None => (start as f64, end as f64, len as f64),
        };

        let severity = if len > 10 {
            SpikeSeverity::High
        } else if len > 5 {
            SpikeSeverity::Medium
        } else {
            SpikeSeverity::Low
        };

        events.push(SpikeEvent {
            start_index: start,
            end_index: end,
            start_time,
            end_time,
            duration,
            peak_value,
            mean_value,
            severity,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Flat baseline of `n` samples at 1.0 with `spike` written over the
    /// positions in `at`.
    fn baseline_with_spikes(n: usize, at: &[usize], spike: f64) -> Vec<f64> {
        let mut values = vec![1.0; n];
        for &i in at {
            values[i] = spike;
        }
        values
    }

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Detection of single-sample and sustained excursions over a flat
    //   baseline, including the trailing-run case.
    // - The min_duration filter and the severity ladder.
    // - Timestamp-unit versus index-unit event times.
    // - Degenerate inputs and the length-mismatch contract error.
    //
    // They intentionally DO NOT cover:
    // - The rolling primitives themselves; those are pinned in the stats
    //   module tests.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that a single sharp spike over a flat baseline is detected
    // as one low-severity event at the right index.
    //
    // Given
    // -----
    // - 200 samples at 1.0 with 50.0 at index 100 (window 20).
    //
    // Expect
    // ------
    // - Exactly one event: indices 100..=100, peak 50.0, severity Low,
    //   index-unit duration 1.0.
    fn single_spike_is_detected() {
        // Arrange
        let values = baseline_with_spikes(200, &[100], 50.0);

        // Act
        let events = SpikeDetector::new().detect(&values, None).expect("aligned input");

        // Assert
        assert_eq!(events.len(), 1);
        let event = &events[0];
        assert_eq!((event.start_index, event.end_index), (100, 100));
        assert_eq!(event.peak_value, 50.0);
        assert_eq!(event.severity, SpikeSeverity::Low);
        assert_eq!(event.duration, 1.0);
    }

    #[test]
    // Purpose
    // -------
    // Verify that a sustained excursion is grouped into a single event
    // spanning the whole run, with peak and mean taken over the run.
    //
    // Given
    // -----
    // - 1000 samples at 1.0 with 50.0 over indices 500..=502 (window 100).
    //
    // Expect
    // ------
    // - One event: indices 500..=502, peak 50.0, mean 50.0, severity Low.
    fn sustained_spike_is_one_event() {
        let values = baseline_with_spikes(1000, &[500, 501, 502], 50.0);

        let events = SpikeDetector::new().detect(&values, None).expect("aligned input");

        assert_eq!(events.len(), 1);
        let event = &events[0];
        assert_eq!((event.start_index, event.end_index), (500, 502));
        assert_eq!(event.peak_value, 50.0);
        assert!((event.mean_value - 50.0).abs() < 1e-12);
        assert_eq!(event.severity, SpikeSeverity::Low);
    }

    #[test]
    // Purpose
    // -------
    // Verify the min_duration filter: a single-sample spike is dropped
    // when events must last at least two samples.
    //
    // Given
    // -----
    // - The single-spike series with `min_duration = 2`.
    //
    // Expect
    // ------
    // - No events.
    fn min_duration_filters_short_runs() {
        let values = baseline_with_spikes(200, &[100], 50.0);
        let detector = SpikeDetector { min_duration: 2, ..SpikeDetector::default() };

        let events = detector.detect(&values, None).expect("aligned input");

        assert!(events.is_empty());
    }

    #[test]
    // Purpose
    // -------
    // Verify the severity ladder on run length: 6 samples is Medium and
    // 11 samples is High (with a softer sigma so the long run still
    // clears its self-inflated baseline).
    //
    // Given
    // -----
    // - 1000-sample baseline, runs of 6 and 11 at 50.0, threshold 2σ.
    //
    // Expect
    // ------
    // - Medium for the 6-run, High for the 11-run.
    fn severity_follows_run_length() {
        let detector = SpikeDetector { threshold_sigma: 2.0, ..SpikeDetector::default() };

        let medium_run: Vec<usize> = (300..306).collect();
        let values = baseline_with_spikes(1000, &medium_run, 50.0);
        let events = detector.detect(&values, None).expect("aligned input");
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].severity, SpikeSeverity::Medium);

        let high_run: Vec<usize> = (300..311).collect();
        let values = baseline_with_spikes(1000, &high_run, 50.0);
        let events = detector.detect(&values, None).expect("aligned input");
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].severity, SpikeSeverity::High);
    }

    #[test]
    // Purpose
    // -------
    // Verify that supplying timestamps switches event times to timestamp
    // units while indices stay sample-based.
    //
    // Given
    // -----
    // - The single-spike series with timestamps at 0.5-second steps.
    //
    // Expect
    // ------
    // - start_time == end_time == 50.0, duration 0.0, indices unchanged.
    fn timestamps_set_event_time_units() {
        // Arrange
        let values = baseline_with_spikes(200, &[100], 50.0);
        let timestamps: Vec<f64> = (0..200).map(|i| 0.5 * i as f64).collect();

        // Act
        let events =
            SpikeDetector::new().detect(&values, Some(&timestamps)).expect("aligned input");

        // Assert
        assert_eq!(events.len(), 1);
        let event = &events[0];
        assert_eq!(event.start_index, 100);
        assert_eq!(event.start_time, 50.0);
        assert_eq!(event.end_time, 50.0);
        assert_eq!(event.duration, 0.0);
    }

    #[test]
    // Purpose
    // -------
    // Verify that a run still open at the end of the series is emitted.
    //
    // Given
    // -----
    // - 200 samples with the spike at the final index.
    //
    // Expect
    // ------
    // - One event ending at index 199.
    fn trailing_open_run_is_emitted() {
        let values = baseline_with_spikes(200, &[199], 50.0);

        let events = SpikeDetector::new().detect(&values, None).expect("aligned input");

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].end_index, 199);
    }

    #[test]
    // Purpose
    // -------
    // Verify the degenerate paths: empty input, all-missing input, and a
    // flat series produce no events; misaligned timestamps are an error.
    //
    // Given
    // -----
    // - An empty series, an all-NaN series, a constant series, and a
    //   timestamp array of the wrong length.
    //
    // Expect
    // ------
    // - Empty event lists for the first three; LengthMismatch for the
    //   last.
    fn degenerate_inputs() {
        let detector = SpikeDetector::new();

        assert!(detector.detect(&[], None).expect("aligned input").is_empty());
        assert!(detector.detect(&[f64::NAN; 30], None).expect("aligned input").is_empty());
        assert!(detector.detect(&[2.0; 30], None).expect("aligned input").is_empty());

        assert_eq!(
            detector.detect(&[1.0, 2.0], Some(&[0.0])),
            Err(VacuumError::LengthMismatch { values: 2, timestamps: 1 })
        );
    }
}
