//! vacuum_timeseries — quality scoring and vacuum metrics for sensor series.
//!
//! Purpose
//! -------
//! Derive physical and statistical characteristics from scalar time-series
//! measurements — principally vacuum-chamber pressure traces, but generically
//! any noisy, gapped, timestamp-indexed sensor series. The crate answers two
//! questions: "can this series be trusted" (quality metrics) and "what did
//! the system physically do" (base pressure, leak rate, pressure spikes,
//! pump-down characterization), without requiring a human to eyeball a plot.
//!
//! Key behaviors
//! -------------
//! - Score series quality on a bounded 0–100 scale with a letter grade and
//!   actionable recommendations ([`quality`]).
//! - Detect pressure spikes against a locally adaptive rolling threshold and
//!   group them into discrete events ([`vacuum::spikes`]).
//! - Estimate base pressure from the most temporally stable plateau, leak
//!   rate from a log-linear fit, and a composite pump-down profile
//!   ([`vacuum`]).
//! - Clean series before analysis: outlier removal, gap imputation, and
//!   smoothing ([`cleaning`]).
//! - Share the rolling-window and distributional primitives all of the above
//!   rely on ([`stats`]).
//!
//! Invariants & assumptions
//! ------------------------
//! - Missing values are encoded as `f64::NAN`; non-finite samples (±∞) are
//!   treated as missing everywhere.
//! - Analyzers never panic and never error on well-formed numeric input;
//!   degenerate data (empty, all-missing, all-identical) degrades to
//!   documented sentinel results. The only propagating errors are
//!   length-mismatch contract violations, which indicate a caller bug.
//! - Analyzers hold read-only configuration and no cross-call state, so
//!   concurrent analyses of different series need no coordination.
//!
//! Conventions
//! -----------
//! - Indices in reports are relative to the analyzed series as passed in.
//! - When timestamps are supplied they must be parallel to the values
//!   (`values.len() == timestamps.len()`) and are assumed monotonically
//!   non-decreasing; event times are then expressed in timestamp units,
//!   otherwise in sample-index units.
//! - Thresholds are fixed, documented constants carried by explicit config
//!   values, not adaptive models.
//!
//! Downstream usage
//! ----------------
//! - A typical pipeline: optionally clean raw arrays via [`cleaning`], run
//!   [`quality::QualityAnalyzer::analyze`] for trust metrics, and
//!   [`vacuum::PumpdownAnalyzer::analyze`] for the physical profile.
//! - Callers own all returned report objects; the engine keeps nothing.
//!
//! Testing notes
//! -------------
//! - Each module carries unit tests for its detection and degradation rules;
//!   `tests/integration_pumpdown_pipeline.rs` exercises the full
//!   clean → quality → pump-down pipeline on synthetic traces.

pub mod cleaning;
pub mod quality;
pub mod stats;
pub mod vacuum;
