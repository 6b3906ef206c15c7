//! quality — defect detection and trust scoring for sensor series.
//!
//! Purpose
//! -------
//! Answer "can this series be trusted" for one scalar series at a time:
//! detect missing samples, near-zero readings, out-of-band outliers,
//! stuck-sensor duplicate runs, and sampling gaps, then condense the
//! findings into ratio metrics, a bounded 0–100 score, a letter grade, and
//! actionable recommendations.
//!
//! Key behaviors
//! -------------
//! - Expose quality analysis via [`QualityAnalyzer`] and its
//!   [`analyze`](QualityAnalyzer::analyze) entry point, producing a
//!   [`QualityReport`] value object.
//! - Carry all detection thresholds in an explicit [`QualityConfig`]; two
//!   analyzers with different tolerances coexist without shared state.
//! - Provide a dedicated error type [`QualityError`] and result alias
//!   [`QualityResult`]; the only error is a length-mismatched timestamp
//!   array, a caller bug rather than a data problem.
//!
//! Invariants & assumptions
//! ------------------------
//! - Data defects are reported, never raised: empty and all-missing series
//!   yield documented sentinel reports with `quality_score == 0.0` resp. a
//!   heavy missing-data penalty.
//! - `quality_score` is finite, bounded in `[0, 100]`, monotone in each
//!   defect fraction, and exactly 100 for a defect-free series.
//! - All reported indices refer to the series as passed in.
//!
//! Conventions
//! -----------
//! - Scoring is penalty accumulation over defect percentages; the ratio
//!   metrics (completeness, consistency, validity) are reported alongside
//!   but never blended into the score.
//! - Duplicates are accounted twice on purpose: collapsed run starts for
//!   reporting and validity, raw flagged samples for the score.
//!
//! Downstream usage
//! ----------------
//! - Typical code imports the main surface as:
//!
//!   ```rust
//!   use vacuum_timeseries::quality::{QualityAnalyzer, QualityReport};
//!
//!   let values = [1.2e-3, 9.0e-4, f64::NAN, 8.5e-4];
//!   let report: QualityReport = QualityAnalyzer::new().analyze(&values, None)?;
//!   assert_eq!(report.missing_count, 1);
//!   # Ok::<(), vacuum_timeseries::quality::QualityError>(())
//!   ```
//!
//!   and only refers to [`config`] or [`errors`] directly when tuning
//!   thresholds or matching on [`QualityError`].
//!
//! Testing notes
//! -------------
//! - Unit tests in [`report`] pin the penalty curves and grade ladder; tests
//!   in [`analyzer`] cover each detector, the sentinel paths, and the
//!   contract error; tests in [`errors`] verify `Display` payloads.

pub mod analyzer;
pub mod config;
pub mod errors;
pub mod report;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::analyzer::QualityAnalyzer;
pub use self::config::QualityConfig;
pub use self::errors::{QualityError, QualityResult};
pub use self::report::{GapInfo, QualityReport};
