//! cleaning — series repair before analysis.
//!
//! Purpose
//! -------
//! Turn a raw, defective series into one the analyzers can trust: mark
//! out-of-band samples missing ([`remove_outliers`]), impute the holes
//! ([`fill_gaps`]), and attenuate noise ([`smooth_data`]).
//!
//! Key behaviors
//! -------------
//! - Every operation is a stateless free function: series in, series out,
//!   same length, inputs never mutated.
//! - Removal produces `NaN` markers rather than shrinking the series, so
//!   positions stay aligned with timestamps; filling then repairs the
//!   markers with a hole-free guarantee.
//! - Removal thresholds are call parameters, independent of the quality
//!   analyzer's reporting thresholds, but both share the same interval
//!   definitions ([`OutlierMethod`](crate::stats::OutlierMethod)).
//!
//! Invariants & assumptions
//! ------------------------
//! - Nothing here panics or errors on numeric input; degenerate series
//!   degrade per function (unchanged, zeros, or empty).
//! - [`fill_gaps`] output is finite at every position; [`smooth_data`]
//!   makes no such promise and should run after filling on gapped data.
//!
//! Conventions
//! -----------
//! - The canonical repair order is remove → fill → smooth; each stage is
//!   usable alone.
//!
//! Downstream usage
//! ----------------
//! - Typical code imports the main surface as:
//!
//!   ```rust
//!   use vacuum_timeseries::cleaning::{fill_gaps, remove_outliers, FillMethod};
//!   use vacuum_timeseries::stats::OutlierMethod;
//!
//!   let raw = [1.0, 1.1, 900.0, 1.2, f64::NAN, 1.3];
//!   let marked = remove_outliers(&raw, OutlierMethod::Iqr, 1.5);
//!   let repaired = fill_gaps(&marked, FillMethod::Linear);
//!   assert!(repaired.iter().all(|x| x.is_finite()));
//!   ```
//!
//! Testing notes
//! -------------
//! - Each submodule pins its own rules; the integration test drives the
//!   remove → fill → analyze pipeline end to end.

pub mod fill;
pub mod outliers;
pub mod smooth;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::fill::{fill_gaps, FillMethod};
pub use self::outliers::remove_outliers;
pub use self::smooth::{smooth_data, SmoothMethod};
