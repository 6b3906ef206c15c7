//! stats — shared numeric primitives for the analyzers.
//!
//! Purpose
//! -------
//! Collect the windowed and distributional building blocks every analyzer in
//! the crate relies on: centered rolling statistics with explicit edge
//! handling ([`rolling`]) and whole-series summaries with the shared
//! out-of-band interval definition ([`summary`]).
//!
//! Key behaviors
//! -------------
//! - Rolling mean/std/min over a centered window, `NaN` where no full window
//!   fits, plus the backward-then-forward [`fill_edges`] convention used to
//!   make those outputs total ([`rolling`]).
//! - Finite-view extraction, [`SummaryStats`] descriptive summaries, and
//!   [`outlier_bounds`], the single acceptance-interval definition shared by
//!   quality reporting and outlier removal ([`summary`]).
//!
//! Invariants & assumptions
//! ------------------------
//! - Non-finite samples (`NaN`, ±∞) mean "missing" everywhere in this
//!   subtree; they are skipped, never propagated into a statistic.
//! - Nothing here panics on numeric input or holds state between calls;
//!   degenerate inputs yield empty/`NaN`/`None` outputs as documented per
//!   function.
//!
//! Conventions
//! -----------
//! - Rolling std is the sample statistic (windowed origin, needs two valid
//!   samples); summary std is the population statistic (whole-series view).
//! - Outputs are freshly allocated `Array1<f64>` or plain structs; inputs
//!   are never mutated.
//!
//! Downstream usage
//! ----------------
//! - [`crate::vacuum`] uses [`rolling`] for spike thresholds and the
//!   base-pressure stability search; [`crate::cleaning`] uses both
//!   submodules for removal bounds, gap fill, and smoothing;
//!   [`crate::quality`] uses [`summary`] for metric computation.
//!
//! Testing notes
//! -------------
//! - Unit tests in [`rolling`] pin the window-placement and edge-fill
//!   conventions; tests in [`summary`] pin the <3-sample refusal and the
//!   per-method bracketing behavior of [`outlier_bounds`].

pub mod rolling;
pub mod summary;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::rolling::{fill_edges, rolling_mean, rolling_min, rolling_std};
pub use self::summary::{
    finite_values, outlier_bounds, population_cv, OutlierMethod, SummaryStats,
};
