//! Quality report — the value object produced by quality analysis.
//!
//! Purpose
//! -------
//! Define [`QualityReport`] together with the aggregate scoring rule and
//! letter-grade ladder applied to it. The report is a plain value object:
//! every detection result, ratio metric, and derived judgment from one
//! analysis run, owned entirely by the caller.
//!
//! Key behaviors
//! -------------
//! - Hold per-defect counts and index lists (missing, near-zero, outlier,
//!   duplicate-run, gap) alongside the three ratio metrics
//!   (completeness, consistency, validity).
//! - Compute the aggregate 0–100 score by penalty accumulation: each defect
//!   class subtracts from a perfect 100 according to its severity curve,
//!   and the result is clamped to `[0, 100]`.
//! - Map scores to letter grades from `A+` down to `F`.
//!
//! Invariants & assumptions
//! ------------------------
//! - `quality_score` is finite and within `[0, 100]`; a defect-free series
//!   scores exactly 100.
//! - The score is monotone: increasing any defect fraction never raises it.
//! - The duplicate *penalty* uses the raw flagged-sample count
//!   (`duplicate_count`), not the collapsed run count — a fully stuck
//!   sensor is one run but must not score near-perfect.
//!
//! Conventions
//! -----------
//! - Ratio metrics are fractions in `[0, 1]`; the score and percentage
//!   penalties are on the 0–100 scale.
//! - All indices refer to positions in the analyzed series as passed in.
//!
//! Downstream usage
//! ----------------
//! - Produced by [`QualityAnalyzer::analyze`](crate::quality::QualityAnalyzer::analyze);
//!   nothing in this crate retains a reference to it.
//!
//! Testing notes
//! -------------
//! - Unit tests here pin the penalty curves at their documented breakpoints,
//!   the clamping at both ends, and the grade ladder boundaries.

/// One detected sampling gap: the step from `start` to `end` exceeded the
/// gap factor times the median step.
#[derive(Debug, Clone, PartialEq)]
pub struct GapInfo {
    /// Index of the last sample before the gap.
    pub start: usize,
    /// Index of the first sample after the gap (`start + 1`).
    pub end: usize,
    /// Observed timestamp step across the gap.
    pub step: f64,
    /// Median timestamp step of the series, for scale.
    pub expected_step: f64,
}

/// QualityReport — everything one quality analysis determined.
///
/// Purpose
/// -------
/// Carry the full outcome of analyzing one series: defect counts and
/// locations, the three ratio metrics, the aggregate score with its letter
/// grade, and human-readable issues and recommendations.
///
/// Fields
/// ------
/// - `total_points`: `usize`
///   Length of the analyzed series, including missing samples.
/// - `valid_count`: `usize`
///   Samples that are finite.
/// - `missing_count`: `usize`
///   Samples that are `NaN` or ±∞; `total_points - valid_count`.
/// - `zero_indices`: `Vec<usize>`
///   Positions of finite samples within the near-zero tolerance.
/// - `outlier_indices`: `Vec<usize>`
///   Positions of finite samples outside the configured acceptance
///   interval. Empty when fewer than three finite samples exist.
/// - `duplicate_run_starts`: `Vec<usize>`
///   First position of each maximal run of repeated readings (the position
///   where the second identical sample appears).
/// - `duplicate_count`: `usize`
///   Raw number of samples flagged as repeats of their predecessor. Feeds
///   the duplicate penalty; `duplicate_run_starts.len()` feeds validity.
/// - `gaps`: `Vec<GapInfo>`
///   Sampling gaps found in the timestamp array, when one was supplied.
/// - `completeness`: `f64`
///   Fraction of samples that are finite.
/// - `consistency`: `f64`
///   `1 / (1 + cv)` where `cv` is the coefficient of variation of the
///   finite samples (`cv` is taken as 1 when the mean is zero).
/// - `validity`: `f64`
///   Fraction of samples not flagged as zero, outlier, or duplicate run,
///   clamped at zero.
/// - `quality_score`: `f64`
///   Aggregate penalty score in `[0, 100]`.
/// - `grade`: `&'static str`
///   Letter grade for `quality_score`, `A+` through `F`.
/// - `issues`: `Vec<String>`
///   One line per detected defect class, with counts and percentages.
/// - `recommendations`: `Vec<String>`
///   Actionable follow-ups derived from the issues.
///
/// Invariants
/// ----------
/// - `quality_score ∈ [0, 100]` and is finite, for every input.
/// - Index lists are sorted ascending and within `0..total_points`.
#[derive(Debug, Clone, PartialEq)]
pub struct QualityReport {
    pub total_points: usize,
    pub valid_count: usize,
    pub missing_count: usize,
    pub zero_indices: Vec<usize>,
    pub outlier_indices: Vec<usize>,
    pub duplicate_run_starts: Vec<usize>,
    pub duplicate_count: usize,
    pub gaps: Vec<GapInfo>,
    pub completeness: f64,
    pub consistency: f64,
    pub validity: f64,
    pub quality_score: f64,
    pub grade: &'static str,
    pub issues: Vec<String>,
    pub recommendations: Vec<String>,
}

/// Aggregate score by penalty accumulation, on the 0–100 scale.
///
/// Penalty curves (percentages of `total`):
/// - missing: 3.0 points per percent up to 25%, then `75 + 1.0` per
///   additional percent, capped at 90;
/// - duplicates (raw flagged samples): 0.5 per percent up to 5%, then
///   `2.0` per percent above 5%, capped at 50;
/// - near-zeros: free up to 10%, then 0.5 per percent above, capped at 15;
/// - outliers: free up to 5%, then 1.0 per percent above, capped at 15.
///
/// An empty series scores 0.
pub(crate) fn penalty_score(
    total: usize,
    missing: usize,
    zeros: usize,
    outliers: usize,
    raw_duplicates: usize,
) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let pct = |count: usize| 100.0 * count as f64 / total as f64;

    let missing_pct = pct(missing);
    let missing_penalty = if missing_pct <= 25.0 {
        3.0 * missing_pct
    } else {
        (75.0 + (missing_pct - 25.0)).min(90.0)
    };

    let dup_pct = pct(raw_duplicates);
    let duplicate_penalty =
        if dup_pct > 5.0 { ((dup_pct - 5.0) * 2.0).min(50.0) } else { dup_pct * 0.5 };

    let zero_pct = pct(zeros);
    let zero_penalty = if zero_pct > 10.0 { ((zero_pct - 10.0) * 0.5).min(15.0) } else { 0.0 };

    let outlier_pct = pct(outliers);
    let outlier_penalty = if outlier_pct > 5.0 { (outlier_pct - 5.0).min(15.0) } else { 0.0 };

    (100.0 - missing_penalty - duplicate_penalty - zero_penalty - outlier_penalty).clamp(0.0, 100.0)
}

/// Letter grade for an aggregate score.
pub(crate) fn letter_grade(score: f64) -> &'static str {
    if score >= 95.0 {
        "A+"
    } else if score >= 90.0 {
        "A"
    } else if score >= 85.0 {
        "B+"
    } else if score >= 80.0 {
        "B"
    } else if score >= 75.0 {
        "C+"
    } else if score >= 70.0 {
        "C"
    } else if score >= 60.0 {
        "D"
    } else {
        "F"
    }
}
