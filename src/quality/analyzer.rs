//! Quality analyzer — defect detection and metric computation.
//!
//! Purpose
//! -------
//! Implement the quality-analysis entry point: scan one series (optionally
//! with parallel timestamps) for missing samples, near-zero readings,
//! out-of-band outliers, stuck-sensor duplicate runs, and sampling gaps,
//! and assemble the resulting [`QualityReport`].
//!
//! Key behaviors
//! -------------
//! - Expose [`QualityAnalyzer::analyze`] as the single public entry point;
//!   detection rules live in compact private helpers.
//! - Apply the thresholds carried by [`QualityConfig`]; the analyzer itself
//!   holds no other state, so one instance can serve many series.
//! - Degrade, never fail, on bad data: an empty series yields the zero-score
//!   sentinel report, an all-missing one a report whose metrics say so. The
//!   only error is a length-mismatched timestamp array.
//!
//! Invariants & assumptions
//! ------------------------
//! - Missing means non-finite; every detector skips non-finite samples
//!   rather than flagging them twice.
//! - Timestamps, when supplied, are assumed monotonically non-decreasing;
//!   gap detection compares steps against their median.
//!
//! Conventions
//! -----------
//! - All reported indices refer to the series as passed in.
//! - A duplicate run starts at the first of the repeated samples; the raw
//!   flagged count (each repeat of its predecessor) feeds the score.
//!
//! Downstream usage
//! ----------------
//! - Construct once via [`QualityAnalyzer::new`] (default thresholds) or
//!   [`QualityAnalyzer::with_config`], then call
//!   [`analyze`](QualityAnalyzer::analyze) per series.
//!
//! Testing notes
//! -------------
//! - Unit tests here cover each detector in isolation, the sentinel paths
//!   (empty, all-missing), the length-mismatch error, and the end-to-end
//!   report shape for a clean series and a defective one.

use statrs::statistics::{Data, OrderStatistics};

use crate::quality::config::QualityConfig;
use crate::quality::errors::{QualityError, QualityResult};
use crate::quality::report::{letter_grade, penalty_score, GapInfo, QualityReport};
use crate::stats::{finite_values, outlier_bounds, population_cv};

/// QualityAnalyzer — stateless quality analysis over one series at a time.
///
/// Purpose
/// -------
/// Bundle a [`QualityConfig`] with the detection logic. The analyzer holds
/// read-only configuration and nothing else; concurrent calls on one
/// instance are safe.
///
/// Key behaviors
/// -------------
/// - [`analyze`](QualityAnalyzer::analyze) runs every detector and returns
///   a fully assembled [`QualityReport`].
///
/// Invariants
/// ----------
/// - Never panics on numeric input; never mutates its inputs.
#[derive(Debug, Clone, Default)]
pub struct QualityAnalyzer {
    config: QualityConfig,
}

impl QualityAnalyzer {
    /// Analyzer with the default thresholds.
    pub fn new() -> Self {
        Self::with_config(QualityConfig::default())
    }

    /// Analyzer with explicit thresholds.
    pub fn with_config(config: QualityConfig) -> Self {
        QualityAnalyzer { config }
    }

    /// The thresholds this analyzer applies.
    pub fn config(&self) -> &QualityConfig {
        &self.config
    }

    /// Analyze one series and report its quality.
    ///
    /// Parameters
    /// ----------
    /// - `values`: the series; `NaN`/±∞ entries count as missing.
    /// - `timestamps`: optional parallel timestamp array. When present it
    ///   enables sampling-gap detection; it plays no other role here.
    ///
    /// Returns
    /// -------
    /// - `Ok(QualityReport)` for every numeric input, including empty and
    ///   all-missing series (which produce the documented sentinel reports).
    ///
    /// Errors
    /// ------
    /// - [`QualityError::LengthMismatch`] when `timestamps` is present and
    ///   its length differs from `values.len()`.
    ///
    /// Notes
    /// -----
    /// - The aggregate score is computed by penalty accumulation; see
    ///   [`QualityReport`] for the curves and the duplicate-accounting rule.
    pub fn analyze(
        &self,
        values: &[f64],
        timestamps: Option<&[f64]>,
    ) -> QualityResult<QualityReport> {
        let n = values.len();
        if let Some(ts) = timestamps {
            if ts.len() != n {
                return Err(QualityError::LengthMismatch {
                    values: n,
                    timestamps: ts.len(),
                });
            }
        }
        if n == 0 {
            return Ok(empty_report());
        }

        let clean = finite_values(values);
        let missing_count = n - clean.len();

        let zero_indices = self.detect_zeros(values);
        let outlier_indices = self.detect_outliers(values, &clean);
        let (duplicate_run_starts, duplicate_count) = self.detect_duplicates(values);
        let gaps = match timestamps {
            Some(ts) => self.detect_gaps(ts),
            None => Vec::new(),
        };

        let completeness = clean.len() as f64 / n as f64;
        let consistency = match population_cv(&clean) {
            Some(cv) => 1.0 / (1.0 + cv.abs()),
            None => 0.0,
        };
        let flagged = zero_indices.len() + outlier_indices.len() + duplicate_run_starts.len();
        let validity = (1.0 - flagged as f64 / n as f64).max(0.0);

        let quality_score = penalty_score(
            n,
            missing_count,
            zero_indices.len(),
            outlier_indices.len(),
            duplicate_count,
        );
        let grade = letter_grade(quality_score);

        let issues = build_issues(
            n,
            missing_count,
            &zero_indices,
            &outlier_indices,
            &duplicate_run_starts,
            duplicate_count,
            &gaps,
        );
        let recommendations = build_recommendations(
            n,
            missing_count,
            zero_indices.len(),
            outlier_indices.len(),
            duplicate_count,
            &gaps,
            quality_score,
            &issues,
        );

        Ok(QualityReport {
            total_points: n,
            valid_count: clean.len(),
            missing_count,
            zero_indices,
            outlier_indices,
            duplicate_run_starts,
            duplicate_count,
            gaps,
            completeness,
            consistency,
            validity,
            quality_score,
            grade,
            issues,
            recommendations,
        })
    }

    /// Positions of finite samples within the near-zero tolerance.
    fn detect_zeros(&self, values: &[f64]) -> Vec<usize> {
        values
            .iter()
            .enumerate()
            .filter(|(_, &x)| x.is_finite() && x.abs() <= self.config.zero_threshold)
            .map(|(i, _)| i)
            .collect()
    }

    /// Positions of finite samples outside the configured acceptance
    /// interval. Empty when fewer than three finite samples exist.
    fn detect_outliers(&self, values: &[f64], clean: &[f64]) -> Vec<usize> {
        let Some((lo, hi)) =
            outlier_bounds(clean, self.config.outlier_method, self.config.outlier_threshold)
        else {
            return Vec::new();
        };
        values
            .iter()
            .enumerate()
            .filter(|(_, &x)| x.is_finite() && (x < lo || x > hi))
            .map(|(i, _)| i)
            .collect()
    }

    /// Duplicate-run starts and the raw flagged-sample count.
    ///
    /// A sample is flagged when it and its predecessor are both finite and
    /// closer than the duplicate tolerance; a run starts at the predecessor
    /// of the first flagged sample in a maximal stretch.
    fn detect_duplicates(&self, values: &[f64]) -> (Vec<usize>, usize) {
        let mut run_starts = Vec::new();
        let mut flagged_count = 0usize;
        let mut prev_flagged = false;
        for i in 1..values.len() {
            let flagged = values[i].is_finite()
                && values[i - 1].is_finite()
                && (values[i] - values[i - 1]).abs() <= self.config.duplicate_threshold;
            if flagged {
                flagged_count += 1;
                if !prev_flagged {
                    run_starts.push(i - 1);
                }
            }
            prev_flagged = flagged;
        }
        (run_starts, flagged_count)
    }

    /// Sampling gaps: steps larger than the gap factor times the median step.
    fn detect_gaps(&self, timestamps: &[f64]) -> Vec<GapInfo> {
        if timestamps.len() < 2 {
            return Vec::new();
        }
        let steps: Vec<f64> = timestamps
            .windows(2)
            .map(|w| w[1] - w[0])
            .filter(|d| d.is_finite())
            .collect();
        if steps.is_empty() {
            return Vec::new();
        }
        let median_step = Data::new(steps).percentile(50);
        if !(median_step > 0.0) {
            return Vec::new();
        }

        let mut gaps = Vec::new();
        for i in 1..timestamps.len() {
            let step = timestamps[i] - timestamps[i - 1];
            if step.is_finite() && step > self.config.gap_threshold * median_step {
                gaps.push(GapInfo { start: i - 1, end: i, step, expected_step: median_step });
            }
        }
        gaps
    }
}

/// Sentinel report for an empty series: zero score, grade F.
fn empty_report() -> QualityReport {
    QualityReport {
        total_points: 0,
        valid_count: 0,
        missing_count: 0,
        zero_indices: Vec::new(),
        outlier_indices: Vec::new(),
        duplicate_run_starts: Vec::new(),
        duplicate_count: 0,
        gaps: Vec::new(),
        completeness: 0.0,
        consistency: 0.0,
        validity: 0.0,
        quality_score: 0.0,
        grade: "F",
        issues: vec!["no numeric data".to_string()],
        recommendations: vec!["supply a non-empty series".to_string()],
    }
}

fn build_issues(
    n: usize,
    missing: usize,
    zeros: &[usize],
    outliers: &[usize],
    run_starts: &[usize],
    duplicate_count: usize,
    gaps: &[GapInfo],
) -> Vec<String> {
    let pct = |count: usize| 100.0 * count as f64 / n as f64;
    let mut issues = Vec::new();
    if missing > 0 {
        issues.push(format!("{missing} missing samples ({:.1}%)", pct(missing)));
    }
    if !zeros.is_empty() {
        issues.push(format!("{} near-zero readings ({:.1}%)", zeros.len(), pct(zeros.len())));
    }
    if !outliers.is_empty() {
        issues.push(format!("{} outliers ({:.1}%)", outliers.len(), pct(outliers.len())));
    }
    if duplicate_count > 0 {
        issues.push(format!(
            "{duplicate_count} repeated readings in {} runs",
            run_starts.len()
        ));
    }
    if !gaps.is_empty() {
        issues.push(format!("{} sampling gaps", gaps.len()));
    }
    issues
}

#[allow(clippy::too_many_arguments)]
fn build_recommendations(
    n: usize,
    missing: usize,
    zeros: usize,
    outliers: usize,
    duplicate_count: usize,
    gaps: &[GapInfo],
    score: f64,
    issues: &[String],
) -> Vec<String> {
    let pct = |count: usize| 100.0 * count as f64 / n as f64;
    let mut recs = Vec::new();
    if pct(missing) > 10.0 {
        recs.push("interpolate or resample: more than 10% of samples are missing".to_string());
    }
    if pct(zeros) > 5.0 {
        recs.push("check gauge connectivity: frequent near-zero readings".to_string());
    }
    if pct(outliers) > 2.0 {
        recs.push("remove outliers before quantitative analysis".to_string());
    }
    if pct(duplicate_count) > 10.0 {
        recs.push("inspect the sensor for sticking: many repeated readings".to_string());
    }
    if !gaps.is_empty() {
        recs.push("review acquisition timing: sampling gaps detected".to_string());
    }
    if score < 70.0 {
        recs.push("overall quality is low; clean the series before drawing conclusions".to_string());
    }
    if score >= 95.0 && issues.is_empty() {
        recs.push("no action needed: series quality is excellent".to_string());
    }
    recs
}
