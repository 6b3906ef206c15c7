//! Gap imputation: produce a hole-free series from a gapped one.
//!
//! Every method is length-preserving, leaves valid samples untouched, and
//! guarantees a finite output at every position. The one exception to
//! "impute from the data" is the all-missing series, which has nothing to
//! impute from and resolves to 0.0 everywhere.

use statrs::statistics::Statistics;

use crate::stats::finite_values;

/// How missing samples are imputed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillMethod {
    /// Straight-line interpolation between the surrounding valid samples;
    /// edges take the nearest valid value.
    Linear,
    /// Global degree-2 least-squares trend evaluated at the missing
    /// positions; falls back to linear with fewer than three valid points.
    Polynomial,
    /// Previous valid value; leading holes take the first valid value.
    Forward,
    /// Next valid value; trailing holes take the last valid value.
    Backward,
    /// Mean of the valid samples.
    Mean,
}

/// Impute every missing sample of `values`.
///
/// Parameters
/// ----------
/// - `values`: the series; `NaN`/±∞ entries count as missing.
/// - `method`: imputation rule, see [`FillMethod`].
///
/// Returns
/// -------
/// - A series of the same length with every position finite. Valid
///   samples pass through unchanged. An all-missing series resolves to
///   0.0 everywhere; an empty one stays empty.
pub fn fill_gaps(values: &[f64], method: FillMethod) -> Vec<f64> {
    if values.is_empty() {
        return Vec::new();
    }
    let clean = finite_values(values);
    if clean.is_empty() {
        return vec![0.0; values.len()];
    }

    match method {
        FillMethod::Linear => linear_fill(values),
        FillMethod::Polynomial => polynomial_fill(values),
        FillMethod::Forward => {
            let mut out = values.to_vec();
            ffill(&mut out);
            bfill(&mut out);
            out
        }
        FillMethod::Backward => {
            let mut out = values.to_vec();
            bfill(&mut out);
            ffill(&mut out);
            out
        }
        FillMethod::Mean => {
            let mean = clean.iter().mean();
            values.iter().map(|&x| if x.is_finite() { x } else { mean }).collect()
        }
    }
}

/// Propagate the previous valid value forward over holes.
fn ffill(values: &mut [f64]) {
    let mut last_valid = f64::NAN;
    for x in values.iter_mut() {
        if x.is_finite() {
            last_valid = *x;
        } else if last_valid.is_finite() {
            *x = last_valid;
        }
    }
}

/// Propagate the next valid value backward over holes.
fn bfill(values: &mut [f64]) {
    let mut next_valid = f64::NAN;
    for x in values.iter_mut().rev() {
        if x.is_finite() {
            next_valid = *x;
        } else if next_valid.is_finite() {
            *x = next_valid;
        }
    }
}

/// Interior holes by straight-line interpolation, edges by nearest valid.
fn linear_fill(values: &[f64]) -> Vec<f64> {
    let mut out = values.to_vec();
    let valid: Vec<usize> =
        values.iter().enumerate().filter(|(_, x)| x.is_finite()).map(|(i, _)| i).collect();

    for pair in valid.windows(2) {
        let (i0, i1) = (pair[0], pair[1]);
        if i1 > i0 + 1 {
            let span = (i1 - i0) as f64;
            for j in i0 + 1..i1 {
                out[j] = values[i0] + (values[i1] - values[i0]) * (j - i0) as f64 / span;
            }
        }
    }
    bfill(&mut out);
    ffill(&mut out);
    out
}

/// Missing positions from a global quadratic trend fit by least squares.
///
/// Solves the 3×3 normal equations by Cramer's rule; a singular system or
/// fewer than three valid points degrade to the linear fill.
fn polynomial_fill(values: &[f64]) -> Vec<f64> {
    let points: Vec<(f64, f64)> = values
        .iter()
        .enumerate()
        .filter(|(_, x)| x.is_finite())
        .map(|(i, &x)| (i as f64, x))
        .collect();
    if points.len() < 3 {
        return linear_fill(values);
    }

    let n = points.len() as f64;
    let (mut sx, mut sx2, mut sx3, mut sx4) = (0.0, 0.0, 0.0, 0.0);
    let (mut sy, mut sxy, mut sx2y) = (0.0, 0.0, 0.0);
    for &(x, y) in &points {
        let x2 = x * x;
        sx += x;
        sx2 += x2;
        sx3 += x2 * x;
        sx4 += x2 * x2;
        sy += y;
        sxy += x * y;
        sx2y += x2 * y;
    }

    let det = |m: [[f64; 3]; 3]| -> f64 {
        m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
            - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
            + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
    };

    let system = [[n, sx, sx2], [sx, sx2, sx3], [sx2, sx3, sx4]];
    let d = det(system);
    if d == 0.0 || !d.is_finite() {
        return linear_fill(values);
    }

    let a = det([[sy, sx, sx2], [sxy, sx2, sx3], [sx2y, sx3, sx4]]) / d;
    let b = det([[n, sy, sx2], [sx, sxy, sx3], [sx2, sx2y, sx4]]) / d;
    let c = det([[n, sx, sy], [sx, sx2, sxy], [sx2, sx3, sx2y]]) / d;

    values
        .iter()
        .enumerate()
        .map(|(i, &x)| {
            if x.is_finite() {
                x
            } else {
                let t = i as f64;
                a + b * t + c * t * t
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_METHODS: [FillMethod; 5] = [
        FillMethod::Linear,
        FillMethod::Polynomial,
        FillMethod::Forward,
        FillMethod::Backward,
        FillMethod::Mean,
    ];

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Each method's imputation rule on small, hand-checkable series.
    // - The hole-free output invariant across every method.
    // - The all-missing and empty degradations.
    //
    // They intentionally DO NOT cover:
    // - Interaction with outlier removal; the integration test exercises
    //   the remove-then-fill pipeline.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify linear interpolation of an interior hole and nearest-valid
    // extension at both edges.
    //
    // Given
    // -----
    // - [NaN, 1, NaN, NaN, 4, NaN].
    //
    // Expect
    // ------
    // - [1, 1, 2, 3, 4, 4].
    fn linear_interpolates_interior_and_extends_edges() {
        let filled = fill_gaps(&[f64::NAN, 1.0, f64::NAN, f64::NAN, 4.0, f64::NAN], FillMethod::Linear);

        let expected = [1.0, 1.0, 2.0, 3.0, 4.0, 4.0];
        for (i, &e) in expected.iter().enumerate() {
            assert!((filled[i] - e).abs() < 1e-12, "index {i}: got {}", filled[i]);
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify the fill directions: forward carries the previous value,
    // backward the next, and each covers its blind edge with the other
    // direction.
    //
    // Given
    // -----
    // - [NaN, 1, NaN, 3] forward; [1, NaN, 3, NaN] backward.
    //
    // Expect
    // ------
    // - [1, 1, 1, 3] and [1, 3, 3, 3].
    fn forward_and_backward_fill_directions() {
        let forward = fill_gaps(&[f64::NAN, 1.0, f64::NAN, 3.0], FillMethod::Forward);
        assert_eq!(forward, vec![1.0, 1.0, 1.0, 3.0]);

        let backward = fill_gaps(&[1.0, f64::NAN, 3.0, f64::NAN], FillMethod::Backward);
        assert_eq!(backward, vec![1.0, 3.0, 3.0, 3.0]);
    }

    #[test]
    // Purpose
    // -------
    // Verify the mean fill: every hole takes the mean of the valid
    // samples.
    //
    // Given
    // -----
    // - [1, NaN, 3].
    //
    // Expect
    // ------
    // - [1, 2, 3].
    fn mean_fill_uses_valid_mean() {
        assert_eq!(fill_gaps(&[1.0, f64::NAN, 3.0], FillMethod::Mean), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    // Purpose
    // -------
    // Verify that the polynomial fill recovers an exact quadratic at the
    // missing positions and falls back to linear with too few points.
    //
    // Given
    // -----
    // - y = i² sampled at indices 0, 1, 2, 4, 5 with holes at 3 and 6;
    //   a two-point series for the fallback.
    //
    // Expect
    // ------
    // - Holes restored to 9 and 36; the fallback behaves like linear.
    fn polynomial_recovers_quadratic_trend() {
        // Arrange
        let values = [0.0, 1.0, 4.0, f64::NAN, 16.0, 25.0, f64::NAN];

        // Act
        let filled = fill_gaps(&values, FillMethod::Polynomial);

        // Assert
        assert!((filled[3] - 9.0).abs() < 1e-6, "hole at 3: got {}", filled[3]);
        assert!((filled[6] - 36.0).abs() < 1e-6, "hole at 6: got {}", filled[6]);

        let fallback = fill_gaps(&[2.0, f64::NAN, 6.0], FillMethod::Polynomial);
        assert!((fallback[1] - 4.0).abs() < 1e-12);
    }

    #[test]
    // Purpose
    // -------
    // Verify the hole-free output invariant for every method on a series
    // mixing NaN, infinity, and valid samples.
    //
    // Given
    // -----
    // - [NaN, 2, +inf, 4, NaN, 6, NaN] with every method.
    //
    // Expect
    // ------
    // - Same length, all positions finite, valid samples untouched.
    fn every_method_produces_hole_free_output() {
        let values = [f64::NAN, 2.0, f64::INFINITY, 4.0, f64::NAN, 6.0, f64::NAN];

        for method in ALL_METHODS {
            let filled = fill_gaps(&values, method);
            assert_eq!(filled.len(), values.len(), "{method:?}");
            assert!(filled.iter().all(|x| x.is_finite()), "{method:?}: {filled:?}");
            assert_eq!(filled[1], 2.0, "{method:?}");
            assert_eq!(filled[3], 4.0, "{method:?}");
            assert_eq!(filled[5], 6.0, "{method:?}");
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify idempotence: filling an already hole-free series returns it
    // unchanged, for every method.
    //
    // Given
    // -----
    // - A gapped series filled once, then filled again.
    //
    // Expect
    // ------
    // - The second fill is the identity.
    fn filling_is_idempotent() {
        let values = [f64::NAN, 2.0, f64::NAN, 4.0, f64::NAN];

        for method in ALL_METHODS {
            let once = fill_gaps(&values, method);
            let twice = fill_gaps(&once, method);
            assert_eq!(once, twice, "{method:?}");
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify the degenerate inputs: all-missing resolves to zeros, empty
    // stays empty.
    //
    // Given
    // -----
    // - [NaN, NaN] and an empty slice, with every method.
    //
    // Expect
    // ------
    // - [0.0, 0.0] and an empty vector.
    fn degenerate_inputs_resolve_to_sentinels() {
        for method in ALL_METHODS {
            assert_eq!(fill_gaps(&[f64::NAN, f64::NAN], method), vec![0.0, 0.0], "{method:?}");
            assert!(fill_gaps(&[], method).is_empty(), "{method:?}");
        }
    }
}
